use anyhow::{anyhow, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::{stdin, stdout, Stdin, Write};
use std::path::PathBuf;

use hashi_ai::{
    board::Board,
    error::HashiError,
    moves::{is_terminal, Move, Player},
    puzzle::Puzzle,
    score::GameResult,
    solver::Solver,
    SEARCH_DEPTH,
};

mod display;
use display::*;

/// Play two-player Hashi against a minimax agent
#[derive(Parser)]
#[command(name = "hashi", version)]
struct Args {
    /// Puzzle file to play, asked for if not given
    #[arg(short, long)]
    puzzle: Option<PathBuf>,

    /// How many moves ahead the AI searches
    #[arg(short, long, default_value_t = SEARCH_DEPTH)]
    depth: usize,

    /// Let the AI make the first move
    #[arg(long)]
    ai_first: bool,

    /// Log search details
    #[arg(short, long)]
    verbose: bool,

    /// Write the log to a file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(args: &Args) -> Result<()> {
    let default_filter = if args.verbose { "debug" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    if let Some(path) = &args.log_file {
        builder.target(env_logger::Target::Pipe(Box::new(File::create(path)?)));
    }
    builder.init();
    Ok(())
}

fn read_line(stdin: &Stdin, prompt: &str) -> Result<String> {
    print!("{}", prompt);
    stdout().flush()?;

    let mut buffer = String::new();
    if stdin.read_line(&mut buffer)? == 0 {
        return Err(anyhow!("input closed"));
    }
    Ok(buffer.trim().to_string())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    if args.depth == 0 {
        return Err(anyhow!("search depth must be at least 1"));
    }

    let stdin = stdin();

    println!("Welcome to Hashi\n");

    let path = match &args.puzzle {
        Some(path) => path.clone(),
        None => PathBuf::from(read_line(&stdin, "Puzzle file > ")?),
    };
    let puzzle = Puzzle::load(&path)?;
    info!(
        "loaded {} islands on a {}x{} grid from {}",
        puzzle.islands.len(),
        puzzle.size,
        puzzle.size,
        path.display()
    );
    let mut board = Board::from_puzzle(puzzle)?;

    // choose who moves first
    let mut ai_first = args.ai_first;
    while !ai_first {
        match read_line(&stdin, "Should the AI move first? y/n: ")?
            .to_lowercase()
            .chars()
            .next()
        {
            Some(_letter @ 'y') => ai_first = true,
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }
    let mut player = if ai_first { Player::Ai } else { Player::Human };

    // game loop
    loop {
        display(&board)?;

        if is_terminal(&board) {
            break;
        }

        match player {
            Player::Ai => {
                println!("\n{}'s turn (AI), thinking...", player);

                let mut solver = Solver::new(board.clone()).with_max_depth(args.depth);
                let (score, best_move) = solver.solve_verbose(Player::Ai);
                let best_move = match best_move.ok_or(HashiError::NoMoveAvailable) {
                    Ok(best_move) => best_move,
                    Err(err) => {
                        println!("{}", err);
                        break;
                    }
                };

                println!("Best move: {} (value {})", best_move, score);
                info!(
                    "{} plays {} after searching {} nodes",
                    player, best_move, solver.node_count
                );
                board.apply_move(player, best_move)?;
            }
            Player::Human => {
                println!("\n{}'s turn:", player);
                let input = read_line(
                    &stdin,
                    "Move input (bridge <island> <island> | label <island> <3|4>) > ",
                )?;

                let action = match input.parse::<Move>() {
                    Err(err) => {
                        println!("{}", err);
                        continue;
                    }
                    Ok(action) => action,
                };
                if let Err(err) = board.apply_move(player, action) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
                info!("{} plays {}", player, action);
            }
        }

        player = player.opponent();
    }

    // end state
    let scores = board.scores();
    info!(
        "final score: {} {}, {} {}",
        Player::Human,
        scores.score(Player::Human),
        Player::Ai,
        scores.score(Player::Ai)
    );
    match scores.result() {
        GameResult::HumanWin => println!("You won!"),
        GameResult::AiWin => println!("AI won!"),
        GameResult::Tie => println!("It's a tie."),
    }
    Ok(())
}
