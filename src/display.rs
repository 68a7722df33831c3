use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use hashi_ai::{board::Board, moves::Player};

/// Draws the board, coloring islands and bridges, followed by both scores
pub fn display(board: &Board) -> Result<()> {
    let mut stdout = stdout();
    let grid = board.to_string();

    stdout.queue(PrintStyledContent(style("\n")))?;
    for line in grid.lines() {
        for c in line.chars() {
            let cell = match c {
                '0'..='9' => style(c).attribute(Attribute::Bold).with(Color::Yellow),
                '─' | '═' | '│' | '║' => style(c).with(Color::Cyan),
                '.' => style(c).with(Color::DarkGrey),
                _ => style(c),
            };
            stdout.queue(PrintStyledContent(cell))?;
        }
        stdout.queue(PrintStyledContent(style('\n')))?;
    }

    let scores = board.scores();
    stdout.queue(PrintStyledContent(style(format!(
        "\n{}: {}, {}: {}\n",
        Player::Human,
        scores.score(Player::Human),
        Player::Ai,
        scores.score(Player::Ai)
    ))))?;
    stdout.flush()?;
    Ok(())
}
