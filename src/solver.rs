//! An agent to choose moves in two-player Hashi

use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

use crate::{
    board::Board,
    error::HashiError,
    moves::{enumerate_moves, Move, Player},
    score::evaluate,
    SEARCH_DEPTH,
};

/// Below every reachable evaluation, the initial alpha bound
pub const MIN_SCORE: i32 = i32::MIN;
/// Above every reachable evaluation, the initial beta bound
pub const MAX_SCORE: i32 = i32::MAX;

/// An agent that picks moves by minimax search with alpha-beta pruning
///
/// # Notes
/// The AI is the maximizing side and the human the minimizing side. Leaves are
/// scored by the exact score difference (AI minus human) with no further
/// heuristic, so the quality of play depends only on the depth cap.
///
/// The search assumes the opponent always answers with its own best move.
///
/// # Tie-breaking
/// Moves are searched in generation order. When several moves share the best
/// value, the last one searched is chosen.
#[derive(Clone)]
pub struct Solver {
    board: Board,
    max_depth: usize,
    pruning: bool,

    /// The number of nodes searched by this `Solver` so far (for diagnostics only)
    pub node_count: usize,
}

impl Solver {
    /// Creates a new `Solver` searching to the default depth
    pub fn new(board: Board) -> Self {
        Self {
            board,
            max_depth: SEARCH_DEPTH,
            pruning: true,
            node_count: 0,
        }
    }

    /// Sets the depth cap of the search, at least one move deep
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    /// Disables alpha-beta cutoffs, searching every node up to the depth cap
    pub fn without_pruning(mut self) -> Self {
        self.pruning = false;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Performs game tree search below the root
    ///
    /// Returns the minimax value of the position, exact whenever it lies
    /// strictly between `alpha` and `beta`.
    fn minimax(
        &mut self,
        board: &Board,
        depth: usize,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.node_count += 1;

        if depth >= self.max_depth {
            return evaluate(board);
        }
        let moves = enumerate_moves(board);
        if moves.is_empty() {
            return evaluate(board);
        }

        let (player, mut best) = if maximizing {
            (Player::Ai, MIN_SCORE)
        } else {
            (Player::Human, MAX_SCORE)
        };

        for action in moves {
            let mut next = board.clone();
            // generated moves are always legal
            if next.apply_move(player, action).is_err() {
                continue;
            }
            let score = self.minimax(&next, depth + 1, !maximizing, alpha, beta);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            // the opponent already has a better option elsewhere, so it will never allow this line
            if self.pruning && beta <= alpha {
                break;
            }
        }
        best
    }

    /// Searches a position and picks the move for the side to play
    ///
    /// `maximizing` is true when the AI is to move. Returns the value of the
    /// position and the chosen move, or `None` if the position is terminal or
    /// `depth` has already reached the cap.
    pub fn search(
        &mut self,
        board: &Board,
        depth: usize,
        maximizing: bool,
        alpha: i32,
        beta: i32,
    ) -> (i32, Option<Move>) {
        self.top_level_search(board, depth, maximizing, alpha, beta, false)
    }

    fn top_level_search(
        &mut self,
        board: &Board,
        depth: usize,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        verbose: bool,
    ) -> (i32, Option<Move>) {
        self.node_count += 1;

        if depth >= self.max_depth {
            return (evaluate(board), None);
        }
        let moves = enumerate_moves(board);
        if moves.is_empty() {
            return (evaluate(board), None);
        }

        let progress = if verbose {
            let progress = ProgressBar::new(moves.len() as u64);
            progress.set_style(
                ProgressStyle::default_bar()
                    .template("Searching moves: {bar:40.cyan/blue} {pos}/{len} {msg}")
                    .progress_chars("█▓▒░  "),
            );
            Some(progress)
        } else {
            None
        };

        let player = if maximizing { Player::Ai } else { Player::Human };
        let mut best = if maximizing { MIN_SCORE } else { MAX_SCORE };
        let mut best_move = None;

        for action in moves {
            let mut next = board.clone();
            if next.apply_move(player, action).is_err() {
                continue;
            }

            // widen the window by one so that a move tying the best so far
            // is scored exactly rather than cut off at the bound
            let score = if maximizing {
                self.minimax(&next, depth + 1, false, alpha.saturating_sub(1), beta)
            } else {
                self.minimax(&next, depth + 1, true, alpha, beta.saturating_add(1))
            };

            if maximizing {
                best = best.max(score);
                if best == score {
                    best_move = Some(action);
                }
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                if best == score {
                    best_move = Some(action);
                }
                beta = beta.min(best);
            }

            if let Some(progress) = &progress {
                progress.set_message(&format!("best so far: {}", best));
                progress.inc(1);
            }

            if self.pruning && beta <= alpha {
                break;
            }
        }

        if let Some(progress) = progress {
            progress.finish_and_clear();
        }
        (best, best_move)
    }

    /// Calculate the value of the current position and the best move for `player`
    pub fn solve(&mut self, player: Player) -> (i32, Option<Move>) {
        self._solve(player, false)
    }

    /// Calculate the value and best move, drawing a progress bar over the candidate moves
    pub fn solve_verbose(&mut self, player: Player) -> (i32, Option<Move>) {
        self._solve(player, true)
    }

    fn _solve(&mut self, player: Player, verbose: bool) -> (i32, Option<Move>) {
        let board = self.board.clone();
        let (score, best_move) = self.top_level_search(
            &board,
            0,
            player == Player::Ai,
            MIN_SCORE,
            MAX_SCORE,
            verbose,
        );
        debug!(
            "search for {} to depth {}: value {}, move {:?}, {} nodes",
            player, self.max_depth, score, best_move, self.node_count
        );
        (score, best_move)
    }

    /// The move `player` should make, or `NoMoveAvailable` once the game is over
    pub fn best_move(&mut self, player: Player) -> Result<Move, HashiError> {
        self.solve(player).1.ok_or(HashiError::NoMoveAvailable)
    }
}

impl std::ops::Deref for Solver {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        &self.board
    }
}
