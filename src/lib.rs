//! An adversarial agent for the two-player variant of the puzzle 'Hashi'
//!
//! Islands on a square grid carry a label: the number of bridges they need.
//! Players take turns either assigning a label (3 or 4) to an unlabeled island
//! or placing a bridge between two aligned islands. Completing an island earns
//! its label in points, taken from the opponent.
//!
//! The agent picks its move with a depth-bounded minimax search using
//! alpha-beta pruning.
//!
//! # Basic Usage
//!
//! ```
//! use hashi_ai::{board::Board, moves::{Move, Player}, solver::Solver};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let board: Board = "1.1".parse()?;
//! let mut solver = Solver::new(board);
//! let (score, best_move) = solver.solve(Player::Ai);
//!
//! assert_eq!(score, 4);
//! assert_eq!(best_move, Some(Move::Bridge { from: 1, to: 0 }));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod geometry;

pub mod board;

pub mod moves;

pub mod score;

pub mod solver;

pub mod puzzle;


/// The most bridges allowed between a single pair of islands
pub const MAX_BRIDGES: u8 = 2;

/// The labels a player may assign to an unlabeled island
pub const LABEL_CHOICES: [u8; 2] = [3, 4];

/// The largest label an island can be printed with
pub const MAX_LABEL: u8 = 8;

/// The default cap on the search depth of the agent
pub const SEARCH_DEPTH: usize = 10;

// an island has at most four neighbours, each holding at most MAX_BRIDGES bridges
const_assert!(MAX_LABEL as usize <= 4 * MAX_BRIDGES as usize);
const_assert!(LABEL_CHOICES[1] <= MAX_LABEL);
