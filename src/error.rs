//! Errors reported when building a board or attempting a move

use thiserror::Error;

use crate::board::BridgeRejection;
use crate::geometry::Position;

/// Every way a board can refuse to be built or a move can be refused
///
/// Apart from the construction errors (`InvalidCoordinate`, `DuplicateIsland`,
/// `EmptyPuzzle`) all of these are recoverable: the board is left untouched
/// and the caller may simply try another move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HashiError {
    #[error("island at {position} lies outside the {size}x{size} grid")]
    InvalidCoordinate { position: Position, size: usize },

    #[error("more than one island at {0}")]
    DuplicateIsland(Position),

    #[error("puzzle contains no islands")]
    EmptyPuzzle,

    #[error("island index {index} out of range, there are {count} islands")]
    InvalidIndex { index: usize, count: usize },

    #[error("island {0} already has a label")]
    InvalidLabelTarget(usize),

    #[error("invalid label {0}, labels must be 3 or 4")]
    InvalidLabelValue(u8),

    #[error("illegal bridge: {0}")]
    IllegalBridge(BridgeRejection),

    #[error("unknown player '{0}'")]
    InvalidPlayer(String),

    #[error("could not parse '{0}' as a move")]
    MalformedAction(String),

    #[error("no moves available, the game is over")]
    NoMoveAvailable,
}
