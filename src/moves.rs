//! Players, moves and legal move generation

use std::fmt;
use std::str::FromStr;

use crate::{board::Board, error::HashiError, LABEL_CHOICES};

/// The two sides of a game
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Ai,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Ai,
            Player::Ai => Player::Human,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Human => write!(f, "Player A"),
            Player::Ai => write!(f, "Player B"),
        }
    }
}

impl FromStr for Player {
    type Err = HashiError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_lowercase().as_str() {
            "a" | "player a" | "human" => Ok(Player::Human),
            "b" | "player b" | "ai" => Ok(Player::Ai),
            _ => Err(HashiError::InvalidPlayer(name.to_string())),
        }
    }
}

/// A single turn: place one bridge, or label one island
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Move {
    Bridge { from: usize, to: usize },
    Label { island: usize, value: u8 },
}

impl Move {
    /// The islands joined by a bridge move, smaller index first
    pub fn bridge_endpoints(&self) -> Option<(usize, usize)> {
        match *self {
            Move::Bridge { from, to } => Some((from.min(to), from.max(to))),
            Move::Label { .. } => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Bridge { from, to } => write!(f, "bridge {} {}", from, to),
            Move::Label { island, value } => write!(f, "label {} {}", island, value),
        }
    }
}

impl FromStr for Move {
    type Err = HashiError;

    /// Parses `bridge <a> <b>` or `label <island> <value>`, keywords may be shortened to `b`/`l`
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let malformed = || HashiError::MalformedAction(input.trim().to_string());

        let words: Vec<&str> = input.split_whitespace().collect();
        let (kind, first, second) = match words.as_slice() {
            [kind, first, second] => (kind.to_lowercase(), *first, *second),
            _ => return Err(malformed()),
        };
        let first = first.parse::<usize>().map_err(|_| malformed())?;

        match kind.as_str() {
            "bridge" | "b" => Ok(Move::Bridge {
                from: first,
                to: second.parse().map_err(|_| malformed())?,
            }),
            "label" | "l" => Ok(Move::Label {
                island: first,
                value: second.parse().map_err(|_| malformed())?,
            }),
            _ => Err(malformed()),
        }
    }
}

/// Lists every legal move on the board, bridges first and then labels
///
/// Bridges are tried for every ordered pair of islands, so each legal bridge
/// appears twice, once from each end.
pub fn enumerate_moves(board: &Board) -> Vec<Move> {
    let count = board.num_islands();
    let mut moves = Vec::new();

    for from in 0..count {
        for to in 0..count {
            if from != to && board.is_valid_bridge(from, to) {
                moves.push(Move::Bridge { from, to });
            }
        }
    }

    for island in 0..count {
        for &value in LABEL_CHOICES.iter() {
            if board.check_label(island, value).is_ok() {
                moves.push(Move::Label { island, value });
            }
        }
    }
    moves
}

/// Checks whether no legal move remains
pub fn is_terminal(board: &Board) -> bool {
    let count = board.num_islands();
    if board.islands().iter().any(|island| !island.is_labeled()) {
        return false;
    }
    !(0..count).any(|from| (from + 1..count).any(|to| board.is_valid_bridge(from, to)))
}
