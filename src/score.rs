//! Zero-sum score keeping

use std::cmp::Ordering;

use crate::{board::Board, moves::Player};

/// How a finished game turned out
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    HumanWin,
    AiWin,
    Tie,
}

/// Points held by each player
///
/// Every credit to one player is debited from the other, so the two totals
/// always sum to zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreLedger {
    human: i32,
    ai: i32,
}

impl ScoreLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self, player: Player) -> i32 {
        match player {
            Player::Human => self.human,
            Player::Ai => self.ai,
        }
    }

    fn score_mut(&mut self, player: Player) -> &mut i32 {
        match player {
            Player::Human => &mut self.human,
            Player::Ai => &mut self.ai,
        }
    }

    pub fn credit(&mut self, player: Player, points: i32) {
        *self.score_mut(player) += points;
        *self.score_mut(player.opponent()) -= points;
    }

    /// The AI's lead over the human
    pub fn differential(&self) -> i32 {
        self.ai - self.human
    }

    pub fn result(&self) -> GameResult {
        match self.human.cmp(&self.ai) {
            Ordering::Greater => GameResult::HumanWin,
            Ordering::Less => GameResult::AiWin,
            Ordering::Equal => GameResult::Tie,
        }
    }
}

/// Static evaluation of a board from the AI's point of view
pub fn evaluate(board: &Board) -> i32 {
    board.scores().differential()
}
