//! Game rules for tic-tac-toe.
//!
//! Pure functions that classify a board. Rules are separated from board
//! storage so the search can call them on a scratch board.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_line, LINES};

use super::{Board, Player};
use serde::{Deserialize, Serialize};

/// Classification of a board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and at least one square is empty.
    InProgress,
    /// The player owns a complete line.
    Won(Player),
    /// Board is full with no complete line.
    Draw,
}

impl Outcome {
    /// True once the game can accept no further moves.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Classifies the board.
///
/// A win is reported for the first complete line in [`LINES`] order. Boards
/// where both sides own a line cannot arise from alternating play and are
/// not treated specially.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
