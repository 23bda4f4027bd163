//! Core domain types for tic-tac-toe.

use super::error::BoardParseError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the two sides in a game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// The externally driven side (keyboard, UI, test harness).
    Human,
    /// The side played by the minimax search.
    Computer,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Default single-character symbol (`X` for the human, `O` for the computer).
    pub fn symbol(self) -> char {
        match self {
            Player::Human => 'X',
            Player::Computer => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Overwrites the square at the given position without any rule checks.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Number of squares holding the given player's mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board with custom symbols for each side.
    ///
    /// Empty squares show their 1-based cell number so a player can type it.
    pub fn render(&self, human: &str, computer: &str) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(Player::Human) => human.to_string(),
                    Square::Occupied(Player::Computer) => computer.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render("X", "O"))
    }
}

/// Parses a compact board such as `"XX_OO____"` or `"XX.|OO.|..."`.
///
/// `X` is the human, `O` the computer, and `_`, `.` or `-` an empty square.
/// Whitespace and `|` separators are ignored. Parsing only checks the shape;
/// use [`BoardState::from_board`](crate::BoardState::from_board) to validate
/// that the position could arise from alternating play.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        if cells.len() != 9 {
            return Err(BoardParseError::WrongLength(cells.len()));
        }

        let mut board = Board::new();
        for (pos, c) in Position::ALL.into_iter().zip(cells) {
            let square = match c.to_ascii_uppercase() {
                'X' => Square::Occupied(Player::Human),
                'O' => Square::Occupied(Player::Computer),
                '_' | '.' | '-' => Square::Empty,
                other => return Err(BoardParseError::InvalidCell(other)),
            };
            board.set(pos, square);
        }
        Ok(board)
    }
}
