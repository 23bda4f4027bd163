//! Error types for moves, search and board parsing.

use super::{Outcome, Player, Position};

/// Error that can occur when validating or applying a move.
///
/// Front-ends recover from this locally: reject the input, keep the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),
}

impl std::error::Error for MoveError {}

/// Precondition violations when asking the search for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// The position is terminal; there is nothing to search.
    #[display("No move to search: {}", _0)]
    GameOver(Outcome),

    /// The search only plays the computer's side.
    #[display("It's the human's turn, not the computer's")]
    NotComputersTurn,
}

impl std::error::Error for SearchError {}

/// Error produced when building a board from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The input did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),

    /// A character other than X, O or an empty marker.
    #[display("Invalid cell character {:?}", _0)]
    InvalidCell(char),

    /// The mark counts cannot come from alternating play.
    #[display("Unbalanced board: {} human marks, {} computer marks", human, computer)]
    Unbalanced {
        /// Number of human marks.
        human: usize,
        /// Number of computer marks.
        computer: usize,
    },

    /// The side to move already has more marks than its opponent.
    #[display("{} cannot be to move with more marks than the opponent", _0)]
    NotYourTurn(Player),
}

impl std::error::Error for BoardParseError {}

/// Error from a [`Session`](crate::Session) operation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SessionError {
    /// The move was rejected.
    #[display("{}", _0)]
    Move(MoveError),

    /// The search could not run.
    #[display("{}", _0)]
    Search(SearchError),
}
