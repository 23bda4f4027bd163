//! Tic-tac-toe against a computer that never loses.
//!
//! The crate is a pure core meant to be driven by a front-end:
//!
//! - **State**: [`BoardState`] is a value holding the [`Board`] and the side to move
//! - **Rules**: [`evaluate`] classifies a board as an [`Outcome`]
//! - **Search**: [`best_move`] runs an exhaustive minimax for the computer
//! - **Session**: [`Session`] is the mutable handle a UI keeps between moves
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{apply_human_move, best_move, evaluate, new_game, Outcome, Position};
//!
//! let state = new_game();
//! let state = apply_human_move(&state, Position::Center)?;
//! assert_eq!(evaluate(state.board()), Outcome::InProgress);
//!
//! let reply = best_move(&state)?;
//! assert!(state.board().is_empty(reply));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod invariants;
mod position;
pub mod rules;
mod search;
mod session;
mod state;
mod types;

pub use action::Move;
pub use error::{BoardParseError, MoveError, SearchError, SessionError};
pub use invariants::{
    assert_invariants, BalancedMarks, BoardInvariants, Invariant, InvariantSet,
    InvariantViolation, SingleWinner,
};
pub use position::Position;
pub use rules::{evaluate, Outcome};
pub use search::{best_move, first_best, rank_moves, score, ScoredMove, WIN_SCORE};
pub use session::Session;
pub use state::{apply_human_move, new_game, BoardState};
pub use types::{Board, Player, Square};
