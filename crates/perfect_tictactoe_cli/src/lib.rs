//! Terminal front-end for the perfect_tictactoe engine.
//!
//! The binary in `main.rs` only parses arguments and installs logging; the
//! pieces here are kept in a library so they can be tested.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod play;

pub use cli::{Cli, Command, Side};
pub use config::{ConfigError, PlayConfig};
pub use play::{print_best_move, Game, Tally};
