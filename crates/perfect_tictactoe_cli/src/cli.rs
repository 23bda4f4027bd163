//! Command-line interface for the tic-tac-toe front-end.

use clap::{Parser, Subcommand, ValueEnum};
use perfect_tictactoe::Player;
use std::path::PathBuf;

/// Play tic-tac-toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe against an exhaustive minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on the terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Let the computer open the game
        #[arg(long)]
        computer_first: bool,

        /// Pause before each computer move, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Print the computer's best move for a position where it is to move
    BestMove {
        /// Board as nine cells, e.g. "XX_OO____" (X human, O computer, _ empty)
        board: String,

        /// Side to move on the given board
        #[arg(long, value_enum, default_value_t = Side::Computer)]
        to_move: Side,
    },
}

/// Side argument for `--to-move`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The human (X)
    Human,
    /// The computer (O)
    Computer,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::Human => Player::Human,
            Side::Computer => Player::Computer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_flags() {
        let cli = Cli::try_parse_from(["tictactoe", "play", "--computer-first", "--delay-ms", "0"])
            .unwrap();
        match cli.command {
            Command::Play {
                config,
                computer_first,
                delay_ms,
            } => {
                assert!(config.is_none());
                assert!(computer_first);
                assert_eq!(delay_ms, Some(0));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_best_move_board() {
        let cli = Cli::try_parse_from(["tictactoe", "best-move", "XX_OO____"]).unwrap();
        match cli.command {
            Command::BestMove { board, to_move } => {
                assert_eq!(board, "XX_OO____");
                assert_eq!(to_move, Side::Computer);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_best_move_side() {
        let args = ["tictactoe", "best-move", "X________", "--to-move", "human"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::BestMove { to_move, .. } => {
                assert_eq!(Player::from(to_move), Player::Human);
            }
            other => panic!("unexpected command {other:?}"),
        }
        let args = ["tictactoe", "best-move", "_", "--to-move", "both"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
