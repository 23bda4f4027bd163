//! tictactoe - play against a computer that never loses.

use anyhow::{Context, Result};
use clap::Parser;
use perfect_tictactoe_cli::{print_best_move, Cli, Command, Game, PlayConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            computer_first,
            delay_ms,
        } => run_play(config, computer_first, delay_ms),
        Command::BestMove { board, to_move } => {
            print_best_move(&board, to_move.into(), &mut std::io::stdout().lock())?;
            Ok(())
        }
    }
}

/// Run interactive games on stdin/stdout
fn run_play(config: Option<PathBuf>, computer_first: bool, delay_ms: Option<u64>) -> Result<()> {
    let config = match config {
        Some(path) => PlayConfig::from_file(&path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => PlayConfig::default(),
    }
    .with_overrides(computer_first, delay_ms);

    info!(?config, "Starting interactive play");

    let stdin = std::io::stdin();
    let game = Game::new(stdin.lock(), std::io::stdout(), config);
    game.run()?;
    Ok(())
}
