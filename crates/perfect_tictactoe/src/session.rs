//! Mutable session handle for front-ends.
//!
//! The core works on immutable [`BoardState`] values. A front-end needs one
//! place that holds the current state, knows when the game is over and can
//! start over; that is this type.

use super::error::{MoveError, SessionError};
use super::rules::Outcome;
use super::search::best_move;
use super::{BoardState, Move, Player, Position};
use tracing::{info, instrument, warn};

/// One human-versus-computer game, replayable via [`reset`](Self::reset).
#[derive(Debug, Clone)]
pub struct Session {
    state: BoardState,
    first_player: Player,
    history: Vec<Move>,
}

impl Session {
    /// New session with the human moving first.
    pub fn new() -> Self {
        Self::starting_with(Player::Human)
    }

    /// New session with the given side moving first.
    #[instrument]
    pub fn starting_with(first_player: Player) -> Self {
        info!("Starting new session");
        Self {
            state: BoardState::starting_with(first_player),
            first_player,
            history: Vec::new(),
        }
    }

    /// Current state.
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Who opens each game of this session.
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Moves committed in the current game.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Outcome of the current board.
    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    /// True once the current game has a winner or is drawn.
    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Plays the human's move.
    ///
    /// On error the session is unchanged.
    #[instrument(skip(self))]
    pub fn play_human(&mut self, pos: Position) -> Result<Outcome, MoveError> {
        self.commit(Move::new(Player::Human, pos)).inspect_err(|e| {
            warn!(error = %e, "Human move rejected");
        })
    }

    /// Asks the search for the computer's move and plays it.
    #[instrument(skip(self))]
    pub fn play_computer(&mut self) -> Result<Position, SessionError> {
        let pos = best_move(&self.state)?;
        self.commit(Move::new(Player::Computer, pos))?;
        Ok(pos)
    }

    fn commit(&mut self, action: Move) -> Result<Outcome, MoveError> {
        self.state = self.state.apply(action)?;
        self.history.push(action);

        let outcome = self.outcome();
        if outcome.is_terminal() {
            info!(%outcome, moves = self.history.len(), "Game finished");
        }
        Ok(outcome)
    }

    /// Discards the current game and starts an empty one.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting session");
        self.state = BoardState::starting_with(self.first_player);
        self.history.clear();
    }

    /// One-line status: `"Winner: X"`, `"Draw!"` or `"Next player: O"`.
    pub fn status_line(&self) -> String {
        self.status_line_with(
            &Player::Human.symbol().to_string(),
            &Player::Computer.symbol().to_string(),
        )
    }

    /// Same as [`status_line`](Self::status_line) with custom symbols.
    pub fn status_line_with(&self, human: &str, computer: &str) -> String {
        let symbol = |player| match player {
            Player::Human => human,
            Player::Computer => computer,
        };
        match self.outcome() {
            Outcome::Won(player) => format!("Winner: {}", symbol(player)),
            Outcome::Draw => "Draw!".to_string(),
            Outcome::InProgress => format!("Next player: {}", symbol(self.state.to_move())),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
