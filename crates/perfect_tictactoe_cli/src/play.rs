//! Line-oriented game loop.
//!
//! Reads moves from any `BufRead` and writes the board to any `Write`, so the
//! loop runs the same on a terminal and in tests.

use crate::config::PlayConfig;
use anyhow::{Context, Result};
use perfect_tictactoe::{
    first_best, rank_moves, BoardState, MoveError, Outcome, Player, Position, Session,
};
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Results over all games of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Games the human won.
    pub human_wins: u32,
    /// Games the computer won.
    pub computer_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(Player::Human) => self.human_wins += 1,
            Outcome::Won(Player::Computer) => self.computer_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }
}

/// What the human typed at the move prompt.
enum Input {
    Cell(Position),
    Quit,
    Unrecognized(String),
}

/// Interactive game driven by text input.
pub struct Game<R, W> {
    input: R,
    output: W,
    config: PlayConfig,
    session: Session,
    tally: Tally,
}

impl<R: BufRead, W: Write> Game<R, W> {
    /// Creates a game loop over the given streams.
    pub fn new(input: R, output: W, config: PlayConfig) -> Self {
        let first = if *config.computer_first() {
            Player::Computer
        } else {
            Player::Human
        };
        Self {
            input,
            output,
            config,
            session: Session::starting_with(first),
            tally: Tally::default(),
        }
    }

    /// Plays games until the human quits or input ends.
    #[instrument(skip(self))]
    pub fn run(mut self) -> Result<Tally> {
        loop {
            self.show_board()?;

            if self.session.is_over() {
                self.tally.record(self.session.outcome());
                if !self.ask_replay()? {
                    break;
                }
                self.session.reset();
                continue;
            }

            match self.session.state().to_move() {
                Player::Computer => self.computer_turn()?,
                Player::Human => {
                    if !self.human_turn()? {
                        break;
                    }
                }
            }
        }

        info!(?self.tally, "Leaving game loop");
        writeln!(
            self.output,
            "You won {}, lost {}, drew {}.",
            self.tally.human_wins, self.tally.computer_wins, self.tally.draws
        )?;
        Ok(self.tally)
    }

    fn show_board(&mut self) -> Result<()> {
        let board = self
            .session
            .state()
            .board()
            .render(self.config.human_symbol(), self.config.computer_symbol());
        let status = self
            .session
            .status_line_with(self.config.human_symbol(), self.config.computer_symbol());
        writeln!(self.output, "\n{}\n\n{}", board, status)?;
        Ok(())
    }

    fn computer_turn(&mut self) -> Result<()> {
        let delay = *self.config.computer_delay_ms();
        if delay > 0 {
            std::thread::sleep(Duration::from_millis(delay));
        }
        let pos = self
            .session
            .play_computer()
            .context("Computer failed to move")?;
        writeln!(self.output, "Computer plays {} ({}).", pos.number(), pos)?;
        Ok(())
    }

    /// Returns `false` when the human wants to stop.
    fn human_turn(&mut self) -> Result<bool> {
        write!(self.output, "Your move (1-9, q to quit): ")?;
        self.output.flush()?;

        match self.read_move()? {
            None | Some(Input::Quit) => Ok(false),
            Some(Input::Unrecognized(text)) => {
                writeln!(self.output, "Unrecognized cell {:?}.", text)?;
                Ok(true)
            }
            Some(Input::Cell(pos)) => {
                match self.session.play_human(pos) {
                    Ok(outcome) => debug!(%pos, %outcome, "Human moved"),
                    Err(MoveError::SquareOccupied(_)) => {
                        writeln!(self.output, "{} is taken, pick another cell.", pos.number())?;
                    }
                    Err(e) => writeln!(self.output, "Move rejected: {}", e)?,
                }
                Ok(true)
            }
        }
    }

    fn read_move(&mut self) -> Result<Option<Input>> {
        let Some(line) = self.read_line()? else {
            return Ok(None);
        };
        let input = match line.as_str() {
            "q" | "quit" | "exit" => Input::Quit,
            text => match Position::from_label_or_number(text) {
                Some(pos) => Input::Cell(pos),
                None => Input::Unrecognized(text.to_string()),
            },
        };
        Ok(Some(input))
    }

    fn ask_replay(&mut self) -> Result<bool> {
        write!(self.output, "Play again? [y/N] ")?;
        self.output.flush()?;
        let answer = self.read_line()?.unwrap_or_default();
        Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Writes the best move and every candidate's score for `board`.
///
/// The board is checked against `to_move` first; the search itself only
/// plays the computer, so a valid human-to-move board is still an error.
#[instrument(skip(output))]
pub fn print_best_move(
    board: &str,
    to_move: Player,
    output: &mut impl Write,
) -> Result<Position> {
    let board = board.parse().context("Invalid board")?;
    let state = BoardState::from_board(board, to_move).context("Invalid board")?;
    let ranked = rank_moves(&state).context("Cannot search this position")?;
    let best = first_best(&ranked).context("No candidate moves")?.position;

    writeln!(output, "{}\n", state.board())?;
    for m in &ranked {
        writeln!(output, "  {} {:<13} {:>3}", m.position.number(), m.position.label(), m.score)?;
    }
    writeln!(output, "\nBest move: {} ({})", best.number(), best)?;
    Ok(best)
}
