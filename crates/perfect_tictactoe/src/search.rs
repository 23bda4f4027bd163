//! Exhaustive minimax search for the computer's move.
//!
//! The computer is always the maximizing side. Terminal boards score
//! `10 - depth` for a computer win, `depth - 10` for a human win and `0` for a
//! draw, so among winning lines the fastest is preferred and among losing
//! lines the slowest. The full 3x3 tree is small enough that no pruning
//! beyond stopping at terminal boards is done.

use super::error::SearchError;
use super::rules::{evaluate, Outcome};
use super::{Board, BoardState, Player, Position, Square};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument};

/// Score of a win reached at depth 0.
pub const WIN_SCORE: i32 = 10;

/// A candidate move and its minimax score from the computer's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// The candidate cell.
    pub position: Position,
    /// Minimax value after playing it.
    pub score: i32,
}

/// Temporary mark on a scratch board, removed again on drop.
///
/// Every recursive probe goes through this guard, so a sibling branch never
/// sees a mark left behind by another, whichever way the frame exits.
struct Probe<'a> {
    board: &'a mut Board,
    pos: Position,
}

impl<'a> Probe<'a> {
    fn place(board: &'a mut Board, pos: Position, player: Player) -> Self {
        debug_assert!(board.is_empty(pos), "probe on occupied square {pos}");
        board.set(pos, Square::Occupied(player));
        Self { board, pos }
    }
}

impl Deref for Probe<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Probe<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.board.set(self.pos, Square::Empty);
    }
}

/// Minimax value of `board` from the computer's point of view.
///
/// `maximizing` is true when the computer is to move. The caller's board is
/// not modified; the search runs on a copy.
pub fn score(board: &Board, depth: u32, maximizing: bool) -> i32 {
    let mut scratch = *board;
    minimax(&mut scratch, depth, maximizing)
}

fn minimax(board: &mut Board, depth: u32, maximizing: bool) -> i32 {
    let depth_score = WIN_SCORE - depth as i32;
    match evaluate(board) {
        Outcome::Won(Player::Computer) => return depth_score,
        Outcome::Won(Player::Human) => return -depth_score,
        Outcome::Draw => return 0,
        Outcome::InProgress => {}
    }

    let mover = if maximizing {
        Player::Computer
    } else {
        Player::Human
    };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        let mut probe = Probe::place(board, pos, mover);
        let value = minimax(&mut probe, depth + 1, !maximizing);
        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }

    best
}

/// Scores every legal computer move, in index order.
///
/// # Errors
///
/// - [`SearchError::GameOver`] if the state is already terminal
/// - [`SearchError::NotComputersTurn`] if the human is to move
#[instrument(skip(state), fields(to_move = ?state.to_move()))]
pub fn rank_moves(state: &BoardState) -> Result<Vec<ScoredMove>, SearchError> {
    let outcome = state.outcome();
    if outcome.is_terminal() {
        return Err(SearchError::GameOver(outcome));
    }
    if state.to_move() != Player::Computer {
        return Err(SearchError::NotComputersTurn);
    }

    let mut scratch = *state.board();
    let ranked = Position::ALL
        .into_iter()
        .filter_map(|pos| {
            if !scratch.is_empty(pos) {
                return None;
            }
            let mut probe = Probe::place(&mut scratch, pos, Player::Computer);
            let score = minimax(&mut probe, 0, false);
            Some(ScoredMove {
                position: pos,
                score,
            })
        })
        .collect();

    Ok(ranked)
}

/// Picks the optimal move for the computer.
///
/// Ties go to the lowest cell index: a later candidate replaces the current
/// best only with a strictly higher score.
///
/// # Errors
///
/// Same as [`rank_moves`].
#[instrument(skip(state), fields(to_move = ?state.to_move()))]
pub fn best_move(state: &BoardState) -> Result<Position, SearchError> {
    let ranked = rank_moves(state)?;

    // A non-terminal board always has an empty square.
    let best = first_best(&ranked).ok_or(SearchError::GameOver(Outcome::Draw))?;
    debug!(position = %best.position, score = best.score, "Best move chosen");
    Ok(best.position)
}

/// Highest-scoring candidate, earliest on ties. `None` for an empty slice.
pub fn first_best(ranked: &[ScoredMove]) -> Option<ScoredMove> {
    let mut best: Option<ScoredMove> = None;
    for &candidate in ranked {
        if best.is_none_or(|b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn computer_to_move(s: &str) -> BoardState {
        BoardState::from_board(s.parse().unwrap(), Player::Computer).unwrap()
    }

    #[test]
    fn test_terminal_scores_are_depth_aware() {
        let computer_won: Board = "XX_ OOO X__".parse().unwrap();
        assert_eq!(score(&computer_won, 0, false), 10);
        assert_eq!(score(&computer_won, 3, false), 7);

        let human_won: Board = "XXX OO_ ___".parse().unwrap();
        assert_eq!(score(&human_won, 2, true), -8);

        let drawn: Board = "XOX XOO OXX".parse().unwrap();
        assert_eq!(score(&drawn, 5, true), 0);
    }

    #[test]
    fn test_score_leaves_board_untouched() {
        let board: Board = "X__ _O_ __X".parse().unwrap();
        let before = board;
        score(&board, 0, true);
        assert_eq!(board, before);
    }

    #[test]
    fn test_probe_restores_square() {
        let mut board = Board::new();
        {
            let probe = Probe::place(&mut board, Position::Center, Player::Computer);
            assert_eq!(probe.get(Position::Center), Square::Occupied(Player::Computer));
        }
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_prefers_faster_win() {
        // Computer can win now at 5; blocking at 2 wins only later.
        let ranked = rank_moves(&computer_to_move("XX_ OO_ ___")).unwrap();
        let at = |pos| ranked.iter().find(|m| m.position == pos).unwrap().score;
        assert_eq!(at(Position::MiddleRight), 10);
        assert!(at(Position::TopRight) < 10);
    }

    #[test]
    fn test_search_rejects_human_turn() {
        let state = BoardState::new();
        assert_eq!(best_move(&state), Err(SearchError::NotComputersTurn));
    }

    #[test]
    fn test_first_best_keeps_earliest_of_equal_scores() {
        let scored = |position, score| ScoredMove { position, score };
        let ranked = [
            scored(Position::TopLeft, -2),
            scored(Position::Center, 6),
            scored(Position::BottomLeft, 6),
        ];
        assert_eq!(first_best(&ranked).map(|m| m.position), Some(Position::Center));
        assert_eq!(first_best(&[]), None);
    }

    #[test]
    fn test_first_best_agrees_with_best_move() {
        let state = computer_to_move("XX_ _O_ ___");
        let ranked = rank_moves(&state).unwrap();
        assert_eq!(first_best(&ranked).map(|m| m.position), best_move(&state).ok());
    }

    #[test]
    fn test_search_rejects_finished_game() {
        let state = computer_to_move("XXX OO_ ___");
        assert_eq!(
            best_move(&state),
            Err(SearchError::GameOver(Outcome::Won(Player::Human)))
        );
    }
}
