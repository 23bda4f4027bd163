//! Immutable game state: board plus side to move.

use super::error::{BoardParseError, MoveError};
use super::invariants::assert_invariants;
use super::rules::{evaluate, Outcome};
use super::{Board, Move, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A board together with the side to move.
///
/// States are values: [`apply`](Self::apply) returns a new state and never
/// touches the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    board: Board,
    to_move: Player,
}

impl BoardState {
    /// Empty board, human to move.
    pub fn new() -> Self {
        Self::starting_with(Player::Human)
    }

    /// Empty board with the given side to move first.
    pub fn starting_with(first: Player) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
        }
    }

    /// Wraps an existing board, rejecting positions that alternating play
    /// could not produce.
    ///
    /// Mark counts may differ by at most one, and the side to move must not
    /// already have more marks than its opponent. With equal counts either
    /// side may be to move, since either could have opened.
    #[instrument(skip(board))]
    pub fn from_board(board: Board, to_move: Player) -> Result<Self, BoardParseError> {
        let human = board.count(Player::Human);
        let computer = board.count(Player::Computer);
        if human.abs_diff(computer) > 1 {
            return Err(BoardParseError::Unbalanced { human, computer });
        }
        if board.count(to_move) > board.count(to_move.opponent()) {
            return Err(BoardParseError::NotYourTurn(to_move));
        }
        Ok(Self { board, to_move })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Reads a cell.
    pub fn occupant(&self, pos: Position) -> Square {
        self.board.get(pos)
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    /// Classifies the current board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// Empty positions in index order.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Applies a move and returns the resulting state with the turn flipped.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the board already has a winner or is full
    /// - [`MoveError::SquareOccupied`] if the target square is taken
    /// - [`MoveError::WrongPlayer`] if `action.player` is not the side to move
    #[instrument(skip(self), fields(to_move = ?self.to_move))]
    pub fn apply(&self, action: Move) -> Result<BoardState, MoveError> {
        if self.outcome().is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(action.position) {
            return Err(MoveError::SquareOccupied(action.position));
        }
        if action.player != self.to_move {
            return Err(MoveError::WrongPlayer(action.player));
        }

        let mut board = self.board;
        board.set(action.position, Square::Occupied(action.player));
        assert_invariants(&board);

        debug!(%action, "Move applied");
        Ok(BoardState {
            board,
            to_move: self.to_move.opponent(),
        })
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Starts a new game: empty board, human to move.
pub fn new_game() -> BoardState {
    BoardState::new()
}

/// Applies the human's move at `pos`.
pub fn apply_human_move(state: &BoardState, pos: Position) -> Result<BoardState, MoveError> {
    state.apply(Move::new(Player::Human, pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_flips_turn_and_keeps_receiver() {
        let state = new_game();
        let next = apply_human_move(&state, Position::Center).unwrap();

        assert_eq!(next.to_move(), Player::Computer);
        assert_eq!(next.occupant(Position::Center), Square::Occupied(Player::Human));
        assert_eq!(state, new_game());
    }

    #[test]
    fn test_wrong_player_rejected() {
        let state = new_game();
        let result = state.apply(Move::new(Player::Computer, Position::Center));
        assert_eq!(result, Err(MoveError::WrongPlayer(Player::Computer)));
    }

    #[test]
    fn test_move_after_win_rejected() {
        let board: Board = "XXX OO_ ___".parse().unwrap();
        let state = BoardState::from_board(board, Player::Computer).unwrap();
        let result = state.apply(Move::new(Player::Computer, Position::MiddleRight));
        assert_eq!(result, Err(MoveError::GameOver));
    }

    #[test]
    fn test_from_board_rejects_unbalanced() {
        let board: Board = "XXX ___ ___".parse().unwrap();
        assert_eq!(
            BoardState::from_board(board, Player::Computer),
            Err(BoardParseError::Unbalanced {
                human: 3,
                computer: 0
            })
        );
    }

    #[test]
    fn test_from_board_rejects_side_already_ahead() {
        let board: Board = "XX_ O__ ___".parse().unwrap();
        assert_eq!(
            BoardState::from_board(board, Player::Human),
            Err(BoardParseError::NotYourTurn(Player::Human))
        );

        let board: Board = "O__ ___ ___".parse().unwrap();
        assert_eq!(
            BoardState::from_board(board, Player::Computer),
            Err(BoardParseError::NotYourTurn(Player::Computer))
        );
    }

    #[test]
    fn test_from_board_accepts_either_side_on_equal_counts() {
        let board: Board = "XX_ OO_ ___".parse().unwrap();
        for to_move in [Player::Human, Player::Computer] {
            let state = BoardState::from_board(board, to_move).unwrap();
            let pos = state.valid_moves()[0];
            let next = state.apply(Move::new(to_move, pos)).unwrap();
            assert_eq!(next.to_move(), to_move.opponent());
        }
    }

    #[test]
    fn test_every_accepted_board_stays_valid_after_a_move() {
        let board: Board = "XX_ O__ ___".parse().unwrap();
        let state = BoardState::from_board(board, Player::Computer).unwrap();
        let next = state.apply(Move::new(Player::Computer, Position::Center)).unwrap();
        assert_eq!(next.board().count(Player::Human), 2);
        assert_eq!(next.board().count(Player::Computer), 2);
        assert_eq!(
            apply_human_move(&next, Position::TopRight).map(|s| s.outcome()),
            Ok(Outcome::Won(Player::Human))
        );
    }
}
