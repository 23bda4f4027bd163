//! First-class board invariants.
//!
//! Invariants are logical properties that must hold for every board reachable
//! by alternating play. They are checked in debug builds after each move and
//! can be tested independently.

use super::rules::LINES;
use super::{Board, Player, Square};
use strum::IntoEnumIterator;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Mark counts differ by at most one.
pub struct BalancedMarks;

impl Invariant<Board> for BalancedMarks {
    fn holds(board: &Board) -> bool {
        let human = board.count(Player::Human);
        let computer = board.count(Player::Computer);
        let valid = human.abs_diff(computer) <= 1;
        if !valid {
            warn!(human, computer, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Mark counts differ by at most one"
    }
}

/// At most one player owns a complete line.
pub struct SingleWinner;

impl Invariant<Board> for SingleWinner {
    fn holds(board: &Board) -> bool {
        let winners = Player::iter()
            .filter(|player| {
                LINES
                    .iter()
                    .any(|line| line.iter().all(|pos| board.get(*pos) == Square::Occupied(*player)))
            })
            .count();
        winners <= 1
    }

    fn description() -> &'static str {
        "At most one player owns a complete line"
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (BalancedMarks, SingleWinner);

/// Asserts that all board invariants hold (debug builds only).
pub fn assert_invariants(board: &Board) {
    debug_assert!(
        BoardInvariants::check_all(board).is_ok(),
        "Board invariants violated:\n{}",
        board
    );
}
