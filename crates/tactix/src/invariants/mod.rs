//! First-class invariants for the game state.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. They are checked in debug builds and testable independently.

use crate::state::GameState;
use tracing::instrument;

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
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
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

pub mod mark_balance;
pub mod outcome_consistent;

pub use mark_balance::MarkBalanceInvariant;
pub use outcome_consistent::OutcomeConsistentInvariant;

/// All game invariants as a composable set.
pub type GameInvariants = (MarkBalanceInvariant, OutcomeConsistentInvariant);

/// Asserts that all game invariants hold (debug builds only).
#[instrument(skip(state))]
pub(crate) fn assert_invariants(state: &GameState) {
    debug_assert!(
        GameInvariants::check_all(state).is_ok(),
        "Game invariants violated: {:?}",
        GameInvariants::check_all(state).unwrap_err()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::{Player, Square};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = GameState::new();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = GameState::new();
        for pos in [Position::TopLeft, Position::Center, Position::TopRight] {
            game.apply_move(pos).expect("valid move");
        }
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut game = GameState::new();
        game.apply_move(Position::Center).expect("valid move");

        // Corrupt the board behind the state's back.
        game.board.set(Position::TopLeft, Square::Occupied(Player::X));
        game.board.set(Position::TopCenter, Square::Occupied(Player::X));

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert!(!violations.is_empty());
    }
}
