//! Outcome consistency invariant: the stored outcome matches the board.

use super::Invariant;
use crate::rules;
use crate::state::GameState;

/// Invariant: the stored outcome equals a fresh evaluation of the board.
///
/// The outcome is cached inside the state for cheap access; this checks
/// the cache never drifts from what the board actually shows.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        state.outcome() == rules::evaluate(state.board())
    }

    fn description() -> &'static str {
        "Stored outcome matches a fresh evaluation of the board"
    }
}
