//! Mark balance invariant: X leads O by at most one mark.

use super::Invariant;
use crate::state::GameState;
use crate::types::{Player, Square};

/// Invariant: mark counts stay consistent with alternating turns.
///
/// X moves first, so the board always holds either equal marks of each
/// player or exactly one more X. While the game runs, the counts also pin
/// whose turn it is.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let x_count = state
            .board()
            .squares()
            .iter()
            .filter(|s| matches!(s, Square::Occupied(Player::X)))
            .count();
        let o_count = state
            .board()
            .squares()
            .iter()
            .filter(|s| matches!(s, Square::Occupied(Player::O)))
            .count();

        if x_count != o_count && x_count != o_count + 1 {
            return false;
        }

        if !state.outcome().is_over() {
            let expected = if x_count == o_count {
                Player::X
            } else {
                Player::O
            };
            return state.to_move() == expected;
        }

        true
    }

    fn description() -> &'static str {
        "X leads O by at most one mark, matching the turn order"
    }
}
