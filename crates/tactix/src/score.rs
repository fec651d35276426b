//! Cumulative score tracking across games.

use crate::outcome::Outcome;
use crate::types::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Running win/draw counters across games.
///
/// Owned by the controlling frontend, never by [`GameState`](crate::GameState):
/// the game reports outcomes, the controller records them. Counters only
/// ever grow, and a board reset does not touch them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize,
)]
pub struct ScoreBoard {
    /// Games won by X.
    wins_x: u32,
    /// Games won by O.
    wins_o: u32,
    /// Drawn games.
    draws: u32,
}

impl ScoreBoard {
    /// Creates a scoreboard with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finished game.
    ///
    /// `InProgress` is tolerated as a no-op so a controller can call this
    /// unconditionally after every move.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Won {
                winner: Player::X, ..
            } => self.wins_x += 1,
            Outcome::Won {
                winner: Player::O, ..
            } => self.wins_o += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    /// Total finished games recorded.
    pub fn total_games(&self) -> u32 {
        self.wins_x + self.wins_o + self.draws
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    fn won_by(winner: Player) -> Outcome {
        Outcome::Won {
            winner,
            line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
        }
    }

    #[test]
    fn test_new_scoreboard_zeroed() {
        let scores = ScoreBoard::new();
        assert_eq!(*scores.wins_x(), 0);
        assert_eq!(*scores.wins_o(), 0);
        assert_eq!(*scores.draws(), 0);
        assert_eq!(scores.total_games(), 0);
    }

    #[test]
    fn test_record_x_win_increments_only_x() {
        let mut scores = ScoreBoard::new();
        scores.record(&won_by(Player::X));
        assert_eq!(*scores.wins_x(), 1);
        assert_eq!(*scores.wins_o(), 0);
        assert_eq!(*scores.draws(), 0);
    }

    #[test]
    fn test_record_o_win_increments_only_o() {
        let mut scores = ScoreBoard::new();
        scores.record(&won_by(Player::O));
        assert_eq!(*scores.wins_x(), 0);
        assert_eq!(*scores.wins_o(), 1);
        assert_eq!(*scores.draws(), 0);
    }

    #[test]
    fn test_record_draw_increments_only_draws() {
        let mut scores = ScoreBoard::new();
        scores.record(&Outcome::Draw);
        assert_eq!(*scores.wins_x(), 0);
        assert_eq!(*scores.wins_o(), 0);
        assert_eq!(*scores.draws(), 1);
    }

    #[test]
    fn test_record_in_progress_is_noop() {
        let mut scores = ScoreBoard::new();
        scores.record(&Outcome::InProgress);
        assert_eq!(scores, ScoreBoard::new());
    }

    #[test]
    fn test_counters_accumulate() {
        let mut scores = ScoreBoard::new();
        scores.record(&won_by(Player::X));
        scores.record(&won_by(Player::X));
        scores.record(&won_by(Player::O));
        scores.record(&Outcome::Draw);
        assert_eq!(*scores.wins_x(), 2);
        assert_eq!(*scores.wins_o(), 1);
        assert_eq!(*scores.draws(), 1);
        assert_eq!(scores.total_games(), 4);
    }
}
