//! Outcome classification for a board.

use crate::rules::Line;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Result classification of the current board.
///
/// Recomputed from the board after every accepted move and stored only
/// inside [`GameState`](crate::GameState), next to the board it describes.
/// `InProgress` is the single non-terminal value; once `Won` or `Draw` is
/// reached the only way forward is a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// A player completed a line.
    Won {
        /// The player who completed the line.
        winner: Player,
        /// The completed line, for highlighting.
        line: Line,
    },
    /// Board is full with no completed line.
    Draw,
}

impl Outcome {
    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<Line> {
        match self {
            Outcome::Won { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won { winner, .. } => write!(f, "Player {} wins", winner),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
