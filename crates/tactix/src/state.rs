//! Game state and the single sanctioned transition.

use crate::invariants;
use crate::outcome::Outcome;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Error that can occur when applying a move.
///
/// `SquareOccupied` and `GameOver` are ordinary rejections a frontend
/// silently ignores. `InvalidIndex` means the caller passed a cell index
/// outside 0-8, which is a bug on their side rather than a game event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The cell index is outside 0-8.
    #[display("Cell index {} is out of range (0-8)", _0)]
    InvalidIndex(usize),
}

impl std::error::Error for MoveError {}

/// Complete state of one game.
///
/// Board, turn, and outcome form one unit: they are only written together,
/// by [`GameState::apply_move`], so the stored outcome can never drift from
/// the board it describes. Scores live elsewhere
/// ([`ScoreBoard`](crate::ScoreBoard)) and survive resets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) outcome: Outcome,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            outcome: Outcome::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move next.
    ///
    /// Frozen at the final mover once the game is over.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the positions still open for play.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Places the current player's mark at the given position.
    ///
    /// On success the outcome is recomputed from the new board; the turn
    /// flips only while the game continues. Returns the (possibly terminal)
    /// outcome so the caller can react without re-reading state.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once the outcome is terminal and
    /// [`MoveError::SquareOccupied`] for a taken square. Either way the
    /// state is left untouched.
    #[instrument(skip(self), fields(position = ?pos, player = ?self.to_move))]
    pub fn apply_move(&mut self, pos: Position) -> Result<Outcome, MoveError> {
        if self.outcome.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.to_move));
        self.outcome = rules::evaluate(&self.board);

        if !self.outcome.is_over() {
            self.to_move = self.to_move.opponent();
        }

        invariants::assert_invariants(self);

        Ok(self.outcome)
    }

    /// Places a mark by integer cell index (0-8, row-major).
    ///
    /// Convenience entry for frontends that deal in raw cell indices.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidIndex`] for an index outside 0-8, plus
    /// everything [`GameState::apply_move`] can return.
    #[instrument(skip(self))]
    pub fn apply_index(&mut self, index: usize) -> Result<Outcome, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::InvalidIndex(index))?;
        self.apply_move(pos)
    }

    /// Discards board, turn, and outcome, returning to a fresh game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert_eq!(game.valid_moves().len(), 9);
    }

    #[test]
    fn test_turn_flips_on_accepted_move() {
        let mut game = GameState::new();
        game.apply_move(Position::Center).expect("valid move");
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_occupied_square_rejected_unchanged() {
        let mut game = GameState::new();
        game.apply_move(Position::Center).expect("valid move");

        let before = game.clone();
        let result = game.apply_move(Position::Center);
        assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));
        assert_eq!(game, before);
    }

    #[test]
    fn test_turn_frozen_on_win() {
        let mut game = GameState::new();
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
        ] {
            game.apply_move(pos).expect("valid move");
        }
        let outcome = game.apply_move(Position::TopRight).expect("winning move");
        assert_eq!(outcome.winner(), Some(Player::X));
        // The winner made the last move; the turn stays put.
        assert_eq!(game.to_move(), Player::X);
    }

    #[test]
    fn test_move_after_game_over_rejected() {
        let mut game = GameState::new();
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            game.apply_move(pos).expect("valid move");
        }
        assert!(game.outcome().is_over());

        let before = game.clone();
        assert_eq!(
            game.apply_move(Position::BottomRight),
            Err(MoveError::GameOver)
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_apply_index_out_of_range() {
        let mut game = GameState::new();
        assert_eq!(game.apply_index(9), Err(MoveError::InvalidIndex(9)));
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_reset_equals_new() {
        let mut game = GameState::new();
        game.apply_index(0).expect("valid move");
        game.apply_index(4).expect("valid move");
        game.reset();
        assert_eq!(game, GameState::new());
    }
}
