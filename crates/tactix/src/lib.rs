//! Tactix - pure tic-tac-toe game logic.
//!
//! This library owns the rules of the game and nothing else: no rendering,
//! no input handling, no persistence. Frontends feed it cell selections and
//! read back the resulting state.
//!
//! # Architecture
//!
//! - **State**: [`GameState`] bundles the board, whose turn is next, and the
//!   current [`Outcome`] as one unit, updated only through
//!   [`GameState::apply_move`]
//! - **Rules**: pure classification functions ([`evaluate`], [`check_winner`],
//!   [`is_draw`]) over a [`Board`]
//! - **Scores**: [`ScoreBoard`] accumulates win/draw counters across games,
//!   fed by the caller once per finished game
//!
//! # Example
//!
//! ```
//! use tactix::{GameState, Outcome, Player, Position, ScoreBoard};
//!
//! # fn main() -> Result<(), tactix::MoveError> {
//! let mut game = GameState::new();
//! let mut scores = ScoreBoard::new();
//!
//! let outcome = game.apply_move(Position::Center)?;
//! assert_eq!(outcome, Outcome::InProgress);
//! assert_eq!(game.to_move(), Player::O);
//!
//! // The caller records finished games; InProgress is a no-op.
//! scores.record(&outcome);
//! assert_eq!(scores.total_games(), 0);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod invariants;
mod outcome;
mod position;
mod rules;
mod score;
mod state;
mod types;

// Crate-level exports - domain types
pub use types::{Board, Player, Square};

// Crate-level exports - positions and lines
pub use position::Position;
pub use rules::{Line, LINES};

// Crate-level exports - rule functions
pub use rules::{check_winner, evaluate, is_draw, is_full};

// Crate-level exports - game state
pub use outcome::Outcome;
pub use state::{GameState, MoveError};

// Crate-level exports - score tracking
pub use score::ScoreBoard;

// Crate-level exports - invariants
pub use invariants::{
    GameInvariants, Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant,
    OutcomeConsistentInvariant,
};
