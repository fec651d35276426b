//! Application state and logic.

use crate::input;
use crate::theme::{Theme, ThemePrefs};
use crossterm::event::{KeyCode, KeyEvent};
use std::path::PathBuf;
use tactix::{GameState, Position, ScoreBoard};
use tracing::{debug, info, instrument};

/// What the key handler asks the main loop to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppTransition {
    /// Keep running.
    Stay,
    /// Tear down the terminal and exit.
    Quit,
}

/// Main application state.
///
/// Owns the game, the running scoreboard, and the UI-only bits (cursor,
/// theme, status line). Acts as the controller between the two: finished
/// outcomes flow from the game into the scoreboard exactly once.
pub struct App {
    game: GameState,
    scores: ScoreBoard,
    cursor: Position,
    theme: Theme,
    status: String,
    prefs_path: PathBuf,
}

impl App {
    /// Creates the application, loading the persisted theme preference.
    #[instrument(skip(prefs_path))]
    pub fn new(prefs_path: PathBuf) -> Self {
        let theme = ThemePrefs::load(&prefs_path).theme;
        info!(theme = theme.label(), "Theme preference resolved");

        Self {
            game: GameState::new(),
            scores: ScoreBoard::new(),
            cursor: Position::Center,
            theme,
            status: "Player X's turn.".to_string(),
            prefs_path,
        }
    }

    /// Returns the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Returns the scoreboard.
    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// Returns the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns the active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns the status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Handles one key event to completion.
    pub fn handle_key(&mut self, key: KeyEvent) -> AppTransition {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("User quit");
                AppTransition::Quit
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.reset_board();
                AppTransition::Stay
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                self.cycle_theme();
                AppTransition::Stay
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key.code);
                AppTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.place(self.cursor);
                AppTransition::Stay
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = c
                    .to_digit(10)
                    .filter(|d| (1..=9).contains(d))
                    .and_then(|d| Position::from_index(d as usize - 1))
                {
                    self.place(pos);
                }
                AppTransition::Stay
            }
            _ => AppTransition::Stay,
        }
    }

    #[instrument(skip(self), fields(position = ?pos))]
    fn place(&mut self, pos: Position) {
        match self.game.apply_move(pos) {
            Ok(outcome) if outcome.is_over() => {
                self.scores.record(&outcome);
                info!(%outcome, "Game finished");
                self.status = format!("{}! Press 'r' for a new game.", outcome);
            }
            Ok(_) => {
                self.status = format!("Player {}'s turn.", self.game.to_move());
            }
            Err(e) => {
                // Rejected moves change nothing; just explain why.
                debug!(error = %e, "Move rejected");
                self.status = format!("{}.", e);
            }
        }
    }

    #[instrument(skip(self))]
    fn reset_board(&mut self) {
        self.game.reset();
        self.cursor = Position::Center;
        self.status = "Board reset. Player X's turn.".to_string();
        info!("Board reset");
    }

    #[instrument(skip(self))]
    fn cycle_theme(&mut self) {
        self.theme = self.theme.cycle();
        ThemePrefs { theme: self.theme }.save(&self.prefs_path);
        self.status = format!("Theme: {}.", self.theme.label());
        info!(theme = self.theme.label(), "Theme changed");
    }
}
