//! Visual themes and the persisted theme preference.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument, warn};

/// Visual theme for the board and chrome.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Default light scheme.
    #[default]
    Light,
    /// Muted dark scheme.
    Dark,
    /// Black background with glowing accents.
    Neon,
}

impl Theme {
    /// Returns the display label for this theme.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Neon => "neon",
        }
    }

    /// Advances to the next theme: light, dark, neon, back to light.
    pub fn cycle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Neon,
            Theme::Neon => Theme::Light,
        }
    }

    /// Resolved colors for this theme.
    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: Color::Reset,
                grid: Color::Gray,
                mark_x: Color::Rgb(0x37, 0x8c, 0xcd),
                mark_o: Color::Rgb(0x34, 0xbd, 0xd7),
                win_line: Color::Rgb(0x93, 0xc5, 0xfd),
                title: Color::Black,
                text: Color::DarkGray,
            },
            Theme::Dark => Palette {
                background: Color::Rgb(0x1f, 0x29, 0x37),
                grid: Color::Rgb(0x4b, 0x55, 0x63),
                mark_x: Color::Rgb(0x7e, 0x22, 0xce),
                mark_o: Color::Rgb(0x16, 0x65, 0x34),
                win_line: Color::Rgb(0xea, 0xb3, 0x08),
                title: Color::Rgb(0x9c, 0xa3, 0xaf),
                text: Color::Rgb(0xd1, 0xd5, 0xdb),
            },
            Theme::Neon => Palette {
                background: Color::Black,
                grid: Color::Rgb(0xa5, 0xf3, 0xfc),
                mark_x: Color::Rgb(0xfc, 0xa5, 0xa5),
                mark_o: Color::Rgb(0xa5, 0xf3, 0xfc),
                win_line: Color::Rgb(0xbb, 0xf7, 0xd0),
                title: Color::Rgb(0xa5, 0xf3, 0xfc),
                text: Color::Cyan,
            },
        }
    }
}

/// Resolved colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background.
    pub background: Color,
    /// Grid separator lines.
    pub grid: Color,
    /// X marks.
    pub mark_x: Color,
    /// O marks.
    pub mark_o: Color,
    /// Highlight for the winning line's squares.
    pub win_line: Color,
    /// Title text.
    pub title: Color,
    /// Regular chrome text.
    pub text: Color,
}

/// Persisted theme preference.
///
/// A single key, read once at startup and written on every theme change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePrefs {
    /// The last selected theme.
    pub theme: Theme,
}

impl ThemePrefs {
    /// Loads the preference file.
    ///
    /// A missing or malformed file falls back to defaults; losing a theme
    /// preference is never worth failing startup over.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Self {
        let content = match std::fs::read_to_string(path.as_ref()) {
            Ok(content) => content,
            Err(_) => {
                debug!("No preference file, using defaults");
                return Self::default();
            }
        };

        match toml::from_str(&content) {
            Ok(prefs) => {
                debug!("Theme preference loaded");
                prefs
            }
            Err(e) => {
                warn!(error = %e, "Malformed preference file, using defaults");
                Self::default()
            }
        }
    }

    /// Writes the preference file.
    ///
    /// Fire-and-forget: failures are logged and play continues.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display(), theme = self.theme.label()))]
    pub fn save(&self, path: impl AsRef<Path>) {
        let content = match toml::to_string(self) {
            Ok(content) => content,
            Err(e) => {
                warn!(error = %e, "Failed to serialize theme preference");
                return;
            }
        };

        if let Err(e) = std::fs::write(path.as_ref(), content) {
            warn!(error = %e, "Failed to write theme preference");
        }
    }
}
