//! Light/dark theme with the one preference the showcase persists.
//!
//! The preference lives in a small JSON file (`{"theme": "dark"}`). Anything
//! that cannot be read back falls back to the light theme.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ShowcaseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph shown on the toggle button: the theme you would switch to.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {0:?}")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    #[serde(default)]
    theme: Theme,
}

#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored theme, or the default when nothing usable is stored.
    pub fn load(&self) -> Theme {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!("No stored preferences at {}: {}", self.path.display(), e);
                return Theme::default();
            }
        };

        match serde_json::from_str::<Preferences>(&contents) {
            Ok(preferences) => preferences.theme,
            Err(e) => {
                warn!("Ignoring unreadable preferences {}: {}", self.path.display(), e);
                Theme::default()
            }
        }
    }

    pub fn save(&self, theme: Theme) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ShowcaseError::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(&Preferences { theme })?;
        fs::write(&self.path, json).map_err(|e| ShowcaseError::io(&self.path, e))?;
        debug!("Saved theme {} to {}", theme, self.path.display());
        Ok(())
    }
}

/// The theme toggle button: current theme plus where to persist it.
#[derive(Debug)]
pub struct ThemeToggle {
    theme: Theme,
    store: PreferenceStore,
}

impl ThemeToggle {
    pub fn new(store: PreferenceStore) -> Self {
        let theme = store.load();
        info!("Theme: {}", theme);
        Self { theme, store }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn icon(&self) -> &'static str {
        self.theme.icon()
    }

    /// Flips the theme and persists it. A failed save is logged; the
    /// in-memory theme flips regardless.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        if let Err(e) = self.store.save(self.theme) {
            warn!("Could not persist theme: {}", e);
        }
        self.theme
    }
}
