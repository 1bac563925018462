//! User settings for the expense tracker
//!
//! Holds presentation preferences: currency symbol, display theme and date
//! format. None of these affect stored expense data.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::paths::ExpensePaths;
use crate::error::ExpenseError;

/// Display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol prefixed to formatted amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Light or dark display mode
    #[serde(default)]
    pub theme: Theme,

    /// Date format for display (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            theme: Theme::default(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ExpenseError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ExpenseError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ExpenseError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
