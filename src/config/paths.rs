//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_TRACKER_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `expense-tracker`
//!    (`~/.config/expense-tracker` on Linux, `%APPDATA%\expense-tracker` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ExpenseError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "EXPENSE_TRACKER_DATA_DIR";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// Base directory for all expense tracker data
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Create a new ExpensePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no platform config directory can be determined.
    pub fn new() -> Result<Self, ExpenseError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ExpensePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the persisted documents, one file per storage key
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| ExpenseError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, ExpenseError> {
    ProjectDirs::from("", "", "expense-tracker")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ExpenseError::Config("Could not determine a config directory".into()))
}
