//! Path management for the budget tracker
//!
//! ## Path Resolution Order
//!
//! 1. Explicit directory passed on the command line (`--data-dir`)
//! 2. `BUDGET_TRACKER_DIR` environment variable (if set)
//! 3. The current working directory

use std::path::PathBuf;

use crate::error::TrackerError;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "BUDGET_TRACKER_DIR";

/// File name of the persisted budget document
pub const DATA_FILE_NAME: &str = "budget_data.json";

/// File name of the user settings
pub const SETTINGS_FILE_NAME: &str = "budget_config.json";

/// Manages all paths used by the budget tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// Directory holding the budget document and settings
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Resolve paths from the environment, falling back to the current directory
    pub fn new() -> Self {
        let base_dir = std::env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Self { base_dir }
    }

    /// Create TrackerPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Resolve from an optional explicit directory, then the environment
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        match explicit {
            Some(dir) => Self::with_base_dir(dir),
            None => Self::new(),
        }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the budget document
    pub fn data_file(&self) -> PathBuf {
        self.base_dir.join(DATA_FILE_NAME)
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join(SETTINGS_FILE_NAME)
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), TrackerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TrackerError::Io(format!("Failed to create data directory: {}", e)))
    }
}

impl Default for TrackerPaths {
    fn default() -> Self {
        Self::new()
    }
}
