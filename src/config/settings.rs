//! User settings for the budget tracker
//!
//! Manages user preferences: the high-usage warning threshold, the currency
//! symbol used in reports and the default log filter.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;

/// Spent/limit ratio at which a category is flagged before it is exhausted
pub const DEFAULT_WARNING_THRESHOLD: f64 = 0.85;

/// User settings for the budget tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Ratio of spent to limit that triggers a high-usage warning
    #[serde(default = "default_warning_threshold")]
    pub warning_threshold: f64,

    /// Currency symbol prefixed to amounts in reports
    #[serde(default)]
    pub currency_symbol: String,

    /// tracing filter directive used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_warning_threshold() -> f64 {
    DEFAULT_WARNING_THRESHOLD
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            warning_threshold: default_warning_threshold(),
            currency_symbol: String::new(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return default settings if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                TrackerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TrackerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            TrackerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
