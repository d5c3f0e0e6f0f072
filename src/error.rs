//! Custom error types for the budget tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for budget tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Input that could not be coerced into the expected shape
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage errors (unreadable or malformed budget document)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl TrackerError {
    /// Create a validation error for an amount that is not a number
    pub fn invalid_amount(input: impl AsRef<str>) -> Self {
        Self::Validation(format!("Invalid amount: '{}' is not a number", input.as_ref()))
    }

    /// Create a validation error for an amount too large to track
    pub fn amount_out_of_range(input: impl AsRef<str>) -> Self {
        Self::Validation(format!("Invalid amount: '{}' is out of range", input.as_ref()))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
