//! Error types for ErgoScope
//!
//! This module provides structured error handling using thiserror,
//! replacing ad-hoc String-based errors with proper typed errors.

use thiserror::Error;

/// Main error type for ErgoScope operations
#[derive(Error, Debug)]
pub enum ErgoError {
    /// File I/O error
    #[error("Failed to access file: {0}")]
    FileIo(#[from] std::io::Error),

    /// Reference threshold outside the supported slider range
    #[error("Reference threshold {value} cm out of range ({min}-{max} cm)")]
    ThresholdOutOfRange { value: u32, min: u32, max: u32 },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for ErgoScope operations
pub type Result<T> = std::result::Result<T, ErgoError>;

/// UI-friendly error message formatting
impl ErgoError {
    /// Get a user-friendly error message suitable for displaying in UI
    pub fn user_message(&self) -> String {
        match self {
            ErgoError::FileIo(e) => format!("File error: {}", e),
            ErgoError::ThresholdOutOfRange { value, min, max } => {
                format!("Threshold {} cm must be between {} and {} cm", value, min, max)
            }
            ErgoError::Json(e) => format!("JSON error: {}", e),
        }
    }

    /// Get a short title for the error (for the status bar)
    pub fn title(&self) -> &'static str {
        match self {
            ErgoError::FileIo(_) => "File Error",
            ErgoError::ThresholdOutOfRange { .. } => "Invalid Threshold",
            ErgoError::Json(_) => "JSON Error",
        }
    }
}
