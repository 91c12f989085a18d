//! Custom error types for outlay
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for outlay operations
#[derive(Error, Debug)]
pub enum OutlayError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors surfaced by the expense form
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl OutlayError {
    /// Helper to create an expense NotFound error
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        OutlayError::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, OutlayError::NotFound { .. })
    }
}

impl From<std::io::Error> for OutlayError {
    fn from(err: std::io::Error) -> Self {
        OutlayError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for OutlayError {
    fn from(err: serde_json::Error) -> Self {
        OutlayError::Json(err.to_string())
    }
}

/// Result type alias for outlay operations
pub type OutlayResult<T> = Result<T, OutlayError>;
