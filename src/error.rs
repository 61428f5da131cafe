//! Custom error types for Moneta
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Moneta operations
#[derive(Error, Debug)]
pub enum MonetaError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Remote backend credential errors (missing or invalid credential file)
    #[error("Credential error: {0}")]
    Credential(String),

    /// Network failures reaching the remote backend
    #[error("Connectivity error: {0}")]
    Connectivity(String),

    /// Local data file unreadable or unwritable
    #[error("File access error: {0}")]
    FileAccess(String),

    /// Validation errors for transaction input
    #[error("Validation error in field '{field}': {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors (malformed sheet or file contents)
    #[error("Storage error: {0}")]
    Storage(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl MonetaError {
    /// Create a validation error for a specific input field
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

impl From<serde_json::Error> for MonetaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Moneta operations
pub type MonetaResult<T> = Result<T, MonetaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MonetaError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_validation_error_names_the_field() {
        let err = MonetaError::validation("amount", "must be numeric");
        assert_eq!(
            err.to_string(),
            "Validation error in field 'amount': must be numeric"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_not_found_error() {
        let err = MonetaError::transaction_not_found("42");
        assert_eq!(err.to_string(), "Transaction not found: 42");
    }
}
