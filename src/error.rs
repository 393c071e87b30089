//! Error types for deploy section resolution.
//!
//! Missing fields are never errors; every accessor substitutes a default.
//! Errors only surface for wrongly typed values under the strict policy,
//! for configuration loading, and for explicit document mutation.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeployError {
    /// A field was present but held a value of the wrong JSON type
    #[error("Type mismatch for field {field}: expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: String,
        actual: String,
    },
    #[error("Invalid submission document: {0}")]
    InvalidDocument(String),
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl DeployError {
    /// Create a type mismatch error
    pub fn type_mismatch<F: Into<String>, E: Into<String>>(
        field: F,
        expected: E,
        actual: &serde_json::Value,
    ) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected: expected.into(),
            actual: crate::utils::json::type_name(actual).to_string(),
        }
    }
}

impl From<config::ConfigError> for DeployError {
    fn from(err: config::ConfigError) -> Self {
        DeployError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DeployError>;
