//! Error types for the execution client

use thiserror::Error;

/// Errors that can occur when talking to the execution sandbox.
#[derive(Debug, Error, PartialEq, Clone)]
pub enum ExecutionError {
    /// Network error occurred
    #[error("Network error: {0}")]
    Network(String),

    /// The API answered with a non-success status
    #[error("API Error: {0}")]
    Api(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ExecutionError {
    fn from(err: serde_json::Error) -> Self {
        ExecutionError::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for ExecutionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            ExecutionError::Network(err.to_string())
        } else if err.is_decode() {
            ExecutionError::Serialization(err.to_string())
        } else {
            ExecutionError::Network(err.to_string())
        }
    }
}
