//! Error types for the chat client

use thiserror::Error;

/// Errors that can occur when talking to the assistant API.
#[derive(Debug, Error, PartialEq, Clone)]
pub enum ChatError {
    /// Authentication failed (never includes key details)
    #[error("Authentication failed")]
    Auth,

    /// No credential is configured
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error occurred
    #[error("Network error: {0}")]
    Network(String),

    /// The API answered with an error or an unusable payload
    #[error("API error: {0}")]
    Api(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ChatError {
    fn from(err: serde_json::Error) -> Self {
        ChatError::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            ChatError::Network(err.to_string())
        } else if err.is_decode() {
            ChatError::Serialization(err.to_string())
        } else {
            ChatError::Api(err.to_string())
        }
    }
}
