//! Document store error types

use thiserror::Error;

/// Errors that can occur when reading from a document store
#[derive(Error, Debug)]
pub enum StoreError {
    /// Store could not be reached
    #[error("Document store unavailable")]
    Unavailable,

    /// Request did not complete within the configured timeout
    #[error("Request timeout")]
    Timeout,

    /// Transport-level failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Credentials missing or rejected
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Store answered with an unexpected status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body did not have the expected shape
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// Store is misconfigured
    #[error("Configuration error: {0}")]
    Config(String),

    /// Seed file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Malformed(err.to_string())
    }
}

impl StoreError {
    /// Classify a reqwest error the same way for every request
    pub(crate) fn from_send(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            StoreError::Timeout
        } else if err.is_connect() {
            StoreError::Unavailable
        } else {
            StoreError::Request(err)
        }
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
