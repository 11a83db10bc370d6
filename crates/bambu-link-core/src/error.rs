//! Error types for bambu-link core.

use thiserror::Error;

/// Core error type for shared operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Authentication errors.
///
/// `NoSavedToken` is deliberately separate from `LoginRejected` so callers
/// can tell "never logged in on this machine" apart from "the cloud said no".
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("No valid saved token found")]
    NoSavedToken,

    #[error("Login rejected: {message}")]
    LoginRejected { message: String },

    #[error("Login response missing {0}")]
    MalformedResponse(&'static str),
}

/// Cloud API errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        source: reqwest::Error,
    },

    #[error("Token was not accepted by the cloud API")]
    Unauthorized,

    #[error("{endpoint} returned HTTP {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: u16,
        body: String,
    },

    #[error("Incomplete camera credentials for {dev_id}: {missing} is empty")]
    IncompleteCredentials {
        dev_id: String,
        missing: &'static str,
    },
}

/// Token storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to resolve platform data directory")]
    DirectoryAccess,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
