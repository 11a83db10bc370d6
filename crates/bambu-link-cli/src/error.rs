//! Error types for the bambu-link CLI.
//!
//! CliError wraps CoreError from the shared library and adds CLI-local
//! conditions. It owns the stable error tags printed on stderr and the
//! exit-code mapping.

use bambu_link_core::error::{ApiError, AuthError, CoreError, StorageError};
use thiserror::Error;

/// Exit codes for the CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Main error type for the CLI
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Core(#[from] CoreError),

    #[error("No printers found in your account")]
    NoDevicesFound,

    #[error("Printer with serial '{0}' not found")]
    DeviceNotFound(String),

    #[error("Invalid selection")]
    InvalidSelection,

    #[error("Cancelled by user")]
    Cancelled,
}

impl CliError {
    /// Stable, greppable tag emitted on stderr with every failure.
    pub fn tag(&self) -> &'static str {
        match self {
            CliError::Core(CoreError::Auth(AuthError::NoSavedToken)) => "NO_TOKEN_FOUND",
            CliError::Core(CoreError::Auth(_)) => "AUTH_FAILED",
            CliError::Core(CoreError::Api(ApiError::Unauthorized)) => "AUTH_FAILED",
            CliError::Core(CoreError::Api(ApiError::IncompleteCredentials { .. })) => {
                "INCOMPLETE_CREDENTIALS"
            }
            CliError::Core(_) => "API_ERROR",
            CliError::NoDevicesFound => "NO_DEVICES_FOUND",
            CliError::DeviceNotFound(_) => "DEVICE_NOT_FOUND",
            CliError::InvalidSelection => "INVALID_SELECTION",
            CliError::Cancelled => "CANCELLED",
        }
    }

    /// Every failure maps to the single non-zero status.
    pub fn exit_code(&self) -> i32 {
        exit_codes::FAILURE
    }
}

// Conversions from core error subtypes to CliError
impl From<AuthError> for CliError {
    fn from(e: AuthError) -> Self {
        CliError::Core(CoreError::Auth(e))
    }
}

impl From<ApiError> for CliError {
    fn from(e: ApiError) -> Self {
        CliError::Core(CoreError::Api(e))
    }
}

impl From<StorageError> for CliError {
    fn from(e: StorageError) -> Self {
        CliError::Core(CoreError::Storage(e))
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_tag_is_distinct_from_auth_failure() {
        let missing: CliError = AuthError::NoSavedToken.into();
        let rejected: CliError = AuthError::LoginRejected {
            message: "401".to_string(),
        }
        .into();

        assert_eq!(missing.tag(), "NO_TOKEN_FOUND");
        assert_eq!(rejected.tag(), "AUTH_FAILED");
    }

    #[test]
    fn test_lookup_and_credential_tags() {
        assert_eq!(CliError::NoDevicesFound.tag(), "NO_DEVICES_FOUND");
        assert_eq!(
            CliError::DeviceNotFound("X".to_string()).tag(),
            "DEVICE_NOT_FOUND"
        );

        let incomplete: CliError = ApiError::IncompleteCredentials {
            dev_id: "X".to_string(),
            missing: "ttcode",
        }
        .into();
        assert_eq!(incomplete.tag(), "INCOMPLETE_CREDENTIALS");
    }

    #[test]
    fn test_all_failures_exit_one() {
        assert_eq!(CliError::Cancelled.exit_code(), exit_codes::FAILURE);
        assert_eq!(CliError::NoDevicesFound.exit_code(), exit_codes::FAILURE);
        let auth: CliError = AuthError::NoSavedToken.into();
        assert_eq!(auth.exit_code(), exit_codes::FAILURE);
    }
}
