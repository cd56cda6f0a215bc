//! Unified error type for folio.

use thiserror::Error;

use super::category::ErrorCategory;
use super::network::NetworkError;
use super::system::{classify_io_error, SystemError};

/// Unified error type for folio.
///
/// Domain errors convert into this with `?`. Only the [`ErrorCategory`] leaves
/// the fetch layer; it picks the placeholder hint and whether `r` retries.
#[derive(Debug, Error)]
pub enum FolioError {
    /// Network-related errors (connections, HTTP, malformed payloads).
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// System/filesystem errors.
    #[error(transparent)]
    System(#[from] SystemError),

    /// JSON (de)serialization failed.
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Invalid configuration value.
    #[error("Invalid configuration for {key}: {message}")]
    Configuration { key: String, message: String },
}

impl FolioError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            FolioError::Network(NetworkError::RateLimited { .. }) => ErrorCategory::RateLimit,
            FolioError::Network(NetworkError::HttpStatus { status, .. }) if *status >= 500 => {
                ErrorCategory::Server
            }
            FolioError::Network(NetworkError::HttpStatus { status: 404, .. }) => {
                ErrorCategory::NotFound
            }
            FolioError::Network(_) => ErrorCategory::Network,
            FolioError::System(SystemError::LaunchFailed { .. }) => ErrorCategory::Launcher,
            FolioError::System(_) | FolioError::Serialization { .. } => ErrorCategory::Storage,
            FolioError::Configuration { .. } => ErrorCategory::Configuration,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            FolioError::Network(err) => err.user_message(),
            FolioError::System(err) => err.user_message(),
            FolioError::Serialization { .. } => "Stored data could not be read.".to_string(),
            FolioError::Configuration { key, message } => format!("{}: {}", key, message),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FolioError::Network(err) => err.error_code(),
            FolioError::System(err) => err.error_code(),
            FolioError::Serialization { .. } => "E_SERDE",
            FolioError::Configuration { .. } => "E_CONFIG",
        }
    }
}

impl From<std::io::Error> for FolioError {
    fn from(err: std::io::Error) -> Self {
        FolioError::System(classify_io_error(&err, "io", None))
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        FolioError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Type alias for Results using FolioError.
pub type FolioResult<T> = Result<T, FolioError>;
