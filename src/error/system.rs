//! System-related error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Filesystem and OS errors.
#[derive(Debug, Clone, Error)]
pub enum SystemError {
    /// Could not determine home directory.
    #[error("Could not determine home directory")]
    NoHomeDirectory,

    /// Failed to create a directory.
    #[error("Failed to create directory {path:?}: {message}")]
    DirectoryCreationFailed { path: PathBuf, message: String },

    /// Generic I/O error.
    #[error("I/O error during {operation}: {message}")]
    IoError {
        operation: String,
        path: Option<PathBuf>,
        message: String,
    },

    /// Could not hand a URI to the system opener.
    #[error("Failed to open {uri}: {message}")]
    LaunchFailed { uri: String, message: String },
}

impl SystemError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            SystemError::NoHomeDirectory => {
                "Could not find your home directory; preferences will not be saved.".to_string()
            }
            SystemError::DirectoryCreationFailed { path, .. } => {
                format!("Could not create {}.", path.display())
            }
            SystemError::IoError { operation, .. } => {
                format!("A file operation failed ({}).", operation)
            }
            SystemError::LaunchFailed { .. } => {
                "Could not open your mail client.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            SystemError::NoHomeDirectory => "E_SYS_HOME",
            SystemError::DirectoryCreationFailed { .. } => "E_SYS_MKDIR",
            SystemError::IoError { .. } => "E_SYS_IO",
            SystemError::LaunchFailed { .. } => "E_SYS_LAUNCH",
        }
    }
}

/// Classify an I/O error that happened during `operation` on `path`.
pub fn classify_io_error(err: &io::Error, operation: &str, path: Option<PathBuf>) -> SystemError {
    SystemError::IoError {
        operation: operation.to_string(),
        path,
        message: err.to_string(),
    }
}
