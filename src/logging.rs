//! File logging via `tracing-subscriber`.
//!
//! The terminal belongs to the TUI, so events go to `~/.folio/folio.log`.
//! The filter comes from `FOLIO_LOG` (see [`crate::startup::FolioConfig`]).

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{classify_io_error, FolioError, FolioResult, SystemError};
use crate::theme::PREFERENCES_DIR;

pub const LOG_FILE: &str = "folio.log";

/// `~/.folio/folio.log`, or `None` without a home directory.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(PREFERENCES_DIR).join(LOG_FILE))
}

/// Parse `directive`, falling back to `info` when it is malformed.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to `path`.
///
/// Fails if the file cannot be opened or a subscriber is already installed.
pub fn init_logging(directive: &str, path: &Path) -> FolioResult<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| SystemError::DirectoryCreationFailed {
            path: dir.to_path_buf(),
            message: e.to_string(),
        })?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| classify_io_error(&e, "open log file", Some(path.to_path_buf())))?;

    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(build_filter(directive))
        .with(layer)
        .try_init()
        .map_err(|e| FolioError::Configuration {
            key: "FOLIO_LOG".to_string(),
            message: e.to_string(),
        })
}
