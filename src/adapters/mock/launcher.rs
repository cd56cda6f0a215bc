//! Recording launcher for tests.

use std::sync::{Arc, Mutex};

use crate::error::{FolioResult, SystemError};
use crate::traits::UriLauncher;

/// Records opened URIs instead of opening them.
#[derive(Debug, Clone, Default)]
pub struct RecordingLauncher {
    opened: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A launcher whose every `open` fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// URIs opened so far.
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl UriLauncher for RecordingLauncher {
    fn open(&self, uri: &str) -> FolioResult<()> {
        self.opened.lock().unwrap().push(uri.to_string());
        if self.fail {
            return Err(SystemError::LaunchFailed {
                uri: uri.to_string(),
                message: "no handler registered".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
