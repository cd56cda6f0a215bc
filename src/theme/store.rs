//! Persisted theme preference at `~/.folio/preferences.json`.

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::Theme;
use crate::error::{classify_io_error, FolioResult, SystemError};

/// The preferences directory name.
pub const PREFERENCES_DIR: &str = ".folio";

/// The preferences file name.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// On-disk preferences document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(rename = "portfolio-theme", default)]
    pub theme: Theme,
}

/// Reads and writes the theme preference.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    /// Store under the home directory.
    ///
    /// Returns `None` if the home directory cannot be determined.
    pub fn new() -> Option<Self> {
        let home = dirs::home_dir()?;
        Some(Self::with_path(
            home.join(PREFERENCES_DIR).join(PREFERENCES_FILE),
        ))
    }

    /// Store at an explicit path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saved theme, or light if nothing usable is stored.
    pub fn load(&self) -> Theme {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(_) => return Theme::default(),
        };

        match serde_json::from_reader::<_, Preferences>(BufReader::new(file)) {
            Ok(prefs) => prefs.theme,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "ignoring unreadable preferences: {}", e);
                Theme::default()
            }
        }
    }

    /// Persist `theme`, creating the parent directory if needed.
    pub fn save(&self, theme: Theme) -> FolioResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| SystemError::DirectoryCreationFailed {
                    path: parent.to_path_buf(),
                    message: e.to_string(),
                })?;
            }
        }

        let file = File::create(&self.path)
            .map_err(|e| classify_io_error(&e, "save theme", Some(self.path.clone())))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &Preferences { theme })?;
        writer
            .flush()
            .map_err(|e| classify_io_error(&e, "save theme", Some(self.path.clone())))?;
        Ok(())
    }

    /// Flip `current`, persist the result, and return it.
    ///
    /// The new theme is returned even if saving fails; the failure is logged.
    pub fn toggle(&self, current: Theme) -> Theme {
        let next = current.toggled();
        if let Err(e) = self.save(next) {
            tracing::warn!(code = e.error_code(), "failed to persist theme: {}", e);
        }
        next
    }
}
