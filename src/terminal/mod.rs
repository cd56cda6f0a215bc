//! Terminal lifecycle: raw mode and alternate screen, restored on drop or panic.
//!
//! ```no_run
//! use folio::terminal::{install_panic_hook, TerminalFeatures, TerminalManager};
//!
//! fn main() -> color_eyre::Result<()> {
//!     install_panic_hook(TerminalFeatures::default());
//!     let mut manager = TerminalManager::new(TerminalFeatures::default())?;
//!     let _tui = manager.terminal();
//!     Ok(())
//! }
//! ```

mod modes;

pub use modes::TerminalFeatures;

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::panic;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal while the portfolio runs and gives it back exactly once.
pub struct TerminalManager {
    terminal: Tui,
    features: TerminalFeatures,
    restored: bool,
}

impl TerminalManager {
    pub fn new(features: TerminalFeatures) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = features.enter(&mut stdout) {
            features.leave(&mut stdout);
            return Err(e.into());
        }

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;
        tracing::debug!(?features, "Terminal entered TUI mode");

        Ok(Self {
            terminal,
            features,
            restored: false,
        })
    }

    pub fn terminal(&mut self) -> &mut Tui {
        &mut self.terminal
    }

    pub fn size(&self) -> Result<Rect> {
        Ok(self.terminal.size()?.into())
    }

    /// Restore now instead of at drop.
    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        self.features.leave(self.terminal.backend_mut());
        tracing::debug!("Terminal restored");
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Give the terminal back before the previous hook prints the panic.
///
/// Install before creating the [`TerminalManager`].
pub fn install_panic_hook(features: TerminalFeatures) {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        features.leave(&mut io::stdout());
        tracing::error!(%info, "Panic");
        previous(info);
    }));
}
