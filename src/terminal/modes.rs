//! Escape sequences for entering and leaving the TUI.

use crossterm::{
    cursor::{Hide, Show},
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute, queue,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Optional terminal features the portfolio turns on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalFeatures {
    /// Pointer motion, for the background parallax.
    pub mouse: bool,
    /// Bracketed paste, so pasted text lands in one contact form field.
    pub paste: bool,
}

impl Default for TerminalFeatures {
    fn default() -> Self {
        Self {
            mouse: true,
            paste: true,
        }
    }
}

impl TerminalFeatures {
    /// Alternate screen plus the enabled features. Raw mode is the caller's job.
    pub fn enter<W: Write>(&self, out: &mut W) -> io::Result<()> {
        queue!(out, EnterAlternateScreen, Hide)?;
        if self.paste {
            queue!(out, EnableBracketedPaste)?;
        }
        if self.mouse {
            queue!(out, EnableMouseCapture)?;
        }
        out.flush()
    }

    /// Undo [`TerminalFeatures::enter`] and raw mode. Errors are ignored so
    /// this is safe from drop and from the panic hook.
    pub fn leave<W: Write>(&self, out: &mut W) {
        let _ = disable_raw_mode();
        if self.mouse {
            let _ = execute!(out, DisableMouseCapture);
        }
        if self.paste {
            let _ = execute!(out, DisableBracketedPaste);
        }
        let _ = execute!(out, LeaveAlternateScreen, Show);
        let _ = out.flush();
    }
}
