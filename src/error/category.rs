//! Error categories, keyed to where the failure shows up in the portfolio.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// No answer from GitHub: offline, DNS, timeout.
    Network,
    /// GitHub answered 5xx.
    Server,
    /// Hourly API quota spent.
    RateLimit,
    /// The configured profile or repository does not exist.
    NotFound,
    /// Preferences or log file could not be written.
    Storage,
    /// The desktop refused to open a link.
    Launcher,
    Configuration,
}

impl ErrorCategory {
    /// Whether the stats and projects placeholders offer `r` to retry.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ErrorCategory::Network | ErrorCategory::Server | ErrorCategory::RateLimit
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::RateLimit => "rate-limit",
            ErrorCategory::NotFound => "not-found",
            ErrorCategory::Storage => "storage",
            ErrorCategory::Launcher => "launcher",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// One sentence shown under a failed placeholder.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Please check your internet connection and try again.",
            ErrorCategory::Server => "GitHub is having trouble. Try again in a moment.",
            ErrorCategory::RateLimit => "GitHub's hourly request quota is spent. Try again later.",
            ErrorCategory::NotFound => "Check the --user flag or FOLIO_GITHUB_USER.",
            ErrorCategory::Storage => "Check file permissions in ~/.folio.",
            ErrorCategory::Launcher => "Copy the address and open it yourself.",
            ErrorCategory::Configuration => "Check FOLIO_* environment variables and flags.",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
