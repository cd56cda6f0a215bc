//! Production implementations of the clock, delay, and launcher traits.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::sync::watch;

use crate::error::{FolioResult, SystemError};
use crate::traits::{Clock, Delay, DelayOutcome, UriLauncher};

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Delay backed by `tokio::time::sleep`, cancellable through a watch channel.
#[derive(Debug)]
pub struct TokioDelay {
    cancelled: watch::Sender<bool>,
}

impl TokioDelay {
    pub fn new() -> Self {
        let (cancelled, _) = watch::channel(false);
        Self { cancelled }
    }
}

impl Default for TokioDelay {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Delay for TokioDelay {
    async fn sleep(&self, duration: Duration) -> DelayOutcome {
        let mut rx = self.cancelled.subscribe();
        tokio::select! {
            _ = tokio::time::sleep(duration) => DelayOutcome::Elapsed,
            _ = rx.wait_for(|cancelled| *cancelled) => DelayOutcome::Cancelled,
        }
    }

    fn cancel(&self) {
        self.cancelled.send_replace(true);
    }

    fn is_cancelled(&self) -> bool {
        *self.cancelled.borrow()
    }
}

/// Launcher that delegates to the platform opener (`open` crate).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl UriLauncher for SystemLauncher {
    fn open(&self, uri: &str) -> FolioResult<()> {
        open::that(uri).map_err(|e| {
            SystemError::LaunchFailed {
                uri: uri.to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }
}
