//! Cancellable delay abstraction used by timed sequences.

use async_trait::async_trait;
use std::time::Duration;

/// How a delay ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayOutcome {
    /// The full duration elapsed.
    Elapsed,
    /// The delay was cut short by [`Delay::cancel`].
    Cancelled,
}

/// A fixed wall-clock wait that can be cut short.
///
/// Once cancelled, every subsequent `sleep` returns immediately with
/// [`DelayOutcome::Cancelled`] so a running sequence fast-forwards to its end.
#[async_trait]
pub trait Delay: Send + Sync {
    /// Wait for `duration`, or until cancelled.
    async fn sleep(&self, duration: Duration) -> DelayOutcome;

    /// Cancel the current and all future waits.
    fn cancel(&self);

    /// Whether [`Delay::cancel`] has been called.
    fn is_cancelled(&self) -> bool;
}
