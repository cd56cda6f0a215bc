//! Test delay whose waits are released by hand.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{watch, Semaphore};

use crate::traits::{Delay, DelayOutcome};

/// A [`Delay`] that records every requested duration.
///
/// In gated mode each `sleep` blocks until the test calls [`ManualDelay::release`];
/// in immediate mode every `sleep` returns right away.
#[derive(Debug, Clone)]
pub struct ManualDelay {
    gate: Option<Arc<Semaphore>>,
    requested: Arc<Mutex<Vec<Duration>>>,
    cancelled: Arc<watch::Sender<bool>>,
}

impl ManualDelay {
    /// Waits block until released.
    pub fn gated() -> Self {
        Self::build(Some(Arc::new(Semaphore::new(0))))
    }

    /// Waits complete immediately.
    pub fn immediate() -> Self {
        Self::build(None)
    }

    fn build(gate: Option<Arc<Semaphore>>) -> Self {
        let (cancelled, _) = watch::channel(false);
        Self {
            gate,
            requested: Arc::new(Mutex::new(Vec::new())),
            cancelled: Arc::new(cancelled),
        }
    }

    /// Let `n` pending or future waits complete.
    pub fn release(&self, n: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(n);
        }
    }

    /// Durations requested so far.
    pub fn requested(&self) -> Vec<Duration> {
        self.requested.lock().unwrap().clone()
    }

    /// Yield to the runtime until at least `n` waits have been requested.
    pub async fn wait_for_requests(&self, n: usize) {
        while self.requested.lock().unwrap().len() < n {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl Delay for ManualDelay {
    async fn sleep(&self, duration: Duration) -> DelayOutcome {
        self.requested.lock().unwrap().push(duration);
        if self.is_cancelled() {
            return DelayOutcome::Cancelled;
        }
        let Some(gate) = &self.gate else {
            return DelayOutcome::Elapsed;
        };
        let mut rx = self.cancelled.subscribe();
        tokio::select! {
            permit = gate.acquire() => {
                if let Ok(permit) = permit {
                    permit.forget();
                }
                DelayOutcome::Elapsed
            }
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
