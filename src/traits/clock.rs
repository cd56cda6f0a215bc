//! Wall-clock abstraction.

use chrono::{DateTime, Utc};

/// Source of the current time.
///
/// The data cache asks this for timestamps so tests can move time forward
/// without sleeping.
pub trait Clock: Send + Sync {
    /// Current UTC time.
    fn now(&self) -> DateTime<Utc>;
}
