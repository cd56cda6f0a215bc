//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET used by the GitHub data cache
//! - [`Clock`] - current time for cache expiry
//! - [`Delay`] - cancellable fixed waits for page transitions and form submission
//! - [`UriLauncher`] - `mailto:` and browser hand-off

pub mod clock;
pub mod delay;
pub mod http;
pub mod launcher;

pub use clock::Clock;
pub use delay::{Delay, DelayOutcome};
pub use http::{Headers, HttpClient, HttpError, Response, RATE_LIMIT_REMAINING};
pub use launcher::UriLauncher;
