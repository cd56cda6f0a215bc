//! Concrete implementations of trait abstractions.
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`SystemClock`] - wall-clock time
//! - [`TokioDelay`] - cancellable `tokio::time::sleep`
//! - [`SystemLauncher`] - platform opener for `mailto:` and web links
//!
//! The [`mock`] submodule provides test doubles for all of them.

pub mod mock;
pub mod reqwest_http;
pub mod system;

pub use mock::{ManualDelay, MockClock, MockHttpClient, RecordingLauncher};
pub use reqwest_http::ReqwestHttpClient;
pub use system::{SystemClock, SystemLauncher, TokioDelay};
