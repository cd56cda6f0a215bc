//! Test doubles for the trait abstractions.
//!
//! - [`MockHttpClient`] - canned responses, recorded URLs
//! - [`MockClock`] - time that moves only when advanced
//! - [`ManualDelay`] - waits released by the test
//! - [`RecordingLauncher`] - records `open` calls

pub mod clock;
pub mod delay;
pub mod http;
pub mod launcher;

pub use clock::MockClock;
pub use delay::ManualDelay;
pub use http::{MockHttpClient, MockResponse};
pub use launcher::RecordingLauncher;
