//! Error handling for folio.
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Network | Connection, DNS, timeout | Yes |
//! | Server | GitHub 5xx | Yes |
//! | RateLimit | Hourly quota spent | Yes |
//! | NotFound | Missing profile or repository | No |
//! | Storage | Preferences and log files | No |
//! | Launcher | Desktop refused a link | No |
//! | Configuration | Bad flag or env var | No |
//!
//! Nothing in this crate treats an error as fatal to the running UI. Fetch
//! failures degrade to a placeholder showing the category's recovery hint,
//! with a retry control when the category is retryable. Validation
//! failures stay next to the offending field.

mod category;
mod folio_error;
mod network;
mod system;

pub use category::ErrorCategory;
pub use folio_error::{FolioError, FolioResult};
pub use network::NetworkError;
pub use system::{classify_io_error, SystemError};
