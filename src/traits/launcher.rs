//! Hand-off of URIs to the desktop environment.

use crate::error::FolioResult;

/// Opens a URI with whatever the system has registered for its scheme.
///
/// Used for `mailto:` links from the contact form and for project links.
pub trait UriLauncher: Send + Sync {
    /// Open `uri`. Returns once the hand-off happened, not once it was handled.
    fn open(&self, uri: &str) -> FolioResult<()>;
}
