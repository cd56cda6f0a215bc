//! AppMessage enum for async results flowing back into the application.

use tokio::sync::mpsc::UnboundedSender;

use crate::contact::SubmissionResult;
use crate::github::{GitHubStats, LoadState, Project};
use crate::router::{NavigationOutcome, PageId, PageInitializer};

/// Messages produced by spawned tasks and the router.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A transition settled on this page; run its initializer
    PageReady(PageId),
    /// A navigation task finished
    NavigationFinished { to: PageId, outcome: NavigationOutcome },
    /// The about-page stats load finished
    StatsLoaded(LoadState<GitHubStats>),
    /// The projects load finished
    ProjectsLoaded(LoadState<Vec<Project>>),
    /// The contact form's settle delay ran out
    SubmissionSettled(SubmissionResult),
}

/// Routes page initializers through the app's message channel so they run
/// on the event loop rather than inside the router task.
#[derive(Debug, Clone)]
pub struct ChannelInitializer {
    tx: UnboundedSender<AppMessage>,
}

impl ChannelInitializer {
    pub fn new(tx: UnboundedSender<AppMessage>) -> Self {
        Self { tx }
    }
}

impl PageInitializer for ChannelInitializer {
    fn initialize(&self, page: PageId) {
        if self.tx.send(AppMessage::PageReady(page)).is_err() {
            tracing::debug!(%page, "App channel closed; page initializer skipped");
        }
    }
}
