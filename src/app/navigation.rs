//! Page navigation requests.

use crate::router::{PageId, TransitionAnimation};

use super::{App, AppMessage};

impl App {
    /// Start a transition to `page` on a background task.
    ///
    /// Requests for the current page or during a transition are dropped by
    /// the router itself.
    pub fn navigate_to(&mut self, page: PageId) {
        self.navigate_with(page, None);
    }

    pub fn navigate_with(&mut self, page: PageId, animation: Option<TransitionAnimation>) {
        if self.router.is_transitioning() {
            tracing::debug!(%page, "Transition in progress; navigation dropped");
            return;
        }
        let router = self.router.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let outcome = router.navigate(page, animation).await;
            let _ = tx.send(AppMessage::NavigationFinished { to: page, outcome });
        });
        self.mark_dirty();
    }

    pub fn navigate_next(&mut self) {
        let target = self.router.current().next();
        self.navigate_to(target);
    }

    pub fn navigate_prev(&mut self) {
        let target = self.router.current().prev();
        self.navigate_to(target);
    }
}
