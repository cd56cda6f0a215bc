//! Page routing: which section is visible and the transition between sections.
//!
//! [`PageRouter`] is a small state machine. A navigation request moves it from
//! [`RouterState::Idle`] to [`RouterState::Transitioning`], plays the fixed
//! exit / swap / enter sequence through an injected [`Delay`], returns to
//! `Idle`, and only then runs the page initializer for the new page.
//!
//! The router is cheap to clone; clones share state, so the render loop reads
//! snapshots while a spawned task drives the transition.

pub mod page;
pub mod transition;

pub use page::{PageId, PageSection};
pub use transition::{
    PageVisual, TransitionAnimation, ENTER_DURATION, ENTER_SETTLE, EXIT_DURATION,
};

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

use crate::traits::{Delay, DelayOutcome};

/// Runs page-specific setup after a transition settles.
pub trait PageInitializer: Send + Sync {
    fn initialize(&self, page: PageId);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterState {
    Idle(PageId),
    Transitioning {
        from: PageId,
        to: PageId,
        animation: TransitionAnimation,
    },
}

/// What a navigation request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The transition played and the router is idle on the new page.
    Completed,
    /// Another transition was running; the request was discarded.
    Dropped,
    /// The requested page is already showing.
    AlreadyActive,
    /// The current or requested page has no registered section.
    MissingSection,
}

/// Point-in-time copy of the router for rendering.
#[derive(Debug, Clone)]
pub struct RouterSnapshot {
    pub state: RouterState,
    pub sections: Vec<PageSection>,
    pub overlay_visible: bool,
    pub nav_highlight: PageId,
    /// When the current transition stage began.
    pub stage_started: Instant,
}

impl RouterSnapshot {
    pub fn section(&self, id: PageId) -> Option<&PageSection> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// The page to draw: the active section, falling back to the idle page.
    pub fn visible_page(&self) -> PageId {
        self.sections
            .iter()
            .find(|section| section.active)
            .map(|section| section.id)
            .unwrap_or(match self.state {
                RouterState::Idle(page) => page,
                RouterState::Transitioning { from, .. } => from,
            })
    }
}

#[derive(Debug)]
struct RouterShared {
    state: RouterState,
    sections: Vec<PageSection>,
    overlay_visible: bool,
    nav_highlight: PageId,
    stage_started: Instant,
}

impl RouterShared {
    fn section_mut(&mut self, id: PageId) -> Option<&mut PageSection> {
        self.sections.iter_mut().find(|section| section.id == id)
    }

    fn has_section(&self, id: PageId) -> bool {
        self.sections.iter().any(|section| section.id == id)
    }

    fn set_visual(&mut self, id: PageId, visual: Option<PageVisual>) {
        if let Some(section) = self.section_mut(id) {
            section.visual = visual;
        }
        self.stage_started = Instant::now();
    }
}

#[derive(Clone)]
pub struct PageRouter {
    shared: Arc<Mutex<RouterShared>>,
    delay: Arc<dyn Delay>,
    initializer: Arc<dyn PageInitializer>,
}

impl std::fmt::Debug for PageRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRouter")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl PageRouter {
    /// Router idle on `initial` with the given sections registered.
    ///
    /// `initial` is marked active if it is among `sections`.
    pub fn new(
        initial: PageId,
        sections: impl IntoIterator<Item = PageId>,
        delay: Arc<dyn Delay>,
        initializer: Arc<dyn PageInitializer>,
    ) -> Self {
        let sections = sections
            .into_iter()
            .map(|id| PageSection {
                active: id == initial,
                ..PageSection::new(id)
            })
            .collect();
        Self {
            shared: Arc::new(Mutex::new(RouterShared {
                state: RouterState::Idle(initial),
                sections,
                overlay_visible: false,
                nav_highlight: initial,
                stage_started: Instant::now(),
            })),
            delay,
            initializer,
        }
    }

    /// Router with every page registered.
    pub fn with_all_pages(
        initial: PageId,
        delay: Arc<dyn Delay>,
        initializer: Arc<dyn PageInitializer>,
    ) -> Self {
        Self::new(initial, PageId::ALL, delay, initializer)
    }

    fn lock(&self) -> MutexGuard<'_, RouterShared> {
        self.shared
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn state(&self) -> RouterState {
        self.lock().state
    }

    /// The idle page, or the page being left while transitioning.
    pub fn current(&self) -> PageId {
        match self.state() {
            RouterState::Idle(page) => page,
            RouterState::Transitioning { from, .. } => from,
        }
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.state(), RouterState::Transitioning { .. })
    }

    pub fn active_pages(&self) -> Vec<PageId> {
        self.lock()
            .sections
            .iter()
            .filter(|section| section.active)
            .map(|section| section.id)
            .collect()
    }

    pub fn snapshot(&self) -> RouterSnapshot {
        let shared = self.lock();
        RouterSnapshot {
            state: shared.state,
            sections: shared.sections.clone(),
            overlay_visible: shared.overlay_visible,
            nav_highlight: shared.nav_highlight,
            stage_started: shared.stage_started,
        }
    }

    /// Cut the running transition short. Remaining stages complete immediately.
    pub fn cancel(&self) {
        self.delay.cancel();
    }

    /// Claim the transition slot and apply the exit stage, all under one lock.
    fn begin(
        &self,
        to: PageId,
        animation: Option<TransitionAnimation>,
    ) -> Result<(PageId, TransitionAnimation), NavigationOutcome> {
        let mut shared = self.lock();
        let from = match shared.state {
            RouterState::Transitioning { .. } => return Err(NavigationOutcome::Dropped),
            RouterState::Idle(current) if current == to => {
                return Err(NavigationOutcome::AlreadyActive)
            }
            RouterState::Idle(current) => current,
        };
        if !shared.has_section(from) || !shared.has_section(to) {
            return Err(NavigationOutcome::MissingSection);
        }

        let animation = animation.unwrap_or_else(TransitionAnimation::random);
        shared.state = RouterState::Transitioning {
            from,
            to,
            animation,
        };
        shared.nav_highlight = to;
        shared.set_visual(from, Some(PageVisual::Exit(animation)));
        shared.overlay_visible = true;
        Ok((from, animation))
    }

    async fn wait(&self, duration: std::time::Duration) {
        if self.delay.sleep(duration).await == DelayOutcome::Cancelled {
            tracing::debug!("Transition stage fast-forwarded");
        }
    }

    /// Navigate to `to`, playing `animation` or a random one.
    pub async fn navigate(
        &self,
        to: PageId,
        animation: Option<TransitionAnimation>,
    ) -> NavigationOutcome {
        let (from, animation) = match self.begin(to, animation) {
            Ok(started) => started,
            Err(outcome) => {
                if outcome == NavigationOutcome::MissingSection {
                    tracing::warn!(page = %to, "Navigation target has no section");
                } else {
                    tracing::debug!(page = %to, ?outcome, "Navigation request ignored");
                }
                return outcome;
            }
        };
        tracing::debug!(%from, %to, %animation, "Page transition started");

        self.wait(EXIT_DURATION).await;
        {
            let mut shared = self.lock();
            if let Some(section) = shared.section_mut(from) {
                section.active = false;
                section.visual = None;
            }
            if let Some(section) = shared.section_mut(to) {
                section.active = true;
            }
            shared.set_visual(to, Some(PageVisual::Enter(animation)));
            shared.overlay_visible = false;
        }

        self.wait(ENTER_SETTLE).await;
        self.lock()
            .set_visual(to, Some(PageVisual::EnterActive(animation)));

        self.wait(ENTER_DURATION).await;
        {
            let mut shared = self.lock();
            shared.set_visual(to, None);
            shared.state = RouterState::Idle(to);
        }

        tracing::info!(page = %to, "Page transition complete");
        self.initializer.initialize(to);
        NavigationOutcome::Completed
    }
}
