//! Message handling and the page initializers.

use std::time::{Duration, Instant};

use crate::anim::Tween;
use crate::contact::SubmitStart;
use crate::error::ErrorCategory;
use crate::github::render::visible_projects;
use crate::github::{LoadState, ProjectFilter};
use crate::reveal::{StaggeredReveal, ABOUT_ENTRANCE, CARD_ENTRANCE, CATEGORY_ENTRANCE};
use crate::router::{NavigationOutcome, PageId};
use crate::ui::FIRST_CARD_BLOCK;

use super::{App, AppMessage, COUNTER_DURATION};

impl App {
    /// Apply one async result. Every message changes something visible.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        let now = Instant::now();
        match msg {
            AppMessage::PageReady(page) => self.init_page(page, now),
            AppMessage::NavigationFinished { to, outcome } => {
                if outcome != NavigationOutcome::Completed {
                    tracing::debug!(page = %to, ?outcome, "Navigation did not run");
                }
            }
            AppMessage::StatsLoaded(state) => {
                if matches!(state, LoadState::Loaded(_)) {
                    self.counter_tween = Some(Tween::new(now, Duration::ZERO, COUNTER_DURATION));
                }
                self.stats = state;
                self.refresh_scroll(now);
            }
            AppMessage::ProjectsLoaded(state) => {
                let loaded = matches!(state, LoadState::Loaded(_));
                self.projects = state;
                self.selected_project = 0;
                if loaded && self.scroll.page() == PageId::Projects {
                    self.restart_entrance(CARD_ENTRANCE, now);
                } else {
                    self.refresh_scroll(now);
                }
            }
            AppMessage::SubmissionSettled(result) => self.contact.complete(result),
        }
    }

    /// Page-specific setup, run once the router is idle on `page`.
    ///
    /// Every visit starts at the top of the page with its entrance replaying.
    pub fn init_page(&mut self, page: PageId, now: Instant) {
        tracing::debug!(%page, "Initializing page");
        self.scroll.reset(page);
        self.scroll_reveal.reset();
        self.entrance = StaggeredReveal::default();
        match page {
            PageId::Home => {}
            PageId::About => {
                self.entrance.start(now, ABOUT_ENTRANCE);
                self.start_stats_load();
            }
            PageId::Projects => {
                self.project_filter = ProjectFilter::All;
                self.selected_project = 0;
                self.entrance.start(now, CARD_ENTRANCE);
                self.start_projects_load();
            }
            PageId::Skills => {
                self.skills.start(now);
                self.entrance.start(now, CATEGORY_ENTRANCE);
            }
            PageId::Contact => self.contact.wire(),
        }
        self.refresh_scroll(now);
    }

    /// Fetch stats in the background. No-op while a load is running.
    pub fn start_stats_load(&mut self) {
        if self.stats.is_loading() {
            return;
        }
        self.stats = LoadState::Loading;
        self.counter_tween = None;

        let github = self.github.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let state = github.load_stats().await;
            let _ = tx.send(AppMessage::StatsLoaded(state));
        });
    }

    /// Fetch featured projects in the background. No-op while a load is running.
    pub fn start_projects_load(&mut self) {
        if self.projects.is_loading() {
            return;
        }
        self.projects = LoadState::Loading;

        let github = self.github.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let state = github.load_projects().await;
            let _ = tx.send(AppMessage::ProjectsLoaded(state));
        });
    }

    /// Re-run the failed load on the current page, unless its failure is
    /// one a retry cannot fix.
    pub fn retry_current(&mut self) {
        let retryable = |failure: Option<ErrorCategory>| failure.is_some_and(|c| c.is_retryable());
        match self.router.current() {
            PageId::About if retryable(self.stats.failure()) => self.start_stats_load(),
            PageId::Projects if retryable(self.projects.failure()) => self.start_projects_load(),
            _ => {}
        }
    }

    /// Submit the contact form, settling it on a background task.
    pub fn submit_contact(&mut self) {
        let recipient = self.config.contact_email.clone();
        match self.contact.submit(&recipient, self.launcher.as_ref()) {
            SubmitStart::Sent(pending) => {
                let delay = self.delay.clone();
                let tx = self.message_tx.clone();
                tokio::spawn(async move {
                    let result = pending.settle(delay.as_ref()).await;
                    let _ = tx.send(AppMessage::SubmissionSettled(result));
                });
            }
            SubmitStart::Busy => tracing::debug!("Submission already in progress"),
            SubmitStart::Rejected | SubmitStart::Failed => {}
        }
        self.mark_dirty();
    }

    /// Cycle the project filter, then replay the card entrance from the top.
    pub fn cycle_project_filter(&mut self) {
        let now = Instant::now();
        self.project_filter = self.project_filter.next();
        self.selected_project = 0;
        self.scroll.scroll_to(0);
        self.restart_entrance(CARD_ENTRANCE, now);
        self.mark_dirty();
    }

    pub fn select_project(&mut self, delta: isize) {
        let Some(projects) = self.projects.loaded() else {
            return;
        };
        let count = visible_projects(projects, self.project_filter).len();
        if count == 0 {
            return;
        }
        let current = self.selected_project.min(count - 1) as isize;
        self.selected_project = (current + delta).clamp(0, count as isize - 1) as usize;
        self.scroll_into_view(self.selected_project + FIRST_CARD_BLOCK, Instant::now());
        self.mark_dirty();
    }

    /// Open the selected project's repository page, or its demo when `demo` is set.
    pub fn open_selected_project(&mut self, demo: bool) {
        let Some(projects) = self.projects.loaded() else {
            return;
        };
        let visible = visible_projects(projects, self.project_filter);
        let Some(project) = visible.get(self.selected_project) else {
            return;
        };
        let uri = if demo {
            match &project.homepage {
                Some(homepage) => homepage.clone(),
                None => return,
            }
        } else {
            project.html_url.clone()
        };
        if let Err(e) = self.launcher.open(&uri) {
            tracing::warn!(error = %e, "Could not open project link");
        }
    }
}
