//! Top-level application state.
//!
//! [`App`] owns every page's state and the shared services. The event loop in
//! `main` feeds it key and mouse events, ticks, and [`AppMessage`]s from
//! spawned tasks; the UI reads it to draw each frame.

mod handlers;
mod input;
mod messages;
mod navigation;
mod scrolling;

pub use messages::{AppMessage, ChannelInitializer};

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::anim::Tween;
use crate::contact::ContactForm;
use crate::effects::Background;
use crate::github::{GitHubApi, GitHubStats, LoadState, Project, ProjectFilter};
use crate::hero::Typewriter;
use crate::loading::LoadingScreen;
use crate::reveal::{ScrollReveal, StaggeredReveal};
use crate::router::{PageId, PageRouter};
use crate::scroll::PageScroll;
use crate::skills::SkillReveal;
use crate::startup::{FolioConfig, Services};
use crate::theme::{Theme, ThemeStore};
use crate::traits::{Delay, UriLauncher};

/// Duration of the stat counter animation.
pub const COUNTER_DURATION: Duration = Duration::from_secs(2);

pub struct App {
    pub config: FolioConfig,
    pub theme: Theme,
    theme_store: Option<ThemeStore>,
    pub router: PageRouter,
    github: Arc<GitHubApi>,
    delay: Arc<dyn Delay>,
    launcher: Arc<dyn UriLauncher>,

    pub stats: LoadState<GitHubStats>,
    /// Counter animation, started when stats arrive
    pub counter_tween: Option<Tween>,
    pub projects: LoadState<Vec<Project>>,
    pub project_filter: ProjectFilter,
    /// Index into the visible (filtered) projects
    pub selected_project: usize,
    pub skills: SkillReveal,
    pub contact: ContactForm,

    /// Staggered entrance of the current page's cards, categories or panels
    pub entrance: StaggeredReveal,
    /// Scroll triggers of the current page's blocks
    pub scroll_reveal: ScrollReveal,
    pub scroll: PageScroll,
    /// Terminal size in cells
    pub viewport: (u16, u16),

    pub loading: LoadingScreen,
    /// Hero typing animation, present once the loading screen has gone
    pub typewriter: Option<Typewriter>,
    pub background: Background,

    pub message_tx: UnboundedSender<AppMessage>,
    pub message_rx: Option<UnboundedReceiver<AppMessage>>,
    pub should_quit: bool,
    pub needs_redraw: bool,
    pub tick_count: u64,
}

impl App {
    /// Build the app around `services`.
    ///
    /// The theme comes from `config.theme_override`, else from `theme_store`,
    /// else defaults to light.
    pub fn new(config: FolioConfig, services: Services, theme_store: Option<ThemeStore>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let theme = config
            .theme_override
            .or_else(|| theme_store.as_ref().map(ThemeStore::load))
            .unwrap_or_default();

        let router = PageRouter::with_all_pages(
            PageId::Home,
            services.delay.clone(),
            Arc::new(ChannelInitializer::new(message_tx.clone())),
        );
        let now = Instant::now();

        Self {
            config,
            theme,
            theme_store,
            router,
            github: services.github,
            delay: services.delay,
            launcher: services.launcher,
            stats: LoadState::Idle,
            counter_tween: None,
            projects: LoadState::Idle,
            project_filter: ProjectFilter::All,
            selected_project: 0,
            skills: SkillReveal::default(),
            contact: ContactForm::new(),
            entrance: StaggeredReveal::default(),
            scroll_reveal: ScrollReveal::default(),
            scroll: PageScroll::new(PageId::Home),
            viewport: (80, 24),
            loading: LoadingScreen::new(now),
            typewriter: None,
            background: Background::new(80, 24),
            message_tx,
            message_rx: Some(message_rx),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Counter animation progress at `now`; zero until stats have loaded.
    pub fn counter_progress(&self, now: Instant) -> f64 {
        self.counter_tween
            .map_or(0.0, |tween| tween.progress_at(now))
    }

    /// Flip the theme and persist it.
    pub fn toggle_theme(&mut self) {
        self.theme = match &self.theme_store {
            Some(store) => store.toggle(self.theme),
            None => self.theme.toggled(),
        };
        tracing::info!(theme = %self.theme, "Theme toggled");
        self.mark_dirty();
    }

    /// Advance every time-driven animation to `now`.
    pub fn tick(&mut self, now: Instant) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if self.loading.advance(now) {
            self.start_ambient(now);
        }
        if let Some(typewriter) = &mut self.typewriter {
            typewriter.advance(now);
        }
        self.background.step();
        self.contact.expire_alert(now);
        self.mark_dirty();
    }

    /// Loading screen gone: start the hero text and the background.
    fn start_ambient(&mut self, now: Instant) {
        self.typewriter = Some(Typewriter::roles(now));
        self.background.start(now);
    }

    /// Hide the loading screen immediately.
    pub fn skip_loading(&mut self, now: Instant) {
        if self.loading.skip() {
            self.start_ambient(now);
        }
    }

    /// Stop pending transitions and delays, then quit.
    pub fn shutdown(&mut self) {
        self.router.cancel();
        self.should_quit = true;
    }
}
