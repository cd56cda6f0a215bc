//! End-to-end flows through `App` with mock services.
//!
//! Delays complete immediately, HTTP answers come from `MockHttpClient`, and
//! opened links are recorded instead of handed to the desktop.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio::adapters::mock::MockResponse;
use folio::adapters::{ManualDelay, MockClock, MockHttpClient, RecordingLauncher};
use folio::app::{App, AppMessage};
use folio::cache::{RemoteDataCache, DEFAULT_EXPIRY};
use folio::error::ErrorCategory;
use folio::contact::{AlertKind, FieldName, FAILURE_MESSAGE, INVALID_BANNER, SUCCESS_MESSAGE};
use folio::github::{GitHubApi, LoadState};
use folio::router::{PageId, RouterState};
use folio::startup::{FolioConfig, Services};
use serde_json::json;
use tokio::sync::mpsc::UnboundedReceiver;

const API: &str = "https://api.test";

struct Harness {
    app: App,
    rx: UnboundedReceiver<AppMessage>,
    http: MockHttpClient,
    launcher: RecordingLauncher,
}

fn harness_with(launcher: RecordingLauncher) -> Harness {
    let http = MockHttpClient::new();
    let cache = Arc::new(RemoteDataCache::new(
        Arc::new(http.clone()),
        Arc::new(MockClock::default()),
        DEFAULT_EXPIRY,
    ));
    let services = Services {
        github: Arc::new(GitHubApi::new(cache, API, "octo")),
        delay: Arc::new(ManualDelay::immediate()),
        launcher: Arc::new(launcher.clone()),
    };
    let config = FolioConfig::new()
        .with_github_user("octo")
        .with_api_base(API)
        .with_contact_email("me@folio.dev");

    let mut app = App::new(config, services, None);
    let rx = app.message_rx.take().expect("receiver is present on a new app");
    Harness {
        app,
        rx,
        http,
        launcher,
    }
}

fn harness() -> Harness {
    harness_with(RecordingLauncher::new())
}

impl Harness {
    /// Feed messages to the app until one matches `done`.
    async fn pump_until(&mut self, done: impl Fn(&AppMessage) -> bool) {
        loop {
            let msg = tokio::time::timeout(Duration::from_secs(5), self.rx.recv())
                .await
                .expect("timed out waiting for an app message")
                .expect("app channel closed");
            let finished = done(&msg);
            self.app.handle_message(msg);
            if finished {
                return;
            }
        }
    }

    async fn go_to(&mut self, page: PageId) {
        self.app.navigate_to(page);
        self.pump_until(|msg| matches!(msg, AppMessage::NavigationFinished { to, .. } if *to == page))
            .await;
        assert_eq!(self.app.router.state(), RouterState::Idle(page));
    }

    fn mount_github(&self) {
        self.http.respond(
            &format!("{}/users/octo", API),
            MockResponse::json(json!({
                "login": "octo",
                "followers": 9,
                "following": 1,
                "created_at": "2018-06-01T00:00:00Z"
            })),
        );
        self.http.respond(
            &format!("{}/users/octo/repos", API),
            MockResponse::json(json!([
                { "name": "site", "full_name": "octo/site", "stargazers_count": 3, "language": "TypeScript" },
                { "name": "api", "full_name": "octo/api", "stargazers_count": 8, "language": "Go" }
            ])),
        );
        self.http.respond(
            &format!("{}/repos/octo/site/languages", API),
            MockResponse::json(json!({ "TypeScript": 400, "CSS": 100 })),
        );
        self.http.respond(
            &format!("{}/repos/octo/api/languages", API),
            MockResponse::json(json!({ "Go": 900 })),
        );
    }
}

fn fill_valid_form(app: &mut App) {
    app.contact.set_value(FieldName::Name, "Ada Lovelace");
    app.contact.set_value(FieldName::Email, "ada@gmail.com");
    app.contact.set_value(FieldName::Subject, "Engines");
    app.contact
        .set_value(FieldName::Message, "Shall we talk about the analytical engine?");
}

#[tokio::test]
async fn test_contact_submission_opens_one_mailto_then_resets() {
    let mut h = harness();
    h.go_to(PageId::Contact).await;

    fill_valid_form(&mut h.app);
    h.app.submit_contact();
    assert!(h.app.contact.is_submitting());

    // a second submit while busy does nothing
    h.app.submit_contact();

    h.pump_until(|msg| matches!(msg, AppMessage::SubmissionSettled(_)))
        .await;

    let opened = h.launcher.opened();
    assert_eq!(opened.len(), 1);
    assert!(opened[0].starts_with("mailto:me@folio.dev?subject=Engines&body="));
    assert!(opened[0].contains("Ada%20Lovelace"));

    let alert = h.app.contact.alert().expect("success alert");
    assert_eq!(alert.kind, AlertKind::Success);
    assert_eq!(alert.message, SUCCESS_MESSAGE);
    assert!(!h.app.contact.is_submitting());
    for name in FieldName::ALL {
        assert!(h.app.contact.field(name).value.is_empty(), "{} not cleared", name);
    }
}

#[tokio::test]
async fn test_invalid_contact_form_never_reaches_the_launcher() {
    let mut h = harness();
    h.go_to(PageId::Contact).await;

    h.app.contact.set_value(FieldName::Name, "A");
    h.app.contact.set_value(FieldName::Email, "not-an-email");
    h.app.submit_contact();

    assert!(h.launcher.opened().is_empty());
    assert!(!h.app.contact.is_submitting());
    assert_eq!(
        h.app.contact.alert().map(|alert| alert.message.as_str()),
        Some(INVALID_BANNER)
    );
    assert!(h.app.contact.field(FieldName::Name).has_error());
    assert!(h.app.contact.field(FieldName::Email).has_error());
    assert!(h.app.contact.field(FieldName::Message).has_error());
}

#[tokio::test]
async fn test_launcher_failure_keeps_the_form() {
    let mut h = harness_with(RecordingLauncher::failing());
    h.go_to(PageId::Contact).await;

    fill_valid_form(&mut h.app);
    h.app.submit_contact();

    let alert = h.app.contact.alert().expect("failure alert");
    assert_eq!(alert.kind, AlertKind::Error);
    assert_eq!(alert.message, FAILURE_MESSAGE);
    assert!(!h.app.contact.is_submitting());
    assert_eq!(h.app.contact.field(FieldName::Subject).value, "Engines");
}

#[tokio::test]
async fn test_about_page_loads_stats_after_transition() {
    let mut h = harness();
    h.mount_github();

    h.go_to(PageId::About).await;
    if !matches!(h.app.stats, LoadState::Loaded(_)) {
        h.pump_until(|msg| matches!(msg, AppMessage::StatsLoaded(_)))
            .await;
    }

    let stats = h.app.stats.loaded().expect("stats loaded");
    assert_eq!(stats.total_stars, 11);
    assert_eq!(stats.join_year, 2018);
    assert!(h.app.counter_tween.is_some());
}

#[tokio::test]
async fn test_failed_projects_recover_on_retry() {
    let mut h = harness();
    h.http.fallback(MockResponse::status(503));

    h.go_to(PageId::Projects).await;
    if !matches!(h.app.projects, LoadState::Failed(_)) {
        h.pump_until(|msg| matches!(msg, AppMessage::ProjectsLoaded(_)))
            .await;
    }
    assert_eq!(h.app.projects.failure(), Some(ErrorCategory::Server));

    h.mount_github();
    let now = Instant::now();
    // keys are swallowed until the loading screen is gone
    h.app.skip_loading(now);
    h.app
        .handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE), now);
    assert!(h.app.projects.is_loading());
    h.pump_until(|msg| matches!(msg, AppMessage::ProjectsLoaded(_)))
        .await;

    let projects = h.app.projects.loaded().expect("projects loaded");
    let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["api", "site"]);
}

#[tokio::test]
async fn test_stats_are_cached_across_visits() {
    let mut h = harness();
    h.mount_github();

    h.go_to(PageId::About).await;
    if !matches!(h.app.stats, LoadState::Loaded(_)) {
        h.pump_until(|msg| matches!(msg, AppMessage::StatsLoaded(_)))
            .await;
    }
    h.go_to(PageId::Home).await;
    h.go_to(PageId::About).await;
    h.pump_until(|msg| matches!(msg, AppMessage::StatsLoaded(_)))
        .await;

    assert_eq!(h.http.hits(&format!("{}/users/octo", API)), 1);
}

#[tokio::test]
async fn test_missing_profile_is_not_retried() {
    let mut h = harness();
    h.http.fallback(MockResponse::status(404));

    h.go_to(PageId::About).await;
    if !matches!(h.app.stats, LoadState::Failed(_)) {
        h.pump_until(|msg| matches!(msg, AppMessage::StatsLoaded(_)))
            .await;
    }
    assert_eq!(h.app.stats.failure(), Some(ErrorCategory::NotFound));
    let requests = h.http.requests().len();

    let now = Instant::now();
    h.app.skip_loading(now);
    h.app
        .handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE), now);

    assert_eq!(h.app.stats.failure(), Some(ErrorCategory::NotFound));
    assert_eq!(h.http.requests().len(), requests);
}

#[tokio::test]
async fn test_scrolling_reveals_the_last_skill_category() {
    let mut h = harness();
    let now = Instant::now();
    h.app.skip_loading(now);
    // narrow enough to stack the three categories, short enough to scroll
    h.app.resize(60, 20, now);
    h.go_to(PageId::Skills).await;

    let later = Instant::now() + Duration::from_secs(5);
    assert!(h.app.scroll.max() > 0);
    assert_eq!(h.app.reveal_progress(PageId::Skills, 0, 0, later), 1.0);
    assert_eq!(h.app.reveal_progress(PageId::Skills, 2, 2, later), 0.0);

    h.app
        .handle_key(KeyEvent::new(KeyCode::End, KeyModifiers::NONE), later);
    assert_eq!(h.app.scroll.offset(), h.app.scroll.max());
    assert!(h.app.scroll.is_scrolled());
    let settled = later + Duration::from_secs(2);
    assert_eq!(h.app.reveal_progress(PageId::Skills, 2, 2, settled), 1.0);

    h.go_to(PageId::Home).await;
    assert_eq!(h.app.scroll.page(), PageId::Home);
    assert!(!h.app.scroll.is_scrolled());
}

#[tokio::test]
async fn test_selecting_a_card_scrolls_it_into_view() {
    let mut h = harness();
    h.mount_github();
    let now = Instant::now();
    h.app.skip_loading(now);
    h.app.resize(60, 14, now);

    h.go_to(PageId::Projects).await;
    if !matches!(h.app.projects, LoadState::Loaded(_)) {
        h.pump_until(|msg| matches!(msg, AppMessage::ProjectsLoaded(_)))
            .await;
    }
    assert_eq!(h.app.scroll.offset(), 0);
    assert!(h.app.scroll.max() > 0);

    h.app
        .handle_key(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE), now);
    assert_eq!(h.app.selected_project, 1);
    assert_eq!(h.app.scroll.offset(), h.app.scroll.max());

    // a new filter starts over from the top
    h.app
        .handle_key(KeyEvent::new(KeyCode::Char('f'), KeyModifiers::NONE), now);
    assert_eq!(h.app.scroll.offset(), 0);
}
