//! GitHub loading over a real HTTP stack against a local mock server.

use std::sync::Arc;

use folio::adapters::{ReqwestHttpClient, SystemClock};
use folio::cache::{RemoteDataCache, DEFAULT_EXPIRY};
use folio::error::ErrorCategory;
use folio::github::{request_headers, GitHubApi, LoadState, ProjectCategory, GITHUB_MEDIA_TYPE};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> GitHubApi {
    let cache = Arc::new(
        RemoteDataCache::new(
            Arc::new(ReqwestHttpClient::new()),
            Arc::new(SystemClock),
            DEFAULT_EXPIRY,
        )
        .with_headers(request_headers()),
    );
    GitHubApi::new(cache, server.uri(), "octo")
}

fn repos_payload() -> serde_json::Value {
    json!([
        {
            "name": "engine",
            "full_name": "octo/engine",
            "description": "A storage engine",
            "html_url": "https://github.com/octo/engine",
            "homepage": "",
            "stargazers_count": 5,
            "forks_count": 1,
            "language": "Rust",
            "private": false,
            "fork": false
        },
        {
            "name": "gateway",
            "full_name": "octo/gateway",
            "description": null,
            "html_url": "https://github.com/octo/gateway",
            "homepage": "https://gateway.example.com",
            "stargazers_count": 2,
            "forks_count": 0,
            "language": "Go",
            "private": false,
            "fork": false
        },
        {
            "name": "proxy",
            "full_name": "octo/proxy",
            "html_url": "https://github.com/octo/proxy",
            "stargazers_count": 0,
            "forks_count": 3,
            "language": "Go",
            "private": false,
            "fork": true
        }
    ])
}

async fn mount_profile(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/users/octo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "login": "octo",
            "followers": 42,
            "following": 7,
            "created_at": "2016-03-14T09:00:00Z"
        })))
        .mount(server)
        .await;
}

async fn mount_repos(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/users/octo/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(repos_payload()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_stats_aggregate_profile_and_repositories() {
    let server = MockServer::start().await;
    mount_profile(&server).await;
    mount_repos(&server).await;

    let stats = match api_for(&server).load_stats().await {
        LoadState::Loaded(stats) => stats,
        other => panic!("expected loaded stats, got {:?}", other),
    };

    assert_eq!(stats.public_repos, 3);
    assert_eq!(stats.total_stars, 7);
    assert_eq!(stats.total_forks, 4);
    assert_eq!(stats.followers, 42);
    assert_eq!(stats.following, 7);
    assert_eq!(stats.join_year, 2016);

    let ranked: Vec<(&str, usize)> = stats
        .top_languages
        .iter()
        .map(|lang| (lang.name.as_str(), lang.count))
        .collect();
    assert_eq!(ranked, vec![("Go", 2), ("Rust", 1)]);
}

#[tokio::test]
async fn test_stats_fail_when_profile_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octo"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_repos(&server).await;

    let state = api_for(&server).load_stats().await;
    assert_eq!(state, LoadState::Failed(ErrorCategory::Server));
}

#[tokio::test]
async fn test_stats_fail_on_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octo"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"))
        .mount(&server)
        .await;
    mount_repos(&server).await;

    assert_eq!(
        api_for(&server).load_stats().await,
        LoadState::Failed(ErrorCategory::Network)
    );
}

#[tokio::test]
async fn test_repeat_loads_hit_the_network_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "login": "octo",
            "followers": 1,
            "following": 0,
            "created_at": "2020-01-01T00:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/octo/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(repos_payload()))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    assert!(api.load_stats().await.loaded().is_some());
    assert!(api.load_stats().await.loaded().is_some());
    // `expect(1)` is verified when the server drops
}

#[tokio::test]
async fn test_projects_skip_forks_and_classify_by_language() {
    let server = MockServer::start().await;
    mount_repos(&server).await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/engine/languages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Rust": 90000,
            "TypeScript": 12000,
            "Shell": 300
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/gateway/languages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Go": 5000 })))
        .mount(&server)
        .await;

    let projects = match api_for(&server).load_projects().await {
        LoadState::Loaded(projects) => projects,
        other => panic!("expected loaded projects, got {:?}", other),
    };

    let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["engine", "gateway"]);

    let engine = &projects[0];
    assert_eq!(engine.languages, vec!["Rust", "TypeScript", "Shell"]);
    assert_eq!(engine.category, ProjectCategory::Frontend);
    assert_eq!(engine.homepage, None);

    let gateway = &projects[1];
    assert_eq!(gateway.category, ProjectCategory::Backend);
    assert_eq!(
        gateway.homepage.as_deref(),
        Some("https://gateway.example.com")
    );
}

#[tokio::test]
async fn test_projects_fail_when_any_language_lookup_fails() {
    let server = MockServer::start().await;
    mount_repos(&server).await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/engine/languages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Rust": 1 })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/gateway/languages"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let state = api_for(&server).load_projects().await;
    assert_eq!(state, LoadState::Failed(ErrorCategory::NotFound));
}

#[tokio::test]
async fn test_exhausted_quota_is_reported_as_rate_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octo/repos"))
        .respond_with(
            ResponseTemplate::new(403)
                .insert_header("X-RateLimit-Remaining", "0")
                .set_body_json(json!({ "message": "API rate limit exceeded" })),
        )
        .mount(&server)
        .await;

    let state = api_for(&server).load_projects().await;
    assert_eq!(state, LoadState::Failed(ErrorCategory::RateLimit));
}

#[tokio::test]
async fn test_requests_carry_the_github_media_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octo"))
        .and(header("accept", GITHUB_MEDIA_TYPE))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "login": "octo",
            "followers": 0,
            "following": 0,
            "created_at": "2021-01-01T00:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = api_for(&server).user().await.expect("profile");
    assert_eq!(user.login, "octo");
}
