//! Canned GitHub responses for tests.

use async_trait::async_trait;
use bytes::Bytes;
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response, RATE_LIMIT_REMAINING};

/// What the mock answers for a route.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Reply(Response),
    Fail(HttpError),
}

impl MockResponse {
    pub fn json(value: serde_json::Value) -> Self {
        MockResponse::Reply(Response::json_body(&value))
    }

    /// Empty body with `status`.
    pub fn status(status: u16) -> Self {
        MockResponse::Reply(Response::new(status, Bytes::new()))
    }

    /// GitHub's answer once the hourly quota is spent.
    pub fn rate_limited() -> Self {
        MockResponse::Reply(
            Response::new(403, Bytes::from(r#"{"message":"API rate limit exceeded"}"#))
                .with_header(RATE_LIMIT_REMAINING, "0"),
        )
    }
}

#[derive(Debug, Default)]
struct Routes {
    /// (url or url prefix, answer), most recently added last
    table: Vec<(String, MockResponse)>,
    fallback: Option<MockResponse>,
    log: Vec<String>,
}

impl Routes {
    /// Exact match, else the longest matching prefix, else the fallback.
    fn answer(&self, url: &str) -> Option<MockResponse> {
        if let Some((_, response)) = self.table.iter().rev().find(|(route, _)| route == url) {
            return Some(response.clone());
        }
        self.table
            .iter()
            .rev()
            .filter(|(route, _)| url.starts_with(route.as_str()))
            .max_by_key(|(route, _)| route.len())
            .map(|(_, response)| response.clone())
            .or_else(|| self.fallback.clone())
    }
}

/// [`HttpClient`] serving answers registered per URL.
///
/// Clones share routes and the request log, so a test keeps one handle while
/// the cache owns another.
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    routes: Arc<Mutex<Routes>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `route` (a full URL or a prefix of one) with `response`.
    /// Registering the same route again replaces its answer.
    pub fn respond(&self, route: &str, response: MockResponse) {
        let mut routes = self.routes.lock().unwrap();
        routes.table.retain(|(existing, _)| existing != route);
        routes.table.push((route.to_string(), response));
    }

    /// Answer for URLs no route matches.
    pub fn fallback(&self, response: MockResponse) {
        self.routes.lock().unwrap().fallback = Some(response);
    }

    /// Every requested URL, in order.
    pub fn requests(&self) -> Vec<String> {
        self.routes.lock().unwrap().log.clone()
    }

    /// How many times exactly `url` was requested.
    pub fn hits(&self, url: &str) -> usize {
        self.routes
            .lock()
            .unwrap()
            .log
            .iter()
            .filter(|logged| logged.as_str() == url)
            .count()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, _headers: &Headers) -> Result<Response, HttpError> {
        let answer = {
            let mut routes = self.routes.lock().unwrap();
            routes.log.push(url.to_string());
            routes.answer(url)
        };
        // a real request suspends at least once
        tokio::task::yield_now().await;

        match answer {
            Some(MockResponse::Reply(response)) => Ok(response),
            Some(MockResponse::Fail(err)) => Err(err),
            None => Err(HttpError::Other(format!("no route for {}", url))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_exact_route_beats_prefix() {
        let client = MockHttpClient::new();
        client.respond("https://api/users", MockResponse::status(500));
        client.respond(
            "https://api/users/x",
            MockResponse::json(serde_json::json!({"ok": true})),
        );

        let hit = client.get("https://api/users/x", &Headers::new()).await.unwrap();
        assert_eq!(hit.status, 200);

        let by_prefix = client.get("https://api/users/y", &Headers::new()).await.unwrap();
        assert_eq!(by_prefix.status, 500);
        assert_eq!(client.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_re_registering_replaces_the_answer() {
        let client = MockHttpClient::new();
        client.respond("https://api/a", MockResponse::status(503));
        client.respond("https://api/a", MockResponse::status(204));

        let response = client.get("https://api/a", &Headers::new()).await.unwrap();
        assert_eq!(response.status, 204);
    }

    #[tokio::test]
    async fn test_unrouted_url_fails_and_is_logged() {
        let client = MockHttpClient::new();
        assert!(client.get("https://nowhere", &Headers::new()).await.is_err());
        assert_eq!(client.hits("https://nowhere"), 1);

        client.fallback(MockResponse::status(404));
        let response = client.get("https://nowhere", &Headers::new()).await.unwrap();
        assert_eq!(response.status, 404);
    }

    #[test]
    fn test_rate_limited_answer_is_detected() {
        let MockResponse::Reply(response) = MockResponse::rate_limited() else {
            panic!("expected a reply");
        };
        assert!(response.is_rate_limited());
    }
}
