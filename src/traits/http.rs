//! Read-only HTTP seam for the GitHub client.
//!
//! The portfolio only ever issues GETs against the REST API, so the trait has
//! a single method. Production wraps reqwest; tests plug in a mock that
//! records URLs.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use thiserror::Error;

/// Request or response headers. Names are stored lowercase.
pub type Headers = HashMap<String, String>;

/// GitHub's remaining-requests header.
pub const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";

/// Whatever the server answered, success or not.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub headers: Headers,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: Bytes) -> Self {
        Self {
            status,
            headers: Headers::new(),
            body,
        }
    }

    /// A 200 carrying `value` serialized as JSON.
    pub fn json_body(value: &serde_json::Value) -> Self {
        Self::new(200, Bytes::from(value.to_string()))
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// True for a 403/429 sent because the API quota is used up.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self.status, 403 | 429)
            && self
                .header(RATE_LIMIT_REMAINING)
                .and_then(|remaining| remaining.trim().parse::<u64>().ok())
                == Some(0)
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport failures: the request never produced a response.
#[derive(Debug, Clone, Error)]
pub enum HttpError {
    #[error("could not connect: {0}")]
    Connect(String),

    #[error("timed out: {0}")]
    Timeout(String),

    #[error("bad request url: {0}")]
    InvalidUrl(String),

    /// The response started but its body could not be read.
    #[error("body read failed: {0}")]
    Body(String),

    #[error("{0}")]
    Other(String),
}

/// Issues GET requests.
///
/// Implementations return `Ok` for any response the server produced,
/// including non-2xx statuses; callers inspect [`Response::is_success`].
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;
}
