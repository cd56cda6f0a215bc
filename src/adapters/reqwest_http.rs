//! reqwest-backed [`HttpClient`].

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// GitHub rejects requests without a user agent.
const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Client sending the folio user agent. Per-request headers come from the caller.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("falling back to a default HTTP client: {}", e);
                reqwest::Client::new()
            });
        Self { client }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        let message = err.to_string();
        if err.is_timeout() {
            HttpError::Timeout(message)
        } else if err.is_connect() {
            HttpError::Connect(message)
        } else if err.is_builder() {
            HttpError::InvalidUrl(message)
        } else if err.is_body() || err.is_decode() {
            HttpError::Body(message)
        } else {
            HttpError::Other(message)
        }
    }
}

fn lowercase_headers(headers: &HeaderMap) -> Headers {
    headers
        .iter()
        .filter_map(|(name, value)| {
            let value = value.to_str().ok()?;
            Some((name.as_str().to_ascii_lowercase(), value.to_string()))
        })
        .collect()
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        let request = headers
            .iter()
            .fold(self.client.get(url), |request, (name, value)| {
                request.header(name, value)
            });

        let response = request.send().await?;
        let status = response.status().as_u16();
        let headers = lowercase_headers(response.headers());
        let body = response.bytes().await?;
        tracing::trace!(url, status, bytes = body.len(), "GET");

        Ok(Response {
            status,
            headers,
            body,
        })
    }
}
