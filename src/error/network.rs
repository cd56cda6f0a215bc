//! Network-related error types.
//!
//! Errors raised while talking to the repository-hosting API. They never
//! reach the render layer directly: the cache logs them and hands the caller
//! only their [`ErrorCategory`](super::ErrorCategory).

use thiserror::Error;

use crate::traits::{HttpError, Response};

/// Network-specific error variants.
#[derive(Debug, Clone, Error)]
pub enum NetworkError {
    /// Connection to the server failed.
    #[error("Connection failed to {url}: {message}")]
    ConnectionFailed { url: String, message: String },

    /// Request timed out.
    #[error("Request to {url} timed out")]
    Timeout { url: String },

    /// HTTP status error (non-2xx response).
    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    /// The unauthenticated hourly quota is spent.
    #[error("Rate limited by {url}")]
    RateLimited { url: String },

    /// Response body was not the JSON we expected.
    #[error("Invalid response from {url}: {message}")]
    InvalidResponse { url: String, message: String },

    /// Generic network error.
    #[error("Network error: {message}")]
    Other { message: String },
}

impl NetworkError {
    /// Build a network error from a transport failure for `url`.
    pub fn from_http(url: &str, err: HttpError) -> Self {
        let url = url.to_string();
        match err {
            HttpError::Connect(message) => NetworkError::ConnectionFailed { url, message },
            HttpError::Timeout(_) => NetworkError::Timeout { url },
            HttpError::Body(message) => NetworkError::InvalidResponse { url, message },
            other @ (HttpError::InvalidUrl(_) | HttpError::Other(_)) => NetworkError::Other {
                message: format!("{} ({})", other, url),
            },
        }
    }

    /// Error for a non-2xx `response` from `url`.
    pub fn from_status(url: &str, response: &Response) -> Self {
        if response.is_rate_limited() {
            NetworkError::RateLimited {
                url: url.to_string(),
            }
        } else {
            NetworkError::HttpStatus {
                url: url.to_string(),
                status: response.status,
            }
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { .. } => {
                "Unable to reach GitHub. Please check your internet connection.".to_string()
            }
            NetworkError::Timeout { .. } => {
                "GitHub took too long to answer. Please try again.".to_string()
            }
            NetworkError::HttpStatus { status, .. } => match *status {
                404 => "The requested GitHub profile was not found.".to_string(),
                500..=599 => "GitHub is experiencing issues. Please try again later.".to_string(),
                _ => format!("GitHub returned an error (HTTP {}).", status),
            },
            NetworkError::RateLimited { .. } => {
                "GitHub rate limit reached. Please wait a while and retry.".to_string()
            }
            NetworkError::InvalidResponse { .. } => {
                "Received an unexpected response from GitHub.".to_string()
            }
            NetworkError::Other { message } => format!("Network error: {}", message),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::RateLimited { .. } => "E_NET_RATE",
            NetworkError::InvalidResponse { .. } => "E_NET_INVALID",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_from_response() {
        let response = Response::new(503, bytes::Bytes::new());
        let err = NetworkError::from_status("https://api.github.com/users/x", &response);
        assert!(matches!(err, NetworkError::HttpStatus { status: 503, .. }));
        assert_eq!(err.error_code(), "E_NET_HTTP");
    }

    #[test]
    fn test_exhausted_quota_is_rate_limited() {
        let response = Response::new(403, bytes::Bytes::new())
            .with_header(crate::traits::RATE_LIMIT_REMAINING, "0");
        let err = NetworkError::from_status("u", &response);
        assert!(matches!(err, NetworkError::RateLimited { .. }));
        assert!(err.user_message().contains("rate limit"));
    }

    #[test]
    fn test_transport_failures_keep_the_url() {
        let err = NetworkError::from_http("https://api.test", HttpError::Connect("refused".into()));
        assert!(err.to_string().contains("https://api.test"));
        let err = NetworkError::from_http("https://api.test", HttpError::InvalidUrl("x".into()));
        assert!(err.to_string().contains("https://api.test"));
    }

    #[test]
    fn test_not_found_message() {
        let err = NetworkError::HttpStatus {
            url: "u".to_string(),
            status: 404,
        };
        assert!(err.user_message().contains("not found"));
    }

    #[test]
    fn test_display_includes_url() {
        let err = NetworkError::Timeout {
            url: "https://api.github.com".to_string(),
        };
        assert_eq!(err.to_string(), "Request to https://api.github.com timed out");
    }
}
