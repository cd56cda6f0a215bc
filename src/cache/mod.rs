//! Time-expiring cache in front of HTTP GETs.
//!
//! Every API call the app makes goes through one [`RemoteDataCache`]. A URL
//! fetched within the expiry window is answered from memory with the same
//! `Arc` the first call produced. Failures are logged in full here; the
//! caller only gets their [`ErrorCategory`], which it renders as a "data
//! unavailable" placeholder with a matching hint.
//!
//! The check-then-store sequence is not atomic across the fetch, so two
//! concurrent misses for the same URL both hit the network. The set of URLs
//! is small and fixed, so entries are never evicted, only replaced.

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{ErrorCategory, FolioResult, NetworkError};
use crate::traits::{Clock, Headers, HttpClient};

/// Default freshness window (5 minutes).
pub const DEFAULT_EXPIRY: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone)]
struct CacheEntry {
    payload: Arc<Value>,
    fetched_at: DateTime<Utc>,
}

impl CacheEntry {
    fn is_stale(&self, now: DateTime<Utc>, expiry: Duration) -> bool {
        // A timestamp in the future (clock moved back) counts as age zero.
        let age = (now - self.fetched_at).to_std().unwrap_or_default();
        age > expiry
    }
}

/// URL-keyed cache of decoded JSON payloads.
pub struct RemoteDataCache {
    http: Arc<dyn HttpClient>,
    clock: Arc<dyn Clock>,
    expiry: Duration,
    headers: Headers,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl RemoteDataCache {
    pub fn new(http: Arc<dyn HttpClient>, clock: Arc<dyn Clock>, expiry: Duration) -> Self {
        Self {
            http,
            clock,
            expiry,
            headers: Headers::new(),
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Headers sent with every outbound request.
    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    pub fn expiry(&self) -> Duration {
        self.expiry
    }

    /// Number of URLs with a stored payload, fresh or stale.
    pub fn len(&self) -> usize {
        self.lock_entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Payload for `url`, from memory when fresh, otherwise from the network.
    ///
    /// Fails with the error's category on a transport error, non-2xx
    /// status, or a body that is not JSON. Failures are never cached.
    pub async fn get(&self, url: &str) -> Result<Arc<Value>, ErrorCategory> {
        if let Some(payload) = self.fresh_payload(url) {
            tracing::debug!(url, "cache hit");
            return Ok(payload);
        }

        match self.fetch(url).await {
            Ok(payload) => Ok(payload),
            Err(err) => {
                tracing::error!(
                    url,
                    code = err.error_code(),
                    category = %err.category(),
                    "GitHub API error: {}",
                    err
                );
                Err(err.category())
            }
        }
    }

    fn fresh_payload(&self, url: &str) -> Option<Arc<Value>> {
        let now = self.clock.now();
        let entries = self.lock_entries();
        entries
            .get(url)
            .filter(|entry| !entry.is_stale(now, self.expiry))
            .map(|entry| Arc::clone(&entry.payload))
    }

    async fn fetch(&self, url: &str) -> FolioResult<Arc<Value>> {
        // Timestamp is taken before the request, matching when it was issued.
        let requested_at = self.clock.now();

        let response = self
            .http
            .get(url, &self.headers)
            .await
            .map_err(|e| NetworkError::from_http(url, e))?;

        if !response.is_success() {
            return Err(NetworkError::from_status(url, &response).into());
        }

        let value: Value = response
            .json()
            .map_err(|e| NetworkError::InvalidResponse {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let payload = Arc::new(value);
        self.lock_entries().insert(
            url.to_string(),
            CacheEntry {
                payload: Arc::clone(&payload),
                fetched_at: requested_at,
            },
        );
        tracing::debug!(url, "cached fresh payload");
        Ok(payload)
    }

    fn lock_entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, CacheEntry>> {
        // A panic while holding the lock cannot leave a half-written entry,
        // so a poisoned map is still usable.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
