//! Startup wiring: configuration and construction of the production services.

pub mod config;

pub use config::FolioConfig;

use std::sync::Arc;

use crate::adapters::{ReqwestHttpClient, SystemClock, SystemLauncher, TokioDelay};
use crate::cache::RemoteDataCache;
use crate::github::{request_headers, GitHubApi};
use crate::traits::{Delay, UriLauncher};

/// Production services handed to the application.
#[derive(Clone)]
pub struct Services {
    pub github: Arc<GitHubApi>,
    pub delay: Arc<dyn Delay>,
    pub launcher: Arc<dyn UriLauncher>,
}

/// Build the HTTP-backed GitHub client and the system adapters.
pub fn build_services(config: &FolioConfig) -> Services {
    let http = Arc::new(ReqwestHttpClient::new());
    let cache = Arc::new(
        RemoteDataCache::new(http, Arc::new(SystemClock), config.cache_expiry)
            .with_headers(request_headers()),
    );
    let github = Arc::new(GitHubApi::new(
        cache,
        &config.api_base,
        &config.github_user,
    ));
    tracing::info!(user = %config.github_user, api = %config.api_base, "Services ready");

    Services {
        github,
        delay: Arc::new(TokioDelay::new()),
        launcher: Arc::new(SystemLauncher),
    }
}
