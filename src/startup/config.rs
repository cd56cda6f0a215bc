//! Runtime configuration.
//!
//! Built from defaults, then environment variables, then CLI flags.
//!
//! ```ignore
//! use folio::startup::FolioConfig;
//!
//! let config = FolioConfig::from_env().with_github_user("octocat");
//! ```

use std::time::Duration;

use crate::cache::DEFAULT_EXPIRY;
use crate::cli::RunOptions;
use crate::github::DEFAULT_API_BASE;
use crate::theme::Theme;

pub const DEFAULT_GITHUB_USER: &str = "wealth";
pub const DEFAULT_CONTACT_EMAIL: &str = "hello@example.com";
pub const DEFAULT_LOG_FILTER: &str = "info";

pub const ENV_GITHUB_USER: &str = "FOLIO_GITHUB_USER";
pub const ENV_API_BASE: &str = "FOLIO_API_BASE";
pub const ENV_CONTACT_EMAIL: &str = "FOLIO_CONTACT_EMAIL";
pub const ENV_LOG: &str = "FOLIO_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolioConfig {
    /// Account whose profile and repositories are shown
    pub github_user: String,
    /// GitHub REST API root, overridable for tests and mirrors
    pub api_base: String,
    /// Recipient of contact form messages
    pub contact_email: String,
    pub cache_expiry: Duration,
    /// Session theme from `--theme`; the stored preference applies when unset
    pub theme_override: Option<Theme>,
    /// `EnvFilter` directive for the log file
    pub log_filter: String,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            github_user: DEFAULT_GITHUB_USER.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
            cache_expiry: DEFAULT_EXPIRY,
            theme_override: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl FolioConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_github_user(mut self, user: impl Into<String>) -> Self {
        self.github_user = user.into();
        self
    }

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    pub fn with_contact_email(mut self, email: impl Into<String>) -> Self {
        self.contact_email = email.into();
        self
    }

    pub fn with_cache_expiry(mut self, expiry: Duration) -> Self {
        self.cache_expiry = expiry;
        self
    }

    pub fn with_theme_override(mut self, theme: Option<Theme>) -> Self {
        self.theme_override = theme;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Defaults overlaid with the `FOLIO_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`FolioConfig::from_env`] with a custom variable source. Blank values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(user) = get(ENV_GITHUB_USER) {
            config.github_user = user;
        }
        if let Some(base) = get(ENV_API_BASE) {
            config.api_base = base;
        }
        if let Some(email) = get(ENV_CONTACT_EMAIL) {
            config.contact_email = email;
        }
        if let Some(filter) = get(ENV_LOG) {
            config.log_filter = filter;
        }
        config
    }

    /// Apply command-line overrides on top.
    pub fn with_cli(mut self, options: &RunOptions) -> Self {
        if let Some(user) = &options.user {
            self.github_user = user.clone();
        }
        if options.theme.is_some() {
            self.theme_override = options.theme;
        }
        self
    }
}
