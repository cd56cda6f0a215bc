//! Records returned by the GitHub REST API.
//!
//! Only the fields the portfolio consumes are decoded; everything else in
//! the payload is ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `GET /users/{name}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubUser {
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    pub created_at: DateTime<Utc>,
}

/// One entry of `GET /users/{name}/repos`, also `GET /repos/{owner}/{repo}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub fork: bool,
}

impl Repository {
    /// Homepage link, treating the API's empty string as absent.
    pub fn live_demo(&self) -> Option<&str> {
        self.homepage
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// The most recent commit, from `GET /repos/{owner}/{repo}/commits?per_page=1`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommitSummary {
    pub sha: String,
    pub commit: CommitDetail,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommitDetail {
    #[serde(default)]
    pub message: String,
}
