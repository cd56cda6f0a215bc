//! GitHub REST client on top of the shared data cache.

use futures::future::join_all;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

use super::models::{CommitSummary, GitHubUser, Repository};
use super::projects::{select_featured, top_languages, Project};
use super::stats::{calculate_stats, GitHubStats};
use super::LoadState;
use crate::cache::RemoteDataCache;
use crate::error::ErrorCategory;
use crate::traits::Headers;

/// Public API root.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Media type GitHub recommends for REST v3 JSON.
pub const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Headers every GitHub request carries.
pub fn request_headers() -> Headers {
    Headers::from([("accept".to_string(), GITHUB_MEDIA_TYPE.to_string())])
}

/// A single repository with its languages and latest commit.
#[derive(Debug, Clone, PartialEq)]
pub struct RepositoryStats {
    pub repo: Repository,
    pub languages: Vec<String>,
    pub latest_commit: Option<CommitSummary>,
}

/// Read-only view of one GitHub account.
pub struct GitHubApi {
    cache: Arc<RemoteDataCache>,
    api_base: String,
    username: String,
}

impl GitHubApi {
    pub fn new(
        cache: Arc<RemoteDataCache>,
        api_base: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        let api_base: String = api_base.into();
        Self {
            cache,
            api_base: api_base.trim_end_matches('/').to_string(),
            username: username.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn user_url(&self) -> String {
        format!("{}/users/{}", self.api_base, self.username)
    }

    pub fn repos_url(&self) -> String {
        format!(
            "{}/users/{}/repos?sort=updated&per_page=100",
            self.api_base, self.username
        )
    }

    /// `full_name` is `owner/repo`.
    pub fn languages_url(&self, full_name: &str) -> String {
        format!("{}/repos/{}/languages", self.api_base, full_name)
    }

    fn repo_url(&self, name: &str) -> String {
        format!("{}/repos/{}/{}", self.api_base, self.username, name)
    }

    fn latest_commit_url(&self, name: &str) -> String {
        format!(
            "{}/repos/{}/{}/commits?per_page=1",
            self.api_base, self.username, name
        )
    }

    pub async fn user(&self) -> Result<GitHubUser, ErrorCategory> {
        self.fetch_as(&self.user_url()).await
    }

    pub async fn repositories(&self) -> Result<Vec<Repository>, ErrorCategory> {
        self.fetch_as(&self.repos_url()).await
    }

    /// Top languages of `full_name`, largest first.
    pub async fn languages(&self, full_name: &str) -> Result<Vec<String>, ErrorCategory> {
        let payload = self.cache.get(&self.languages_url(full_name)).await?;
        match payload.as_object() {
            Some(map) => Ok(top_languages(map)),
            None => {
                tracing::warn!(full_name, "languages payload is not an object");
                Err(ErrorCategory::Network)
            }
        }
    }

    /// Profile and repository list fetched together, then aggregated.
    ///
    /// When both fail the profile's category wins.
    pub async fn load_stats(&self) -> LoadState<GitHubStats> {
        let (user, repos) = tokio::join!(self.user(), self.repositories());
        match (user, repos) {
            (Ok(user), Ok(repos)) => {
                let stats = calculate_stats(&user, &repos);
                tracing::info!(
                    repos = stats.public_repos,
                    stars = stats.total_stars,
                    "loaded GitHub stats"
                );
                LoadState::Loaded(stats)
            }
            (Err(category), _) | (_, Err(category)) => {
                tracing::error!(user = %self.username, %category, "Error loading GitHub stats");
                LoadState::Failed(category)
            }
        }
    }

    /// Featured repositories with their languages.
    ///
    /// Language lookups run concurrently; if any of them fails the whole
    /// load fails.
    pub async fn load_projects(&self) -> LoadState<Vec<Project>> {
        let repos = match self.repositories().await {
            Ok(repos) => repos,
            Err(category) => {
                tracing::error!(user = %self.username, %category, "Error loading projects");
                return LoadState::Failed(category);
            }
        };

        let featured = select_featured(&repos);
        let lookups = featured
            .iter()
            .copied()
            .map(|repo| self.languages(&repo.full_name));
        let languages = join_all(lookups).await;

        let mut projects = Vec::with_capacity(featured.len());
        for (repo, langs) in featured.into_iter().zip(languages) {
            match langs {
                Ok(langs) => projects.push(Project::new(repo, langs)),
                Err(category) => {
                    tracing::error!(repo = %repo.full_name, %category, "Error loading project languages");
                    return LoadState::Failed(category);
                }
            }
        }

        tracing::info!(count = projects.len(), "loaded featured projects");
        LoadState::Loaded(projects)
    }

    /// Repository record, languages, and latest commit fetched together.
    pub async fn repository_stats(&self, name: &str) -> Result<RepositoryStats, ErrorCategory> {
        let full_name = format!("{}/{}", self.username, name);
        let repo_url = self.repo_url(name);
        let latest_commit_url = self.latest_commit_url(name);
        let (repo, languages, commits) = tokio::join!(
            self.fetch_as::<Repository>(&repo_url),
            self.languages(&full_name),
            self.fetch_as::<Vec<CommitSummary>>(&latest_commit_url),
        );

        Ok(RepositoryStats {
            repo: repo?,
            languages: languages?,
            latest_commit: commits?.into_iter().next(),
        })
    }

    async fn fetch_as<T: DeserializeOwned>(&self, url: &str) -> Result<T, ErrorCategory> {
        let payload = self.cache.get(url).await?;
        decode(url, &payload)
    }
}

/// A payload of the wrong shape is treated like a garbled response.
fn decode<T: DeserializeOwned>(url: &str, payload: &Value) -> Result<T, ErrorCategory> {
    T::deserialize(payload).map_err(|e| {
        tracing::error!(url, "unexpected GitHub payload: {}", e);
        ErrorCategory::Network
    })
}
