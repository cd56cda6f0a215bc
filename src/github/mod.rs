//! GitHub profile statistics and featured projects.
//!
//! [`GitHubApi`] fetches through the shared [`RemoteDataCache`](crate::cache::RemoteDataCache),
//! [`stats`] and [`projects`] turn raw records into view data, and [`render`]
//! maps a [`LoadState`] to display lines.

pub mod api;
pub mod models;
pub mod projects;
pub mod render;
pub mod stats;

pub use api::{request_headers, GitHubApi, RepositoryStats, DEFAULT_API_BASE, GITHUB_MEDIA_TYPE};
pub use models::{GitHubUser, Repository};
pub use projects::{Project, ProjectCategory, ProjectFilter};
pub use stats::{GitHubStats, LanguageCount};

use crate::error::ErrorCategory;

/// Progress of a fetch-and-aggregate operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState<T> {
    /// Never requested.
    #[default]
    Idle,
    Loading,
    Loaded(T),
    /// Data unavailable. The category picks the hint shown in the placeholder
    /// and whether a retry is offered.
    Failed(ErrorCategory),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// Category of the failure, if the load failed.
    pub fn failure(&self) -> Option<ErrorCategory> {
        match self {
            LoadState::Failed(category) => Some(*category),
            _ => None,
        }
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}
