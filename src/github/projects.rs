//! Featured project selection and classification.

use serde_json::{Map, Value};
use std::fmt;

use super::models::Repository;

/// Number of projects shown on the projects page.
pub const FEATURED_LIMIT: usize = 6;

/// Languages considered when classifying a project.
pub const CLASSIFY_LANGUAGES: usize = 3;

const FRONTEND_LANGUAGES: &[&str] = &["JavaScript", "TypeScript", "HTML", "CSS", "Vue", "React"];
const BACKEND_LANGUAGES: &[&str] = &["Python", "Node.js", "Java", "PHP", "Go", "Ruby"];

/// Project bucket used by the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    Frontend,
    Backend,
    Fullstack,
    Other,
}

impl ProjectCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Frontend => "frontend",
            ProjectCategory::Backend => "backend",
            ProjectCategory::Fullstack => "fullstack",
            ProjectCategory::Other => "other",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active filter on the projects page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl ProjectFilter {
    /// Filter buttons in display order.
    pub const ALL: [ProjectFilter; 5] = [
        ProjectFilter::All,
        ProjectFilter::Only(ProjectCategory::Frontend),
        ProjectFilter::Only(ProjectCategory::Backend),
        ProjectFilter::Only(ProjectCategory::Fullstack),
        ProjectFilter::Only(ProjectCategory::Other),
    ];

    pub fn matches(&self, category: ProjectCategory) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Only(wanted) => *wanted == category,
        }
    }

    /// Next filter button, wrapping around.
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectFilter::All => "all",
            ProjectFilter::Only(category) => category.as_str(),
        }
    }
}

/// A featured repository, ready to render as a card.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub homepage: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub languages: Vec<String>,
    pub category: ProjectCategory,
}

impl Project {
    pub fn new(repo: &Repository, languages: Vec<String>) -> Self {
        let category = categorize(&languages);
        Self {
            name: repo.name.clone(),
            description: repo.description.clone(),
            html_url: repo.html_url.clone(),
            homepage: repo.live_demo().map(str::to_string),
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            languages,
            category,
        }
    }
}

/// Public, non-fork repositories ordered by stars (stable), first six.
pub fn select_featured(repos: &[Repository]) -> Vec<&Repository> {
    let mut featured: Vec<&Repository> = repos
        .iter()
        .filter(|repo| !repo.private && !repo.fork)
        .collect();
    featured.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    featured.truncate(FEATURED_LIMIT);
    featured
}

/// Top languages from a `/languages` payload (language → bytes), largest first.
///
/// Equal byte counts keep the payload's order.
pub fn top_languages(payload: &Map<String, Value>) -> Vec<String> {
    let mut entries: Vec<(&String, u64)> = payload
        .iter()
        .map(|(name, bytes)| (name, bytes.as_u64().unwrap_or(0)))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries
        .into_iter()
        .take(CLASSIFY_LANGUAGES)
        .map(|(name, _)| name.clone())
        .collect()
}

/// Classify by membership of `languages` in the frontend and backend sets.
pub fn categorize(languages: &[String]) -> ProjectCategory {
    let has_frontend = languages
        .iter()
        .any(|lang| FRONTEND_LANGUAGES.contains(&lang.as_str()));
    let has_backend = languages
        .iter()
        .any(|lang| BACKEND_LANGUAGES.contains(&lang.as_str()));

    match (has_frontend, has_backend) {
        (true, true) => ProjectCategory::Fullstack,
        (true, false) => ProjectCategory::Frontend,
        (false, true) => ProjectCategory::Backend,
        (false, false) => ProjectCategory::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn langs(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn repo(name: &str, stars: u64) -> Repository {
        Repository {
            name: name.to_string(),
            stargazers_count: stars,
            ..Repository::default()
        }
    }

    #[test]
    fn test_categorize() {
        assert_eq!(categorize(&langs(&["TypeScript", "Go"])), ProjectCategory::Fullstack);
        assert_eq!(categorize(&langs(&["CSS"])), ProjectCategory::Frontend);
        assert_eq!(categorize(&langs(&["Ruby", "Shell"])), ProjectCategory::Backend);
        assert_eq!(categorize(&langs(&["Rust"])), ProjectCategory::Other);
        assert_eq!(categorize(&[]), ProjectCategory::Other);
    }

    #[test]
    fn test_select_featured_filters_sorts_and_limits() {
        let mut forked = repo("forked", 100);
        forked.fork = true;
        let mut hidden = repo("hidden", 90);
        hidden.private = true;

        let mut repos = vec![forked, hidden];
        for (i, stars) in [3, 9, 1, 9, 5, 7, 2].iter().enumerate() {
            repos.push(repo(&format!("r{}", i), *stars));
        }

        let names: Vec<&str> = select_featured(&repos)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        // r1 and r3 tie at 9 stars and keep list order
        assert_eq!(names, vec!["r1", "r3", "r5", "r4", "r0", "r6"]);
    }

    #[test]
    fn test_top_languages_by_bytes() {
        let payload = json!({"Shell": 10, "Rust": 5000, "Go": 800, "HTML": 800});
        let top = top_languages(payload.as_object().unwrap());
        assert_eq!(top, langs(&["Rust", "Go", "HTML"]));
    }

    #[test]
    fn test_filter_cycle_and_match() {
        let mut filter = ProjectFilter::All;
        let mut seen = vec![filter.label()];
        for _ in 0..4 {
            filter = filter.next();
            seen.push(filter.label());
        }
        assert_eq!(seen, vec!["all", "frontend", "backend", "fullstack", "other"]);
        assert_eq!(filter.next(), ProjectFilter::All);

        assert!(ProjectFilter::All.matches(ProjectCategory::Other));
        assert!(!ProjectFilter::Only(ProjectCategory::Backend).matches(ProjectCategory::Fullstack));
    }

    #[test]
    fn test_project_from_repo_drops_empty_homepage() {
        let mut r = repo("site", 2);
        r.homepage = Some("  ".to_string());
        let project = Project::new(&r, langs(&["HTML"]));
        assert_eq!(project.homepage, None);
        assert_eq!(project.category, ProjectCategory::Frontend);
    }
}
