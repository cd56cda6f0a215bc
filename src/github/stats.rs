//! Profile statistics aggregated from the user record and repository list.

use chrono::Datelike;

use super::models::{GitHubUser, Repository};

/// How many languages the stats panel lists.
pub const TOP_LANGUAGES: usize = 5;

/// A language and how many public repositories use it as primary language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCount {
    pub name: String,
    pub count: usize,
}

/// Summary shown on the about page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubStats {
    pub public_repos: usize,
    pub total_stars: u64,
    pub total_forks: u64,
    pub followers: u64,
    pub following: u64,
    pub top_languages: Vec<LanguageCount>,
    pub join_year: i32,
}

/// Aggregate `repos` (private ones excluded) and `user` into the stats summary.
pub fn calculate_stats(user: &GitHubUser, repos: &[Repository]) -> GitHubStats {
    let public: Vec<&Repository> = repos.iter().filter(|repo| !repo.private).collect();

    GitHubStats {
        public_repos: public.len(),
        total_stars: public.iter().map(|repo| repo.stargazers_count).sum(),
        total_forks: public.iter().map(|repo| repo.forks_count).sum(),
        followers: user.followers,
        following: user.following,
        top_languages: rank_languages(
            public.iter().filter_map(|repo| repo.language.as_deref()),
            TOP_LANGUAGES,
        ),
        join_year: user.created_at.year(),
    }
}

/// Count occurrences and keep the `limit` most frequent, descending.
///
/// Ties keep the order in which the languages were first seen.
pub fn rank_languages<'a>(
    languages: impl IntoIterator<Item = &'a str>,
    limit: usize,
) -> Vec<LanguageCount> {
    let mut counts: Vec<LanguageCount> = Vec::new();
    for language in languages {
        match counts.iter_mut().find(|entry| entry.name == language) {
            Some(entry) => entry.count += 1,
            None => counts.push(LanguageCount {
                name: language.to_string(),
                count: 1,
            }),
        }
    }

    // sort_by is stable
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn user() -> GitHubUser {
        GitHubUser {
            login: "octo".to_string(),
            followers: 42,
            following: 7,
            created_at: Utc.with_ymd_and_hms(2018, 6, 1, 0, 0, 0).unwrap(),
        }
    }

    fn repo(stars: u64, private: bool) -> Repository {
        Repository {
            name: format!("repo-{}", stars),
            stargazers_count: stars,
            private,
            ..Repository::default()
        }
    }

    #[test]
    fn test_private_repos_are_excluded() {
        let repos = vec![repo(5, false), repo(3, true), repo(2, false)];
        let stats = calculate_stats(&user(), &repos);

        assert_eq!(stats.total_stars, 7);
        assert_eq!(stats.public_repos, 2);
    }

    #[test]
    fn test_user_fields_pass_through() {
        let stats = calculate_stats(&user(), &[]);
        assert_eq!(stats.followers, 42);
        assert_eq!(stats.following, 7);
        assert_eq!(stats.join_year, 2018);
        assert_eq!(stats.public_repos, 0);
        assert!(stats.top_languages.is_empty());
    }

    #[test]
    fn test_forks_summed_over_public_repos() {
        let mut a = repo(1, false);
        a.forks_count = 4;
        let mut b = repo(1, true);
        b.forks_count = 100;
        let stats = calculate_stats(&user(), &[a, b]);
        assert_eq!(stats.total_forks, 4);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let langs = ["Go", "Rust", "Go", "JS", "Rust", "Rust", "Go"];
        let ranked = rank_languages(langs, TOP_LANGUAGES);

        let names: Vec<&str> = ranked.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Go", "Rust", "JS"]);
        assert_eq!(ranked[0].count, 3);
        assert_eq!(ranked[1].count, 3);
        assert_eq!(ranked[2].count, 1);
    }

    #[test]
    fn test_top_languages_truncated_to_five() {
        let langs = ["A", "B", "C", "D", "E", "F", "F"];
        let ranked = rank_languages(langs, TOP_LANGUAGES);
        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked[0].name, "F");
        assert_eq!(ranked[4].name, "D");
    }

    #[test]
    fn test_language_ignored_for_private_and_missing() {
        let mut a = repo(0, false);
        a.language = Some("Rust".to_string());
        let mut b = repo(0, true);
        b.language = Some("Go".to_string());
        let c = repo(0, false);

        let stats = calculate_stats(&user(), &[a, b, c]);
        assert_eq!(
            stats.top_languages,
            vec![LanguageCount {
                name: "Rust".to_string(),
                count: 1
            }]
        );
    }
}
