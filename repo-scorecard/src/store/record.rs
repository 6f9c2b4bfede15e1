//! Persisted repository metadata record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A snapshot of repository health metadata, keyed by `identifier`.
///
/// All remote-sourced fields are optional: a field is `None` when the API
/// did not supply it or the fetch failed. Ages are never stored; they are
/// derived at render time from `created_at` and `last_commit_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoRecord {
    /// Unique `owner/repo` identifier; primary key of the store.
    pub identifier: String,

    /// Display name from the watchlist entry.
    pub display_name: Option<String>,

    /// Full name as reported by the API.
    pub full_name: Option<String>,

    /// Project homepage, if set.
    pub homepage_url: Option<String>,

    /// GitHub page URL.
    pub html_url: Option<String>,

    /// Repository description.
    pub description: Option<String>,

    /// Repository creation timestamp; source of the age column.
    pub created_at: Option<DateTime<Utc>>,

    /// Last repository update timestamp.
    pub updated_at: Option<DateTime<Utc>>,

    /// Open issue count.
    pub issues_count: Option<u64>,

    /// Stargazer count.
    pub stargazers_count: Option<u64>,

    /// Watcher count.
    pub watchers_count: Option<u64>,

    /// Fork count.
    pub forks_count: Option<u64>,

    /// Primary language.
    pub language: Option<String>,

    /// License identifier (SPDX id). `None` renders as "Unknown"; a failed
    /// fetch stores the literal "Error".
    pub license: Option<String>,

    /// Committer date of the most recent commit; source of the recency
    /// column. `None` when the repository has no commits.
    pub last_commit_date: Option<DateTime<Utc>>,

    /// Free-text dependencies tag copied from the watchlist entry.
    #[serde(default)]
    pub dependencies: String,
}

impl RepoRecord {
    /// Builds the sentinel substituted when a fetch fails.
    ///
    /// Numeric fields stay `None` and the license carries the literal
    /// "Error" marker, so report rows distinguish "fetch failed" from
    /// "fetched and absent".
    #[must_use]
    pub fn sentinel(identifier: &str, display_name: String, dependencies: String) -> Self {
        Self {
            identifier: identifier.to_string(),
            display_name: Some(display_name),
            full_name: None,
            homepage_url: None,
            html_url: None,
            description: None,
            created_at: None,
            updated_at: None,
            issues_count: None,
            stargazers_count: None,
            watchers_count: None,
            forks_count: None,
            language: None,
            license: Some("Error".to_string()),
            last_commit_date: None,
            dependencies,
        }
    }
}
