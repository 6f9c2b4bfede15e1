//! Crate-owned GitHub response shapes.
//!
//! Only the fields the record needs are deserialized; everything else in
//! the responses is ignored. Every field is optional so a sparse response
//! degrades to missing data instead of a deserialization failure.

use chrono::{DateTime, Utc};
use octocrab::Octocrab;
use serde::Deserialize;

/// Subset of the `GET /repos/{owner}/{repo}` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepoAttributes {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub open_issues_count: Option<u64>,
    #[serde(default)]
    pub stargazers_count: Option<u64>,
    #[serde(default)]
    pub watchers_count: Option<u64>,
    #[serde(default)]
    pub forks_count: Option<u64>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub license: Option<LicenseInfo>,
}

/// License object embedded in repository attributes.
#[derive(Debug, Clone, Deserialize)]
pub struct LicenseInfo {
    #[serde(default)]
    pub spdx_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// One entry of the `GET /repos/{owner}/{repo}/commits` response.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitEntry {
    pub commit: CommitDetail,
}

/// Commit body with its signatures.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitDetail {
    #[serde(default)]
    pub author: Option<CommitSignature>,
    #[serde(default)]
    pub committer: Option<CommitSignature>,
}

/// Author/committer signature carrying the commit date.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitSignature {
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

/// Fetches the repository attributes for `owner/repo`.
pub(crate) async fn get_repo_attributes(
    octocrab: &Octocrab,
    owner: &str,
    repo: &str,
) -> Result<RepoAttributes, octocrab::Error> {
    octocrab
        .get(format!("/repos/{owner}/{repo}"), None::<&()>)
        .await
}

/// Fetches the most recent commit for `owner/repo`, if any.
pub(crate) async fn get_latest_commit(
    octocrab: &Octocrab,
    owner: &str,
    repo: &str,
) -> Result<Option<CommitEntry>, octocrab::Error> {
    let commits: Vec<CommitEntry> = octocrab
        .get(
            format!("/repos/{owner}/{repo}/commits?per_page=1"),
            None::<&()>,
        )
        .await?;
    Ok(commits.into_iter().next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn attributes_deserialize_from_sparse_response() {
        let attributes: RepoAttributes = serde_json::from_value(json!({
            "name": "gridjs",
            "stargazers_count": 4500,
            "license": null
        }))
        .unwrap();

        assert_eq!(attributes.name.as_deref(), Some("gridjs"));
        assert_eq!(attributes.stargazers_count, Some(4500));
        assert!(attributes.license.is_none());
        assert!(attributes.created_at.is_none());
    }

    #[test]
    fn commit_entry_deserializes_committer_date() {
        let entry: CommitEntry = serde_json::from_value(json!({
            "commit": {
                "author": { "name": "a", "date": "2024-05-01T10:00:00Z" },
                "committer": { "name": "c", "date": "2024-05-02T10:00:00Z" }
            }
        }))
        .unwrap();

        let date = entry.commit.committer.unwrap().date.unwrap();
        assert_eq!(date, "2024-05-02T10:00:00Z".parse::<DateTime<Utc>>().unwrap());
    }
}
