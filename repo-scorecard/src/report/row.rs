//! Report row derivation.
//!
//! All cell values are derived up front so the templates stay dumb: the
//! row decides between real data, the "Unknown" default and the "Error"
//! fetch-failure marker.

use crate::age::age_in_years;
use crate::store::RepoRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Cell shown when data is missing because the fetch failed.
const ERROR_CELL: &str = "Error";

/// Cell shown when a value is genuinely absent (no license, no commits).
const UNKNOWN_CELL: &str = "Unknown";

/// One rendered table row.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    /// Display name.
    pub name: String,

    /// Link target for the name cell.
    pub repo_url: String,

    /// `owner/repo`, used to parameterize badge image URLs.
    pub full_name: String,

    /// Free-text dependencies tag.
    pub dependencies: String,

    /// License cell; "Unknown" when absent.
    pub license: String,

    /// Whole years since repository creation; "Error" when unknown.
    pub age_years: String,

    /// Stargazer count; "Error" when the fetch failed.
    pub stars: String,

    /// Open issue count; "Error" when the fetch failed.
    pub issues: String,

    /// Date of the most recent commit; "Unknown" when there is none.
    pub last_commit: String,
}

impl ReportRow {
    /// Derives the displayable cells for one record at the given `now`.
    #[must_use]
    pub fn from_record(record: &RepoRecord, now: DateTime<Utc>) -> Self {
        Self {
            name: record
                .display_name
                .clone()
                .unwrap_or_else(|| record.identifier.clone()),
            repo_url: record
                .html_url
                .clone()
                .unwrap_or_else(|| format!("https://github.com/{}", record.identifier)),
            full_name: record
                .full_name
                .clone()
                .unwrap_or_else(|| record.identifier.clone()),
            dependencies: record.dependencies.clone(),
            license: record
                .license
                .clone()
                .unwrap_or_else(|| UNKNOWN_CELL.to_string()),
            age_years: record.created_at.map_or_else(
                || ERROR_CELL.to_string(),
                |t| age_in_years(t, now).to_string(),
            ),
            stars: count_cell(record.stargazers_count),
            issues: count_cell(record.issues_count),
            last_commit: record.last_commit_date.map_or_else(
                || UNKNOWN_CELL.to_string(),
                |t| t.format("%Y-%m-%d").to_string(),
            ),
        }
    }
}

fn count_cell(count: Option<u64>) -> String {
    count.map_or_else(|| ERROR_CELL.to_string(), |c| c.to_string())
}
