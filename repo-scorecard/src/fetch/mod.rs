//! Repository metadata fetching.
//!
//! One fetch issues two GitHub calls per repository (attributes, latest
//! commit) and merges them into a single [`RepoRecord`] via an explicit
//! field mapping. The record store acts as a permanent cache: identifiers
//! already present are served without network access unless a refresh is
//! forced.

mod api;
mod error;

pub use api::{CommitDetail, CommitEntry, CommitSignature, LicenseInfo, RepoAttributes};
pub use error::FetchError;

use crate::config::TrackedRepository;
use crate::store::{RecordStore, RepoRecord};
use crate::summary::FetchOutcome;
use octocrab::Octocrab;
use std::future::Future;
use std::time::Duration;
use tracing::{info, info_span, warn, Instrument};

/// Fetches metadata for one watchlist entry, consulting the store first.
///
/// When `refresh` is false and the store already holds the identifier, the
/// cached record is returned without touching the network. Otherwise both
/// remote calls are made (each bounded by `call_timeout`), merged into a
/// record and upserted into the store.
///
/// Never returns an error: any remote failure produces
/// [`FetchOutcome::Failed`] carrying a sentinel record, so callers always
/// receive a well-formed row and one repository's failure cannot block the
/// others.
pub async fn fetch_repository(
    octocrab: &Octocrab,
    entry: &TrackedRepository,
    store: &mut RecordStore,
    refresh: bool,
    call_timeout: Duration,
) -> FetchOutcome {
    let identifier = entry.slug();
    let span = info_span!("fetch", repo = %identifier);

    async {
        if !refresh {
            if let Some(record) = store.get(&identifier) {
                info!("Using cached record");
                return FetchOutcome::Cached {
                    record: record.clone(),
                };
            }
        }

        match fetch_remote(octocrab, entry, &identifier, call_timeout).await {
            Ok(record) => {
                // A store write failure must not discard the fetched data;
                // the row still renders from memory.
                if let Err(e) = store.upsert(record.clone()) {
                    warn!(error = %e, "Failed to persist record");
                }
                info!(
                    stars = record.stargazers_count,
                    "Fetched repository metadata"
                );
                FetchOutcome::Fetched { record }
            }
            Err(e) => {
                warn!(error = %e, "Fetch failed, substituting sentinel record");
                FetchOutcome::Failed {
                    record: RepoRecord::sentinel(
                        &identifier,
                        entry.display_name(),
                        entry.dependencies.clone(),
                    ),
                    reason: e.to_string(),
                }
            }
        }
    }
    .instrument(span)
    .await
}

/// Performs both remote calls and merges the responses.
async fn fetch_remote(
    octocrab: &Octocrab,
    entry: &TrackedRepository,
    identifier: &str,
    call_timeout: Duration,
) -> Result<RepoRecord, FetchError> {
    let (owner, repo) = entry
        .owner_and_repo()
        .ok_or_else(|| FetchError::InvalidIdentifier {
            identifier: entry.identifier.clone(),
        })?;

    let attributes = with_timeout(
        call_timeout,
        api::get_repo_attributes(octocrab, &owner, &repo),
    )
    .await?;

    // A repository with no commits (or a failing commits endpoint) is still
    // a valid record; only the recency column goes missing.
    let last_commit = match with_timeout(
        call_timeout,
        api::get_latest_commit(octocrab, &owner, &repo),
    )
    .await
    {
        Ok(commit) => commit,
        Err(e) => {
            warn!(error = %e, "Could not fetch latest commit");
            None
        }
    };

    Ok(merge_record(entry, identifier, attributes, last_commit))
}

/// Bounds a remote call with the configured timeout.
async fn with_timeout<T, F>(limit: Duration, fut: F) -> Result<T, FetchError>
where
    F: Future<Output = Result<T, octocrab::Error>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(FetchError::Timeout {
            timeout_secs: limit.as_secs(),
        }),
    }
}

/// Merges the two response shapes into one record.
///
/// Field-by-field mapping: a missing license stays `None` (rendered as
/// "Unknown"), the recency timestamp prefers the committer date and falls
/// back to the author date.
fn merge_record(
    entry: &TrackedRepository,
    identifier: &str,
    attributes: RepoAttributes,
    last_commit: Option<CommitEntry>,
) -> RepoRecord {
    let last_commit_date = last_commit.and_then(|c| {
        c.commit
            .committer
            .and_then(|s| s.date)
            .or_else(|| c.commit.author.and_then(|s| s.date))
    });

    RepoRecord {
        identifier: identifier.to_string(),
        display_name: Some(entry.display_name()),
        full_name: attributes.full_name,
        homepage_url: attributes.homepage,
        html_url: attributes.html_url,
        description: attributes.description,
        created_at: attributes.created_at,
        updated_at: attributes.updated_at,
        issues_count: attributes.open_issues_count,
        stargazers_count: attributes.stargazers_count,
        watchers_count: attributes.watchers_count,
        forks_count: attributes.forks_count,
        language: attributes.language,
        license: attributes.license.and_then(|l| l.spdx_id.or(l.name)),
        last_commit_date,
        dependencies: entry.dependencies.clone(),
    }
}
