//! Metadata fetch error types.

use thiserror::Error;

/// Errors that can occur while fetching repository metadata.
#[derive(Debug, Error)]
pub enum FetchError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// Remote call exceeded the configured timeout.
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    /// Watchlist identifier is not in "owner/repo" form.
    #[error("Invalid repository identifier: {identifier}")]
    InvalidIdentifier { identifier: String },
}
