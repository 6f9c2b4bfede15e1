//! Runner error types.

/// Errors that abort a report run.
///
/// Per-repository fetch failures and report write failures are not here;
/// they are isolated into the run summary.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Watchlist loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// Report template errors.
    #[error(transparent)]
    Report(#[from] crate::report::ReportError),
}
