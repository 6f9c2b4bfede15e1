//! Run summary types.

use super::result::FetchOutcome;

/// Summary of a complete report run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of watchlist entries processed.
    pub repositories_tracked: usize,

    /// Entries fetched fresh from the API.
    pub fetched: usize,

    /// Entries served from the record store without network access.
    pub cached: usize,

    /// Entries whose fetch failed (rendered with sentinel markers).
    pub failed: usize,

    /// Report files successfully written.
    pub reports_written: usize,

    /// Report files that failed to write.
    pub report_failures: usize,

    /// Whether cached records were ignored this run.
    pub refresh: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(refresh: bool) -> Self {
        Self {
            refresh,
            ..Default::default()
        }
    }

    /// Updates the summary with a fetch outcome.
    pub fn record_outcome(&mut self, outcome: &FetchOutcome) {
        self.repositories_tracked += 1;
        match outcome {
            FetchOutcome::Fetched { .. } => self.fetched += 1,
            FetchOutcome::Cached { .. } => self.cached += 1,
            FetchOutcome::Failed { .. } => self.failed += 1,
        }
    }

    /// Returns true if any fetch or write failures occurred.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed > 0 || self.report_failures > 0
    }

    /// Returns true if every fetch and write succeeded.
    #[must_use]
    pub fn all_success(&self) -> bool {
        !self.has_failures()
    }
}
