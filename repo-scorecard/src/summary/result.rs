//! Per-repository fetch outcomes.

use crate::store::RepoRecord;

/// Result of processing a single watchlist entry.
///
/// Every variant carries a well-formed record, so report generation never
/// has to infer failure from missing rows.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// Fresh metadata was fetched from the API and stored.
    Fetched {
        /// The merged record.
        record: RepoRecord,
    },

    /// The store already held the identifier; no network access was made.
    Cached {
        /// The stored record.
        record: RepoRecord,
    },

    /// The fetch failed; the record is a sentinel so the report row still
    /// renders.
    Failed {
        /// Sentinel record with error markers.
        record: RepoRecord,
        /// Why the fetch failed.
        reason: String,
    },
}

impl FetchOutcome {
    /// The record carried by this outcome.
    #[must_use]
    pub fn record(&self) -> &RepoRecord {
        match self {
            Self::Fetched { record } | Self::Cached { record } | Self::Failed { record, .. } => {
                record
            }
        }
    }

    /// Consumes the outcome, returning its record.
    #[must_use]
    pub fn into_record(self) -> RepoRecord {
        match self {
            Self::Fetched { record } | Self::Cached { record } | Self::Failed { record, .. } => {
                record
            }
        }
    }

    /// True if this outcome represents a failed fetch.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
