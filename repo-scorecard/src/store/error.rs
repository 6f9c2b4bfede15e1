//! Record store error types.

use thiserror::Error;

/// Errors that can occur while persisting the record store.
///
/// Read-side problems (missing or corrupt backing file) are not errors; the
/// store recovers to an empty table on open.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to serialize the store contents.
    #[error("Failed to serialize record store: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Failed to write or replace the backing file.
    #[error("Failed to write record store '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
