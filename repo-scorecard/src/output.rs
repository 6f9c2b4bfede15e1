//! Report file writing.
//!
//! Reports are written to a temp file next to the destination and renamed
//! over it, so concurrent readers never observe a partially written
//! document and a failed write leaves any previous report untouched.

use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while writing a report file.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to create, write or replace the destination file.
    #[error("Failed to write output '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Writes `content` to `path`, fully replacing any previous file.
///
/// # Errors
///
/// Returns [`OutputError`] if the temp file cannot be created, written or
/// renamed into place.
pub fn write_report(path: &Path, content: &str) -> Result<(), OutputError> {
    // The temp file must live next to the destination so the rename stays
    // on one filesystem.
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| OutputError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;
    tmp.write_all(content.as_bytes())
        .map_err(|e| OutputError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;
    tmp.persist(path).map_err(|e| OutputError::IoError {
        path: path.display().to_string(),
        source: e.error,
    })?;

    info!(path = %path.display(), bytes = content.len(), "Report written");
    Ok(())
}
