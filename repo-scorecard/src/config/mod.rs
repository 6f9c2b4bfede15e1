//! Watchlist configuration loading.
//!
//! The watchlist is a TOML file naming the repositories to track, together
//! with a free-text dependencies tag per entry. It is read once at startup
//! and never mutated at runtime.

mod error;
mod watchlist;

pub use error::ConfigError;
pub use watchlist::{TrackedRepository, Watchlist};

use std::path::Path;
use tracing::{debug, info};

/// Loads and validates the watchlist at `path`.
///
/// Expected shape:
/// ```toml
/// [[repositories]]
/// name = "Grid.js"
/// identifier = "grid-js/gridjs"
/// dependencies = "Vanilla JS"
/// ```
///
/// # Errors
///
/// Returns [`ConfigError`] if the file is missing, unreadable, not valid
/// TOML, or contains an entry whose identifier is not `owner/repo`.
pub fn load_watchlist(path: &Path) -> Result<Vec<TrackedRepository>, ConfigError> {
    info!(path = %path.display(), "Loading watchlist");

    if !path.exists() {
        return Err(ConfigError::MissingFile {
            path: path.display().to_string(),
        });
    }

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    let watchlist: Watchlist = toml::from_str(&contents).map_err(|e| ConfigError::TomlError {
        path: path.display().to_string(),
        source: e,
    })?;

    for entry in &watchlist.repositories {
        if entry.owner_and_repo().is_none() {
            return Err(ConfigError::ValidationError {
                path: path.display().to_string(),
                message: format!(
                    "invalid repository identifier '{}' (expected owner/repo)",
                    entry.identifier
                ),
            });
        }
        debug!(repo = %entry.slug(), "Tracking repository");
    }

    info!(count = watchlist.repositories.len(), "Loaded watchlist");
    Ok(watchlist.repositories)
}
