//! Watchlist deserialization.

use serde::Deserialize;

/// Parsed contents of a `watchlist.toml` file.
#[derive(Debug, Clone, Deserialize)]
pub struct Watchlist {
    /// Repositories to track.
    #[serde(default)]
    pub repositories: Vec<TrackedRepository>,
}

/// A single repository entry in the watchlist.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TrackedRepository {
    /// Display name used in report rows. Defaults to the repository half of
    /// the identifier.
    pub name: Option<String>,

    /// Repository identifier in "owner/repo" form. A full
    /// `https://github.com/owner/repo` URL is accepted and normalized.
    pub identifier: String,

    /// Free-text dependencies tag, rendered verbatim in the report.
    #[serde(default)]
    pub dependencies: String,
}

impl TrackedRepository {
    /// Returns the normalized `owner/repo` identifier.
    #[must_use]
    pub fn slug(&self) -> String {
        normalize_identifier(&self.identifier)
    }

    /// Splits the identifier into `(owner, repo)`.
    ///
    /// Returns `None` when the identifier is not in `owner/repo` form.
    #[must_use]
    pub fn owner_and_repo(&self) -> Option<(String, String)> {
        let slug = self.slug();
        let (owner, repo) = slug.split_once('/')?;
        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return None;
        }
        Some((owner.to_string(), repo.to_string()))
    }

    /// Returns the display name, falling back to the repository name and
    /// finally the raw identifier.
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        match self.owner_and_repo() {
            Some((_, repo)) => repo,
            None => self.identifier.clone(),
        }
    }
}

/// Strips a GitHub URL prefix and surrounding slashes from an identifier.
pub(crate) fn normalize_identifier(raw: &str) -> String {
    let trimmed = raw.trim();
    let stripped = trimmed
        .strip_prefix("https://github.com/")
        .or_else(|| trimmed.strip_prefix("http://github.com/"))
        .or_else(|| trimmed.strip_prefix("github.com/"))
        .unwrap_or(trimmed);
    stripped.trim_matches('/').to_string()
}
