//! Runner configuration.

use std::path::{Path, PathBuf};

const DEFAULT_STORE_PATH: &str = "repo_cache.json";
const DEFAULT_HTML_OUTPUT: &str = "index.html";
const DEFAULT_MARKDOWN_OUTPUT: &str = "README.md";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for a report run.
///
/// Constructed once at startup and passed by reference to every component;
/// there is no ambient/global configuration state.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path to the watchlist file.
    watchlist_path: PathBuf,
    /// GitHub token used for API calls.
    token: String,
    /// Path to the record store document.
    store_path: PathBuf,
    /// Path of the generated HTML report.
    html_output: PathBuf,
    /// Path of the generated Markdown report.
    markdown_output: PathBuf,
    /// Whether to ignore cached records and re-fetch everything.
    refresh: bool,
    /// Per-call timeout for remote requests, in seconds.
    timeout_secs: u64,
}

impl RunnerConfig {
    /// Creates a configuration with default store and output paths.
    pub fn new(watchlist_path: PathBuf, token: String) -> Self {
        Self {
            watchlist_path,
            token,
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            html_output: PathBuf::from(DEFAULT_HTML_OUTPUT),
            markdown_output: PathBuf::from(DEFAULT_MARKDOWN_OUTPUT),
            refresh: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Sets a custom record store path.
    #[must_use]
    pub fn with_store_path(mut self, store_path: PathBuf) -> Self {
        self.store_path = store_path;
        self
    }

    /// Sets custom report output paths.
    #[must_use]
    pub fn with_outputs(mut self, html_output: PathBuf, markdown_output: PathBuf) -> Self {
        self.html_output = html_output;
        self.markdown_output = markdown_output;
        self
    }

    /// Sets whether cached records are ignored.
    #[must_use]
    pub fn with_refresh(mut self, refresh: bool) -> Self {
        self.refresh = refresh;
        self
    }

    /// Sets the per-call timeout in seconds.
    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Returns the watchlist file path.
    pub fn watchlist_path(&self) -> &Path {
        &self.watchlist_path
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the record store path.
    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    /// Returns the HTML report output path.
    pub fn html_output(&self) -> &Path {
        &self.html_output
    }

    /// Returns the Markdown report output path.
    pub fn markdown_output(&self) -> &Path {
        &self.markdown_output
    }

    /// Returns whether cached records are ignored.
    pub fn refresh(&self) -> bool {
        self.refresh
    }

    /// Returns the per-call timeout in seconds.
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
}
