//! Orchestrates watchlist fetches and report generation.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::config::load_watchlist;
use crate::fetch::fetch_repository;
use crate::output::write_report;
use crate::report::ReportRenderer;
use crate::store::{sort_records, RecordStore};
use crate::summary::RunSummary;
use chrono::Utc;
use octocrab::Octocrab;
use std::time::Duration;
use tracing::{error, info, warn};

/// Orchestrates a full fetch-and-report run.
pub struct Runner {
    config: RunnerConfig,
    octocrab: Octocrab,
    renderer: ReportRenderer,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the GitHub client cannot be constructed or
    /// the report templates fail to register.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let octocrab = Octocrab::builder()
            .personal_token(config.token().to_string())
            .build()?;
        let renderer = ReportRenderer::new()?;
        Ok(Self {
            config,
            octocrab,
            renderer,
        })
    }

    /// Executes the full pipeline: fetch every watchlist entry, then
    /// regenerate both report files.
    ///
    /// Individual fetch failures are isolated per repository: they produce
    /// sentinel rows and are counted in the summary, never aborting the
    /// run. Report write failures are likewise counted, so a run that
    /// completes always returns `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] only for fatal problems: an unloadable
    /// watchlist or a template rendering failure.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let mut summary = RunSummary::new(self.config.refresh());
        let entries = load_watchlist(self.config.watchlist_path())?;

        if entries.is_empty() {
            warn!("Watchlist is empty, nothing to report");
            return Ok(summary);
        }

        let mut store = RecordStore::open(self.config.store_path());
        let call_timeout = Duration::from_secs(self.config.timeout_secs());
        let mut records = Vec::with_capacity(entries.len());

        // One repository at a time: deliberate backpressure against the
        // rate-limited API.
        for entry in &entries {
            let outcome = fetch_repository(
                &self.octocrab,
                entry,
                &mut store,
                self.config.refresh(),
                call_timeout,
            )
            .await;

            summary.record_outcome(&outcome);
            records.push(outcome.into_record());
        }

        sort_records(&mut records);

        // Both documents share one generation timestamp.
        let now = Utc::now();
        let html = self.renderer.render_html(&records, now)?;
        let markdown = self.renderer.render_markdown(&records, now)?;

        let outputs = [
            (self.config.html_output(), html.as_str()),
            (self.config.markdown_output(), markdown.as_str()),
        ];
        for (path, content) in outputs {
            match write_report(path, content) {
                Ok(()) => summary.reports_written += 1,
                Err(e) => {
                    error!(path = %path.display(), error = %e, "Failed to write report");
                    summary.report_failures += 1;
                }
            }
        }

        info!(
            tracked = summary.repositories_tracked,
            fetched = summary.fetched,
            cached = summary.cached,
            failed = summary.failed,
            "Run complete"
        );
        Ok(summary)
    }
}
