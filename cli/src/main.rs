//! CLI for repo-scorecard.
//!
//! Fetches metadata for every watchlist repository and regenerates the
//! HTML and Markdown report tables.

use clap::Parser;
use repo_scorecard::{RunSummary, Runner, RunnerConfig, RunnerError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Repo Scorecard - Track repository health metadata and regenerate report tables.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the watchlist file.
    #[arg(long, default_value = "watchlist.toml")]
    watchlist: PathBuf,

    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN")]
    token: String,

    /// Path to the record store document.
    #[arg(long, default_value = "repo_cache.json")]
    store_path: PathBuf,

    /// Path of the generated HTML report.
    #[arg(long, default_value = "index.html")]
    html_output: PathBuf,

    /// Path of the generated Markdown report.
    #[arg(long, default_value = "README.md")]
    markdown_output: PathBuf,

    /// Ignore cached records and re-fetch every repository.
    #[arg(long)]
    refresh: bool,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);

            // Per-repository failures are rendered as sentinel rows; the
            // run itself still succeeded.
            ExitCode::from(0)
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        // Use compact formatting without module target paths for cleaner output
        .with(fmt::layer().compact().with_target(false))
        // Allow runtime log filtering via RUST_LOG env var (e.g., RUST_LOG=debug)
        // Falls back to "info" level if RUST_LOG is not set or invalid
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        // Register as the global default subscriber
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let config = RunnerConfig::new(args.watchlist, args.token)
        .with_store_path(args.store_path)
        .with_outputs(args.html_output, args.markdown_output)
        .with_refresh(args.refresh)
        .with_timeout_secs(args.timeout_secs);

    let runner = Runner::new(config)?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.refresh { "Refresh" } else { "Cached" }
    );
    println!("  Repositories tracked: {}", summary.repositories_tracked);
    println!("  Fetched: {}", summary.fetched);
    println!("  Served from cache: {}", summary.cached);
    println!("  Fetch failures: {}", summary.failed);
    println!("  Reports written: {}", summary.reports_written);

    if summary.report_failures > 0 {
        println!("  Report write failures: {}", summary.report_failures);
    }
}
