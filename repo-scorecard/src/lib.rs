#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod age;
pub mod config;
pub mod fetch;
pub mod output;
pub mod report;
pub mod runner;
pub mod store;
pub mod summary;

pub use age::{age_in_days, age_in_years};
pub use config::{load_watchlist, ConfigError, TrackedRepository, Watchlist};
pub use fetch::{fetch_repository, FetchError};
pub use output::{write_report, OutputError};
pub use report::{ReportError, ReportRenderer, ReportRow};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use store::{sort_records, RecordStore, RepoRecord, StoreError};
pub use summary::{FetchOutcome, RunSummary};
