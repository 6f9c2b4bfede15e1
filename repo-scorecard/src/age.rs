//! Age and recency derivation.
//!
//! Pure helpers converting a stored timestamp into elapsed years or days
//! relative to an injected "now". Production callers pass `Utc::now()`;
//! tests pass a fixed timestamp, so results stay deterministic.

use chrono::{DateTime, Utc};

/// Days per year used for the whole-year derivation.
const DAYS_PER_YEAR: i64 = 365;

/// Returns the number of whole years elapsed between `timestamp` and `now`.
///
/// Computed as elapsed days divided by 365, truncated. For a fixed
/// `timestamp` the result is monotonically non-decreasing as `now` advances.
#[must_use]
pub fn age_in_years(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    age_in_days(timestamp, now) / DAYS_PER_YEAR
}

/// Returns the number of whole days elapsed between `timestamp` and `now`.
#[must_use]
pub fn age_in_days(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - timestamp).num_days()
}
