//! Persistent keyed store of repository metadata records.
//!
//! Backed by a single JSON document mapping identifier to [`RepoRecord`].
//! The whole document is read on open and rewritten on every upsert; writes
//! go through a temp file in the same directory followed by a rename, so a
//! failed write never corrupts the previous durable contents.

mod error;
mod record;

pub use error::StoreError;
pub use record::RepoRecord;

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Persistent keyed table of [`RepoRecord`]s.
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    records: BTreeMap<String, RepoRecord>,
}

impl RecordStore {
    /// Opens a store backed by the JSON document at `path`.
    ///
    /// A missing, unreadable or corrupt file yields an empty store; the
    /// backing file is (re)created on the first successful upsert. Opening
    /// is therefore idempotent and never fails.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(records) => records,
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "Record store is corrupt, starting empty"
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No record store yet, starting empty");
                BTreeMap::new()
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Record store is unreadable, starting empty"
                );
                BTreeMap::new()
            }
        };

        debug!(path = %path.display(), count = records.len(), "Opened record store");
        Self { path, records }
    }

    /// Point lookup by identifier.
    ///
    /// `None` means the identifier was never stored, not that a fetch
    /// failed.
    #[must_use]
    pub fn get(&self, identifier: &str) -> Option<&RepoRecord> {
        self.records.get(identifier)
    }

    /// Inserts the record, or fully replaces the stored record with the same
    /// identifier, then persists the whole table.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the table cannot be written. The in-memory
    /// table is updated regardless; the previous durable file stays intact.
    pub fn upsert(&mut self, record: RepoRecord) -> Result<(), StoreError> {
        self.records.insert(record.identifier.clone(), record);
        self.persist()
    }

    /// Returns all records in report order.
    ///
    /// Stars descending, open issues ascending as tie-break, identifier
    /// ascending as final tie-break. Records missing a count sort after
    /// those that have one.
    #[must_use]
    pub fn list_all(&self) -> Vec<RepoRecord> {
        let mut records: Vec<_> = self.records.values().cloned().collect();
        sort_records(&mut records);
        records
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no records are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Writes the full table to a temp file and renames it over the backing
    /// document.
    fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.records)?;

        // The temp file must live in the destination directory so the final
        // rename stays on one filesystem.
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StoreError::IoError {
            path: self.path.display().to_string(),
            source: e,
        })?;
        tmp.write_all(json.as_bytes())
            .map_err(|e| StoreError::IoError {
                path: self.path.display().to_string(),
                source: e,
            })?;
        tmp.persist(&self.path).map_err(|e| StoreError::IoError {
            path: self.path.display().to_string(),
            source: e.error,
        })?;

        Ok(())
    }
}

/// Sorts records with the deterministic report ordering used by
/// [`RecordStore::list_all`].
pub fn sort_records(records: &mut [RepoRecord]) {
    records.sort_by(compare_records);
}

fn compare_records(a: &RepoRecord, b: &RepoRecord) -> Ordering {
    // Option ordering puts None first, so comparing b to a both reverses
    // the star order and pushes missing counts to the end.
    b.stargazers_count
        .cmp(&a.stargazers_count)
        .then_with(|| issues_key(a).cmp(&issues_key(b)))
        .then_with(|| a.identifier.cmp(&b.identifier))
}

fn issues_key(record: &RepoRecord) -> u64 {
    record.issues_count.unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_record(identifier: &str, stars: u64, issues: u64) -> RepoRecord {
        RepoRecord {
            identifier: identifier.to_string(),
            display_name: Some(identifier.to_string()),
            full_name: Some(identifier.to_string()),
            homepage_url: None,
            html_url: Some(format!("https://github.com/{identifier}")),
            description: None,
            created_at: Some("2020-01-01T00:00:00Z".parse().unwrap()),
            updated_at: Some("2024-01-01T00:00:00Z".parse().unwrap()),
            issues_count: Some(issues),
            stargazers_count: Some(stars),
            watchers_count: Some(stars),
            forks_count: Some(10),
            language: Some("Rust".to_string()),
            license: Some("MIT".to_string()),
            last_commit_date: Some("2024-01-01T00:00:00Z".parse().unwrap()),
            dependencies: String::new(),
        }
    }

    #[test]
    fn upsert_then_get() {
        let temp = TempDir::new().unwrap();
        let mut store = RecordStore::open(temp.path().join("store.json"));

        store.upsert(sample_record("a/a", 10, 1)).unwrap();

        let record = store.get("a/a").unwrap();
        assert_eq!(record.stargazers_count, Some(10));
        assert!(store.get("b/b").is_none());
    }

    #[test]
    fn upsert_replaces_all_fields() {
        let temp = TempDir::new().unwrap();
        let mut store = RecordStore::open(temp.path().join("store.json"));

        store.upsert(sample_record("a/a", 10, 1)).unwrap();

        let mut updated = sample_record("a/a", 20, 2);
        updated.license = None;
        updated.language = None;
        store.upsert(updated).unwrap();

        assert_eq!(store.len(), 1);
        let record = store.get("a/a").unwrap();
        assert_eq!(record.stargazers_count, Some(20));
        assert_eq!(record.issues_count, Some(2));
        // No stale fields survive a replacement.
        assert_eq!(record.license, None);
        assert_eq!(record.language, None);
    }

    #[test]
    fn upsert_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let mut store = RecordStore::open(temp.path().join("store.json"));

        store.upsert(sample_record("a/a", 10, 1)).unwrap();
        let before = store.list_all();

        store.upsert(sample_record("a/a", 10, 1)).unwrap();
        let after = store.list_all();

        assert_eq!(before, after);
    }

    #[test]
    fn list_all_orders_deterministically() {
        let temp = TempDir::new().unwrap();
        let mut store = RecordStore::open(temp.path().join("store.json"));

        // Equal stars: issues ascending breaks the tie.
        store.upsert(sample_record("a/a", 500, 3)).unwrap();
        store.upsert(sample_record("b/b", 500, 1)).unwrap();
        store.upsert(sample_record("c/c", 900, 7)).unwrap();
        // Equal stars and issues: identifier breaks the tie.
        store.upsert(sample_record("e/e", 500, 3)).unwrap();

        let ids: Vec<_> = store
            .list_all()
            .iter()
            .map(|r| r.identifier.clone())
            .collect();

        assert_eq!(ids, vec!["c/c", "b/b", "a/a", "e/e"]);
        assert_eq!(store.list_all(), store.list_all());
    }

    #[test]
    fn missing_counts_sort_last() {
        let mut records = vec![
            RepoRecord::sentinel("z/z", "z".to_string(), String::new()),
            sample_record("a/a", 1, 1),
        ];

        sort_records(&mut records);

        assert_eq!(records[0].identifier, "a/a");
        assert_eq!(records[1].identifier, "z/z");
    }

    #[test]
    fn contents_survive_reopen() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("store.json");

        {
            let mut store = RecordStore::open(&path);
            store.upsert(sample_record("a/a", 10, 1)).unwrap();
            store.upsert(sample_record("b/b", 20, 2)).unwrap();
        }

        let reopened = RecordStore::open(&path);
        assert_eq!(reopened.len(), 2);
        assert_eq!(
            reopened.get("b/b").unwrap().stargazers_count,
            Some(20)
        );
    }

    #[test]
    fn missing_file_starts_empty() {
        let temp = TempDir::new().unwrap();
        let store = RecordStore::open(temp.path().join("nonexistent.json"));

        assert!(store.is_empty());
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("store.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut store = RecordStore::open(&path);
        assert!(store.is_empty());

        // The store stays usable after recovery.
        store.upsert(sample_record("a/a", 10, 1)).unwrap();
        assert_eq!(RecordStore::open(&path).len(), 1);
    }
}
