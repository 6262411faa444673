//! Key-value persistence for ledger snapshots.
//!
//! The ledger saves its whole record list under a single key after every
//! mutation. [`ShiftStore`] is the seam for that; [`MemoryStore`] keeps
//! values in process and [`FileStore`] keeps one file per key.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};

/// A string key-value store.
pub trait ShiftStore {
    /// Returns the value stored under `key`, or `None` if there is none.
    fn get(&self, key: &str) -> LedgerResult<Option<String>>;

    /// Replaces the value stored under `key`.
    fn set(&mut self, key: &str, value: String) -> LedgerResult<()>;
}

/// An in-process store.
///
/// Counts writes so callers can tell whether an operation persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `value` under `key`.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(key.into(), value.into());
        Self { values, writes: 0 }
    }

    /// Number of successful `set` calls.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ShiftStore for MemoryStore {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> LedgerResult<()> {
        self.values.insert(key.to_string(), value);
        self.writes += 1;
        Ok(())
    }
}

/// A store keeping each key in `<dir>/<key>.json`.
///
/// Writes go to a temporary sibling file which is then renamed over the
/// target, so a crash leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// The file backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl ShiftStore for FileStore {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(LedgerError::StoreRead {
                key: key.to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn set(&mut self, key: &str, value: String) -> LedgerResult<()> {
        let write_error = |e: std::io::Error| LedgerError::StoreWrite {
            key: key.to_string(),
            message: e.to_string(),
        };

        fs::create_dir_all(&self.dir).map_err(write_error)?;
        let target = self.path_for(key);
        let staging = self.dir.join(format!("{}.json.tmp", key));
        fs::write(&staging, value).map_err(write_error)?;
        fs::rename(&staging, &target).map_err(write_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_get_set() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("shifts").unwrap(), None);

        store.set("shifts", "[]".to_string()).unwrap();
        assert_eq!(store.get("shifts").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn test_memory_store_with_value() {
        let store = MemoryStore::with_value("shifts", "[1]");
        assert_eq!(store.get("shifts").unwrap().as_deref(), Some("[1]"));
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_file_store_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.get("shifts").unwrap(), None);
    }

    #[test]
    fn test_file_store_overwrites_whole_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("data"));

        store.set("shifts", "[1,2,3]".to_string()).unwrap();
        store.set("shifts", "[]".to_string()).unwrap();

        assert_eq!(store.get("shifts").unwrap().as_deref(), Some("[]"));
        assert!(store.path_for("shifts").exists());
        assert!(!dir.path().join("data").join("shifts.json.tmp").exists());
    }

    #[test]
    fn test_file_store_read_error_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        // a directory where the file should be cannot be read as text
        fs::create_dir_all(store.path_for("shifts")).unwrap();

        match store.get("shifts") {
            Err(LedgerError::StoreRead { key, .. }) => assert_eq!(key, "shifts"),
            other => panic!("Expected StoreRead error, got {:?}", other),
        }
    }
}
