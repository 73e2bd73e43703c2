//! Textual key-value storage for locally persisted application records.
//!
//! Records are UTF-8 strings addressed by fixed keys. Two backends are
//! provided: `FileStore` keeps one file per key under a data directory,
//! `MemoryStore` keeps everything in process memory (tests, ephemeral
//! sessions). Both sit behind the `KeyValueStore` trait so callers never
//! depend on a concrete backend.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use thiserror::Error;
use tracing::trace;

/// Errors raised by a key-value store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// A durable (or test-scoped) map from string keys to string records.
///
/// `get` distinguishes "absent" (`Ok(None)`) from "backend failed" (`Err`);
/// callers decide how much they care about the difference.
pub trait KeyValueStore {
    /// Read the record stored under `key`, if any.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous record.
    fn put(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Delete the record under `key`. Deleting an absent key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).put(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}

/// File-backed store: one UTF-8 file per key inside a data directory.
///
/// Writes land in a temporary sibling file first and are renamed into
/// place, so an interrupted write leaves the previous record readable.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `root`.
    pub fn open(root: impl AsRef<Path>) -> StoreResult<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Directory this store reads and writes.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, key: &str) -> StoreResult<PathBuf> {
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.record_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => {
                trace!(key, bytes = value.len(), "read record");
                Ok(Some(value))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.record_path(key)?;
        let tmp = self.root.join(format!("{key}.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        trace!(key, bytes = value.len(), "wrote record");
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let path = self.record_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory store for tests and ephemeral sessions.
///
/// The mutex exists only so the trait can offer `&self` methods; there is
/// no multi-writer access in this application.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_round_trips_a_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        store.put("journal_posts_v4", "[1,2,3]").unwrap();
        assert_eq!(
            store.get("journal_posts_v4").unwrap().as_deref(),
            Some("[1,2,3]")
        );
    }

    #[test]
    fn file_store_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        assert!(store.get("never_written").unwrap().is_none());
    }

    #[test]
    fn file_store_overwrites_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        store.put("rec", "old").unwrap();
        store.put("rec", "new").unwrap();
        assert_eq!(store.get("rec").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = FileStore::open(dir.path()).unwrap();
            store.put("rec", "durable").unwrap();
        }
        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("rec").unwrap().as_deref(), Some("durable"));
    }

    #[test]
    fn file_store_rejects_path_traversal_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        assert!(matches!(
            store.put("../escape", "x"),
            Err(StoreError::InvalidKey(_))
        ));
        assert!(matches!(store.get(""), Err(StoreError::InvalidKey(_))));
    }

    #[test]
    fn file_store_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        store.put("rec", "x").unwrap();
        store.remove("rec").unwrap();
        store.remove("rec").unwrap();
        assert!(store.get("rec").unwrap().is_none());
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();
        store.put("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert!(store.get("k").unwrap().is_none());
    }
}
