use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;

/// Error type for storage writes
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not serialize value for key '{key}': {source}")]
    SerializeError {
        key: String,
        source: serde_json::Error,
    },
}

/// A synchronous string-keyed store of JSON values.
///
/// `get` returns the last value written under a key (or `None`), `set`
/// durably replaces it. Reads never fail — a missing or unreadable key is
/// simply absent.
pub trait Storage {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&mut self, key: &str, value: &Value) -> Result<(), StorageError>;
}

// ---------------------------------------------------------------------------
// Directory-backed storage
// ---------------------------------------------------------------------------

/// Storage backed by a directory, one `<key>.json` file per key.
#[derive(Debug)]
pub struct DirStorage {
    dir: PathBuf,
}

impl DirStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirStorage { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for DirStorage {
    fn get(&self, key: &str) -> Option<Value> {
        let content = fs::read_to_string(self.key_path(key)).ok()?;
        serde_json::from_str(&content).ok()
    }

    fn set(&mut self, key: &str, value: &Value) -> Result<(), StorageError> {
        let path = self.key_path(key);
        let content =
            serde_json::to_string_pretty(value).map_err(|e| StorageError::SerializeError {
                key: key.to_string(),
                source: e,
            })?;

        // Write to a temp file in the same directory, then rename into place,
        // so a crash mid-write never leaves a truncated store.
        let write = || -> std::io::Result<()> {
            let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
            tmp.write_all(content.as_bytes())?;
            tmp.persist(&path)?;
            Ok(())
        };
        write().map_err(|e| StorageError::WriteError { path, source: e })
    }
}

// ---------------------------------------------------------------------------
// In-memory storage (test double)
// ---------------------------------------------------------------------------

/// Storage backed by a plain map. Used by tests and anywhere persistence
/// should be isolated from the filesystem.
#[derive(Debug, Default)]
pub struct MemStorage {
    entries: HashMap<String, Value>,
}

impl MemStorage {
    pub fn new() -> Self {
        MemStorage::default()
    }
}

impl Storage for MemStorage {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &Value) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.clone());
        Ok(())
    }
}

/// Convenience: read the directory path a `DirStorage` would use for a key.
/// Only used by tests and diagnostics.
pub fn key_file(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{}.json", key))
}
