//! The key-value storage capability
//!
//! Hydration and persistence talk to storage only through the
//! [`KeyValueStore`] trait: a string-keyed, string-valued map. The file
//! implementation keeps the whole map in one JSON object and rewrites it
//! atomically on every mutation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::OutlayResult;

use super::file_io::{read_json, write_json_atomic};

/// String-keyed, string-valued storage
pub trait KeyValueStore {
    /// Read the value under a key, `None` when absent
    fn get(&self, key: &str) -> OutlayResult<Option<String>>;

    /// Write the value under a key, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> OutlayResult<()>;

    /// Drop a key; absent keys are fine
    fn remove(&mut self, key: &str) -> OutlayResult<()>;
}

/// A key-value store backed by a single JSON object file
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`, reading existing entries
    ///
    /// A missing file reads as the empty map; a malformed file is an error.
    pub fn open(path: impl AsRef<Path>) -> OutlayResult<Self> {
        let path = path.as_ref().to_path_buf();
        let entries: BTreeMap<String, String> = read_json(&path)?;
        debug!(path = %path.display(), keys = entries.len(), "opened key-value store");
        Ok(Self { path, entries })
    }

    fn flush(&self) -> OutlayResult<()> {
        write_json_atomic(&self.path, &self.entries)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> OutlayResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> OutlayResult<()> {
        debug!(key, "writing key");
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> OutlayResult<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

/// In-memory store for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> OutlayResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> OutlayResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> OutlayResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}
