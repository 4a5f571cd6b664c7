use crate::error::FinderError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Durable key-value storage with string keys and string values.
pub trait KeyValueStore {
    /// Returns `Ok(None)` when nothing was ever stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, FinderError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), FinderError>;
}

/// Reads `key` and parses it as JSON.
pub fn read_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, FinderError> {
    match store.get(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| FinderError::StorageParse(format!("{}: {}", key, e))),
        None => Ok(None),
    }
}

/// Serializes `value` as JSON and writes it under `key`.
pub fn write_json<T: Serialize + ?Sized>(
    store: &mut dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), FinderError> {
    let raw = serde_json::to_string(value)
        .map_err(|e| FinderError::StorageWrite(format!("{}: {}", key, e)))?;
    store.set(key, &raw)
}

/// Stores every key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, FinderError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(FinderError::StorageRead(format!("{}: {}", key, e))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), FinderError> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| FinderError::StorageWrite(format!("{}: {}", self.dir.display(), e)))?;
        // Write to a sibling file first so a crash never leaves half a value behind.
        let target = self.path_for(key);
        let staging = target.with_extension("json.tmp");
        fs::write(&staging, value)
            .and_then(|_| fs::rename(&staging, &target))
            .map_err(|e| FinderError::StorageWrite(format!("{}: {}", key, e)))
    }
}

/// In-memory store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, FinderError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| FinderError::StorageRead(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), FinderError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| FinderError::StorageWrite(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
