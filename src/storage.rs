//! Persistent key-value store backing the shopping list and likes.
//!
//! Values are arbitrary JSON. Writes go straight through to the backing
//! medium; there is no eviction and no size limit handling.

use crate::error::BrowserError;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Key under which the shopping list is stored
pub const LIST_KEY: &str = "list";
/// Key under which the liked recipes are stored
pub const LIKES_KEY: &str = "likes";

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Value>, BrowserError>;

    fn set(&self, key: &str, value: Value) -> Result<(), BrowserError>;
}

/// Shared handle to a store, cloned into every record that persists itself
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Read and decode `key`; missing or malformed data yields `None`.
pub fn read_collection<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let value = match store.get(key) {
        Ok(Some(value)) => value,
        Ok(None) => return None,
        Err(e) => {
            warn!("Could not read '{}' from storage: {}", key, e);
            return None;
        }
    };

    match serde_json::from_value(value) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            warn!("Ignoring malformed stored '{}': {}", key, e);
            None
        }
    }
}

/// Encode and write `value` under `key`. Failures are logged and dropped.
pub fn persist<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) {
    let encoded = match serde_json::to_value(value) {
        Ok(encoded) => encoded,
        Err(e) => {
            warn!("Could not encode '{}' for storage: {}", key, e);
            return;
        }
    };

    if let Err(e) = store.set(key, encoded) {
        warn!("Could not persist '{}': {}", key, e);
    }
}

/// Store kept in process memory, mostly for tests and throwaway sessions
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, BrowserError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| BrowserError::Storage(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), BrowserError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| BrowserError::Storage(e.to_string()))?;
        entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store kept in a single JSON object file on disk.
///
/// Every write re-reads the file and rewrites it whole, so several handles
/// on the same path see each other's keys.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Map<String, Value>, BrowserError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let raw = std::fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&raw)? {
            Value::Object(map) => Ok(map),
            other => Err(BrowserError::Storage(format!(
                "expected a JSON object in {}, found {}",
                self.path.display(),
                other
            ))),
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, BrowserError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|e| BrowserError::Storage(e.to_string()))?;
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: Value) -> Result<(), BrowserError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|e| BrowserError::Storage(e.to_string()))?;

        // An unreadable file is replaced rather than blocking every write
        let mut all = self.read_all().unwrap_or_else(|e| {
            warn!("Overwriting unreadable store {}: {}", self.path.display(), e);
            Map::new()
        });
        all.insert(key.to_string(), value);

        let body = serde_json::to_string_pretty(&Value::Object(all))?;
        std::fs::write(&self.path, body)?;
        debug!("Wrote '{}' to {}", key, self.path.display());
        Ok(())
    }
}
