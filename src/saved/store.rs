use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::debug;

/// Scoped persistent key-value storage, one string value per key
///
/// The saved-set manager reads its whole collection through `get` and
/// rewrites it through `set`; implementations only need those two
/// operations to survive process restarts.
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value for a key, `None` when the key has never been set
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value for a key
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Key-value store keeping one JSON file per key under a directory
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        Ok(Some(raw))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating store directory {}", self.dir.display()))?;
        let path = self.path_for(key);
        std::fs::write(&path, value).with_context(|| format!("writing {}", path.display()))?;
        debug!(key, bytes = value.len(), "persisted store value");
        Ok(())
    }
}

/// In-memory key-value store for tests and throwaway sessions
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.lock().expect("store lock poisoned");
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.lock().expect("store lock poisoned");
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
