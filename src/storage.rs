//! Key-value persistence standing in for the browser's local storage
//!
//! The app persists almost nothing: the tutorial flags are the only state
//! that survives a reload. The trait keeps the core testable without
//! touching the filesystem.

use crate::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// String key-value store with the shape of browser local storage
pub trait Storage {
    /// Reads a value
    fn get(&self, key: &str) -> Option<String>;

    /// Writes a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Deletes a value; absent keys are fine
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory storage for tests and ephemeral runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// JSON-file-backed storage
///
/// The whole map is loaded on open and rewritten on every mutation; with a
/// handful of keys that is the simplest thing that works.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Opens the store at `path`, creating an empty one if the file is absent
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        debug!(path = %path.display(), keys = entries.len(), "storage opened");
        Ok(Self { path, entries })
    }

    fn persist(&self) -> Result<()> {
        let raw = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_round_trip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("tutorial_enabled"), None);

        storage.set("tutorial_enabled", "true").unwrap();
        assert_eq!(storage.get("tutorial_enabled"), Some("true".to_string()));

        storage.remove("tutorial_enabled").unwrap();
        assert_eq!(storage.get("tutorial_enabled"), None);
    }

    #[test]
    fn test_file_storage_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        {
            let mut storage = FileStorage::open(&path).unwrap();
            storage.set("tutorial_completed", "true").unwrap();
        }

        let storage = FileStorage::open(&path).unwrap();
        assert_eq!(storage.get("tutorial_completed"), Some("true".to_string()));
    }

    #[test]
    fn test_file_storage_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("nothing.json")).unwrap();
        assert_eq!(storage.get("tutorial_enabled"), None);
    }

    #[test]
    fn test_file_storage_remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        {
            let mut storage = FileStorage::open(&path).unwrap();
            storage.set("a", "1").unwrap();
            storage.set("b", "2").unwrap();
            storage.remove("a").unwrap();
        }

        let storage = FileStorage::open(&path).unwrap();
        assert_eq!(storage.get("a"), None);
        assert_eq!(storage.get("b"), Some("2".to_string()));
    }
}
