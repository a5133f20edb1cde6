// SPDX-License-Identifier: MIT

//! Raw string key-value backends.
//!
//! The backend is the shared resource: every execution context that points at
//! the same backend sees the same namespace, and concurrent writers resolve
//! as whole-blob last-write-wins.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Mutex;

use dashmap::DashMap;

use crate::error::StorageError;

/// A durable string -> string namespace (the `localStorage` role).
pub trait StorageBackend: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
    /// All key names currently present (used for dynamic-key scans).
    fn keys(&self) -> Result<Vec<String>, StorageError>;
}

/// In-memory backend for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryBackend {
    map: DashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.map.get(key).map(|v| v.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.map.remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.map.clear();
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.map.iter().map(|e| e.key().clone()).collect())
    }
}

/// File-backed namespace: one JSON object file mapping key -> raw value.
///
/// Every operation re-reads the file, so two contexts sharing a path observe
/// each other's writes (the cross-tab storage model). A missing or corrupt
/// file resolves to an empty namespace rather than an error.
pub struct FileBackend {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    guard: Mutex<()>,
}

impl FileBackend {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            guard: Mutex::new(()),
        }
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw).unwrap_or_else(|err| {
                tracing::warn!(path = %self.path.display(), error = %err, "Corrupt storage file, starting empty");
                BTreeMap::new()
            })),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(StorageError::Backend {
                key: String::new(),
                reason: format!("read {}: {}", self.path.display(), err),
            }),
        }
    }

    fn persist(&self, map: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let raw = serde_json::to_string(map).map_err(|err| StorageError::Serde {
            key: String::new(),
            source: err,
        })?;
        std::fs::write(&self.path, raw).map_err(|err| StorageError::Backend {
            key: String::new(),
            reason: format!("write {}: {}", self.path.display(), err),
        })
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.guard.lock().expect("file guard poisoned");
        Ok(self.load()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.guard.lock().expect("file guard poisoned");
        let mut map = self.load()?;
        map.insert(key.to_string(), value.to_string());
        self.persist(&map)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.guard.lock().expect("file guard poisoned");
        let mut map = self.load()?;
        if map.remove(key).is_some() {
            self.persist(&map)?;
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let _guard = self.guard.lock().expect("file guard poisoned");
        self.persist(&BTreeMap::new())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let _guard = self.guard.lock().expect("file guard poisoned");
        Ok(self.load()?.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_roundtrip() {
        let backend = MemoryBackend::new();
        backend.set("a", "1").unwrap();
        assert_eq!(backend.get("a").unwrap().as_deref(), Some("1"));
        backend.remove("a").unwrap();
        assert_eq!(backend.get("a").unwrap(), None);
    }

    #[test]
    fn test_file_backend_shares_namespace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let first = FileBackend::new(path.clone());
        let second = FileBackend::new(path);

        first.set("wods", "[]").unwrap();
        assert_eq!(second.get("wods").unwrap().as_deref(), Some("[]"));

        second.remove("wods").unwrap();
        assert_eq!(first.get("wods").unwrap(), None);
    }

    #[test]
    fn test_file_backend_corrupt_file_resolves_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "{not json").unwrap();

        let backend = FileBackend::new(path);
        assert_eq!(backend.get("anything").unwrap(), None);
    }
}
