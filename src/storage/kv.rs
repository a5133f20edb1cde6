// SPDX-License-Identifier: MIT

//! Typed JSON view over a [`StorageBackend`], wired to the change bus.
//!
//! Each `Storage` handle represents one execution context (one "tab").
//! Persisted writes publish a change event tagged with the handle's origin so
//! other contexts on the same bus can reload; the writing context itself does
//! not receive its own persisted events, matching the browser storage-event
//! contract.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageError;
use crate::storage::StorageBackend;
use crate::sync::{ChangeBus, ChangeEvent, ChangeScope, OriginId};

/// Typed storage handle for one execution context.
#[derive(Clone)]
pub struct Storage {
    backend: Arc<dyn StorageBackend>,
    bus: Arc<ChangeBus>,
    origin: OriginId,
}

impl Storage {
    /// Attach a new context to a backend and bus. Each call gets a fresh
    /// origin id; two handles over the same backend model two tabs.
    pub fn new(backend: Arc<dyn StorageBackend>, bus: Arc<ChangeBus>) -> Self {
        Self {
            backend,
            bus,
            origin: OriginId::next(),
        }
    }

    pub fn origin(&self) -> OriginId {
        self.origin
    }

    pub fn bus(&self) -> &Arc<ChangeBus> {
        &self.bus
    }

    /// Read and deserialize the value under `key`.
    ///
    /// `Ok(None)` for a missing key; a parse failure is an error so callers
    /// can decide between diagnostics and a default.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.backend.get(key)? {
            None => Ok(None),
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|err| StorageError::Serde {
                    key: key.to_string(),
                    source: err,
                }),
        }
    }

    /// Read with a fallback: missing or corrupt values resolve to `default`.
    ///
    /// This is the data-loss-safe path the stores use; corruption is logged,
    /// never surfaced.
    pub fn read_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.read(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(err) => {
                tracing::warn!(key, error = %err, "Unreadable storage value, using default");
                default
            }
        }
    }

    /// Serialize and store `value` under `key`, then publish a persisted
    /// change event for other contexts.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|err| StorageError::Serde {
            key: key.to_string(),
            source: err,
        })?;
        self.backend.set(key, &raw)?;
        self.bus.publish(&ChangeEvent {
            key: key.to_string(),
            origin: self.origin,
            scope: ChangeScope::Persisted,
        });
        Ok(())
    }

    /// Delete one key and publish the change.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.backend.remove(key)?;
        self.bus.publish(&ChangeEvent {
            key: key.to_string(),
            origin: self.origin,
            scope: ChangeScope::Persisted,
        });
        Ok(())
    }

    /// Read and consume a transient handoff value.
    ///
    /// Missing and corrupt values are both `None`; the key is removed either
    /// way so a stale blob cannot be re-consumed.
    pub fn take<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = match self.read(key) {
            Ok(v) => v,
            Err(err) => {
                tracing::warn!(key, error = %err, "Discarding unreadable handoff value");
                None
            }
        };
        if let Err(err) = self.remove(key) {
            tracing::warn!(key, error = %err, "Failed to consume handoff key");
        }
        value
    }

    /// Delete the entire namespace.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.backend.clear()
    }

    /// All present keys starting with `prefix` (dynamic-key scans).
    pub fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        match self.backend.keys() {
            Ok(keys) => keys.into_iter().filter(|k| k.starts_with(prefix)).collect(),
            Err(err) => {
                tracing::warn!(prefix, error = %err, "Key scan failed");
                Vec::new()
            }
        }
    }

    /// Publish a same-context custom signal for `key` (the "wods updated"
    /// in-process event). Never crosses to other origins.
    pub fn publish_local(&self, key: &str) {
        self.bus.publish(&ChangeEvent {
            key: key.to_string(),
            origin: self.origin,
            scope: ChangeScope::Local,
        });
    }
}
