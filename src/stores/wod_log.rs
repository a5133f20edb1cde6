// SPDX-License-Identifier: MIT

//! Personal WOD log store, backed by the `wods` key.
//!
//! The one store whose writes power same-context UI updates: `add` publishes
//! the local "wods updated" signal on top of the persisted change event.

use uuid::Uuid;

use crate::models::{NewWodEntry, WodEntry, WodEntryPatch};
use crate::storage::{keys, Storage};
use crate::stores::list::ListCache;

pub struct WodLogStore {
    inner: ListCache<WodEntry>,
    storage: Storage,
}

impl WodLogStore {
    pub fn new(storage: Storage) -> Self {
        Self {
            inner: ListCache::new(storage.clone(), keys::WODS),
            storage,
        }
    }

    /// Add a log entry with a fresh id, newest first. Returns the id.
    pub fn add(&self, new: NewWodEntry) -> String {
        let id = Uuid::new_v4().to_string();
        let entry = WodEntry {
            id: id.clone(),
            date: new.date,
            text: new.text,
            time: new.time,
            exercises: new.exercises,
            tags: new.tags,
        };
        self.inner.mutate(|items| items.insert(0, entry));
        self.storage.publish_local(keys::WODS);
        tracing::debug!(id = %id, "WOD log entry added");
        id
    }

    /// Shallow-merge `patch` into the entry with `id`; no-op if absent.
    pub fn update(&self, id: &str, patch: &WodEntryPatch) {
        self.inner.mutate(|items| {
            if let Some(entry) = items.iter_mut().find(|e| e.id == id) {
                entry.apply(patch);
            }
        });
    }

    /// Remove the entry with `id`; no-op if absent.
    pub fn remove(&self, id: &str) {
        self.inner.mutate(|items| items.retain(|e| e.id != id));
    }

    pub fn get_all(&self) -> Vec<WodEntry> {
        self.inner.snapshot()
    }

    pub fn get_by_id(&self, id: &str) -> Option<WodEntry> {
        self.inner.find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.len() == 0
    }

    pub fn reload(&self) {
        self.inner.reload();
    }
}
