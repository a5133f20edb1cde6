// SPDX-License-Identifier: MIT

//! Coach-published WODs, backed by the `wod_admin_saved` key.

use uuid::Uuid;

use crate::models::{NewSavedWod, SavedWod, SavedWodPatch};
use crate::storage::{keys, Storage};
use crate::stores::list::ListCache;

/// Shown where a class references a WOD that no longer exists.
pub const DELETED_WOD_PLACEHOLDER: &str = "(deleted WOD)";

pub struct SavedWodStore {
    inner: ListCache<SavedWod>,
}

impl SavedWodStore {
    pub fn new(storage: Storage) -> Self {
        Self {
            inner: ListCache::new(storage, keys::WOD_ADMIN_SAVED),
        }
    }

    /// Publish a WOD with a fresh id, newest first. Returns the id.
    pub fn add(&self, new: NewSavedWod) -> String {
        let id = Uuid::new_v4().to_string();
        let wod = SavedWod {
            id: id.clone(),
            date: new.date,
            title: new.title,
            description: new.description,
        };
        self.inner.mutate(|items| items.insert(0, wod));
        tracing::debug!(id = %id, "WOD published");
        id
    }

    pub fn update(&self, id: &str, patch: &SavedWodPatch) {
        self.inner.mutate(|items| {
            if let Some(wod) = items.iter_mut().find(|w| w.id == id) {
                wod.apply(patch);
            }
        });
    }

    /// Remove a published WOD. Classes referencing it are left in place;
    /// their lookups go through [`SavedWodStore::title_for`].
    pub fn remove(&self, id: &str) {
        self.inner.mutate(|items| items.retain(|w| w.id != id));
    }

    pub fn get_all(&self) -> Vec<SavedWod> {
        self.inner.snapshot()
    }

    pub fn get_by_id(&self, id: &str) -> Option<SavedWod> {
        self.inner.find(|w| w.id == id)
    }

    /// Display title for a WOD reference, tolerating dangling ids.
    pub fn title_for(&self, id: &str) -> String {
        self.get_by_id(id)
            .map(|w| w.title)
            .unwrap_or_else(|| DELETED_WOD_PLACEHOLDER.to_string())
    }

    pub fn reload(&self) {
        self.inner.reload();
    }
}
