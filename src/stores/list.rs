// SPDX-License-Identifier: MIT

//! Shared mechanics for list-backed domain stores.
//!
//! Every store of this shape owns one storage key holding a JSON array,
//! mirrors it in an in-memory cache for synchronous reads, and rewrites the
//! whole array on every mutation.

use std::sync::RwLock;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::storage::Storage;

pub(crate) struct ListCache<T> {
    key: &'static str,
    storage: Storage,
    items: RwLock<Vec<T>>,
}

impl<T: Clone + Serialize + DeserializeOwned> ListCache<T> {
    /// Populate the cache from storage; missing or corrupt blobs start empty.
    pub fn new(storage: Storage, key: &'static str) -> Self {
        let items = storage.read_or(key, Vec::new());
        Self {
            key,
            storage,
            items: RwLock::new(items),
        }
    }

    /// Re-read storage into the cache (change-notification handler).
    pub fn reload(&self) {
        let fresh = self.storage.read_or(self.key, Vec::new());
        *self.items.write().expect("store cache poisoned") = fresh;
    }

    pub fn snapshot(&self) -> Vec<T> {
        self.items.read().expect("store cache poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.items.read().expect("store cache poisoned").len()
    }

    pub fn find<P: Fn(&T) -> bool>(&self, pred: P) -> Option<T> {
        self.items
            .read()
            .expect("store cache poisoned")
            .iter()
            .find(|item| pred(item))
            .cloned()
    }

    /// Apply a mutation to the cache, then persist the whole list.
    ///
    /// The lock is released before the write so the synchronous change-event
    /// dispatch can re-enter store reloads without deadlocking. A failed
    /// persist is logged; the cache keeps the new state.
    pub fn mutate<R>(&self, f: impl FnOnce(&mut Vec<T>) -> R) -> R {
        let (result, snapshot) = {
            let mut items = self.items.write().expect("store cache poisoned");
            let result = f(&mut items);
            (result, items.clone())
        };
        if let Err(err) = self.storage.write(self.key, &snapshot) {
            tracing::warn!(key = self.key, error = %err, "Failed to persist store state");
        }
        result
    }
}
