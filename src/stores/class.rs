// SPDX-License-Identifier: MIT

//! Scheduled classes, backed by the `admin_classes` key.

use uuid::Uuid;

use crate::error::Result;
use crate::models::{Class, ClassPatch, NewClass};
use crate::storage::{keys, Storage};
use crate::stores::list::ListCache;

pub struct ClassStore {
    inner: ListCache<Class>,
}

impl ClassStore {
    pub fn new(storage: Storage) -> Self {
        Self {
            inner: ListCache::new(storage, keys::ADMIN_CLASSES),
        }
    }

    /// Create a class with a fresh id, appended in insertion order.
    /// Validates the input first; nothing is written on failure.
    pub fn add(&self, new: NewClass) -> Result<String> {
        new.validate_fields()?;
        let id = Uuid::new_v4().to_string();
        let class = Class {
            id: id.clone(),
            date: new.date,
            time: new.time,
            location: new.location,
            wod_id: new.wod_id,
            capacity: new.capacity,
        };
        self.inner.mutate(|items| items.push(class));
        tracing::debug!(id = %id, "Class created");
        Ok(id)
    }

    pub fn update(&self, id: &str, patch: &ClassPatch) {
        self.inner.mutate(|items| {
            if let Some(class) = items.iter_mut().find(|c| c.id == id) {
                class.apply(patch);
            }
        });
    }

    pub fn remove(&self, id: &str) {
        self.inner.mutate(|items| items.retain(|c| c.id != id));
    }

    pub fn get_all(&self) -> Vec<Class> {
        self.inner.snapshot()
    }

    pub fn get_by_id(&self, id: &str) -> Option<Class> {
        self.inner.find(|c| c.id == id)
    }

    /// Classes scheduled on a calendar date.
    pub fn by_date(&self, date: &str) -> Vec<Class> {
        self.inner
            .snapshot()
            .into_iter()
            .filter(|c| c.date == date)
            .collect()
    }

    pub fn reload(&self) {
        self.inner.reload();
    }
}
