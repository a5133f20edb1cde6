// SPDX-License-Identifier: MIT

//! Transient page-to-page handoff values.
//!
//! Each key carries a single value from the page that wrote it to the page
//! that reads it; the read consumes the key so stale handoffs cannot leak
//! into a later navigation.

use crate::models::{SavedWod, WodEntry};
use crate::storage::{keys, Storage};

pub struct HandoffStore {
    storage: Storage,
}

impl HandoffStore {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Stash the log entry being edited for the edit page.
    pub fn stash_edit_wod(&self, entry: &WodEntry) {
        if let Err(err) = self.storage.write(keys::EDIT_WOD, entry) {
            tracing::warn!(error = %err, "Failed to stash edit handoff");
        }
    }

    pub fn take_edit_wod(&self) -> Option<WodEntry> {
        self.storage.take(keys::EDIT_WOD)
    }

    /// Stash a WOD draft for the class-creation flow.
    pub fn stash_class_draft(&self, wod: &SavedWod) {
        if let Err(err) = self.storage.write(keys::CLASS_WOD_WRITE, wod) {
            tracing::warn!(error = %err, "Failed to stash class draft");
        }
    }

    pub fn take_class_draft(&self) -> Option<SavedWod> {
        self.storage.take(keys::CLASS_WOD_WRITE)
    }

    /// Stash the WOD a coach selected while scheduling a class.
    pub fn stash_selected_wod(&self, wod: &SavedWod) {
        if let Err(err) = self.storage.write(keys::SELECTED_WOD_FOR_CLASS, wod) {
            tracing::warn!(error = %err, "Failed to stash selected WOD");
        }
    }

    pub fn take_selected_wod(&self) -> Option<SavedWod> {
        self.storage.take(keys::SELECTED_WOD_FOR_CLASS)
    }
}
