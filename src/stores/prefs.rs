// SPDX-License-Identifier: MIT

//! User preference scalars.

use crate::storage::{keys, Storage};

pub struct PreferenceStore {
    storage: Storage,
}

impl PreferenceStore {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Whether class/WOD notifications are enabled. On by default.
    pub fn notifications_enabled(&self) -> bool {
        self.storage.read_or(keys::PREF_NOTIF, true)
    }

    pub fn set_notifications_enabled(&self, enabled: bool) {
        if let Err(err) = self.storage.write(keys::PREF_NOTIF, &enabled) {
            tracing::warn!(error = %err, "Failed to persist notification preference");
        }
    }

    /// Preferred daily notification time, `HH:MM`.
    pub fn notification_time(&self) -> Option<String> {
        self.storage.read_or(keys::PREF_NOTIF_TIME, None)
    }

    pub fn set_notification_time(&self, time: &str) {
        if let Err(err) = self.storage.write(keys::PREF_NOTIF_TIME, &time.to_string()) {
            tracing::warn!(error = %err, "Failed to persist notification time");
        }
    }

    /// Dark mode toggle. Off by default.
    pub fn dark_mode(&self) -> bool {
        self.storage.read_or(keys::PREF_DARK, false)
    }

    pub fn set_dark_mode(&self, enabled: bool) {
        if let Err(err) = self.storage.write(keys::PREF_DARK, &enabled) {
            tracing::warn!(error = %err, "Failed to persist dark mode preference");
        }
    }
}
