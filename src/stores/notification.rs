// SPDX-License-Identifier: MIT

//! Notification feed, backed by the `notifications` key.

use chrono::Utc;
use uuid::Uuid;

use crate::models::{NewNotification, NotificationItem, NotificationTarget};
use crate::storage::{keys, Storage};
use crate::stores::list::ListCache;
use crate::time_utils::format_utc_rfc3339;

/// The feed keeps only the most recent entries.
const MAX_FEED_LEN: usize = 20;

pub struct NotificationStore {
    inner: ListCache<NotificationItem>,
}

impl NotificationStore {
    pub fn new(storage: Storage) -> Self {
        Self {
            inner: ListCache::new(storage, keys::NOTIFICATIONS),
        }
    }

    /// Prepend a feed item and drop anything beyond the cap. Returns the id.
    pub fn add(&self, new: NewNotification) -> String {
        let id = Uuid::new_v4().to_string();
        let item = NotificationItem {
            id: id.clone(),
            message: new.message,
            link: new.link,
            created_at: format_utc_rfc3339(Utc::now()),
            target: new.target,
            read_by: Vec::new(),
        };
        self.inner.mutate(|items| {
            items.insert(0, item);
            items.truncate(MAX_FEED_LEN);
        });
        id
    }

    /// Mark every item for `target` as read by `email`.
    pub fn mark_all_read_for(&self, target: NotificationTarget, email: &str) {
        self.inner.mutate(|items| {
            for item in items.iter_mut().filter(|i| i.target == target) {
                if !item.is_read_by(email) {
                    item.read_by.push(email.to_string());
                }
            }
        });
    }

    /// Whether `email` has any unseen item targeted at `target`.
    pub fn has_unread_for(&self, target: NotificationTarget, email: &str) -> bool {
        self.inner
            .snapshot()
            .iter()
            .any(|i| i.target == target && !i.is_read_by(email))
    }

    pub fn get_all(&self) -> Vec<NotificationItem> {
        self.inner.snapshot()
    }

    pub fn for_target(&self, target: NotificationTarget) -> Vec<NotificationItem> {
        self.inner
            .snapshot()
            .into_iter()
            .filter(|i| i.target == target)
            .collect()
    }

    pub fn clear(&self) {
        self.inner.mutate(|items| items.clear());
    }

    pub fn reload(&self) {
        self.inner.reload();
    }
}
