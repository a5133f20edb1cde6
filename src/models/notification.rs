// SPDX-License-Identifier: MIT

//! Notification feed items, targeted at members or coaches.

use serde::{Deserialize, Serialize};

/// Which audience a notification is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationTarget {
    Member,
    Coach,
}

/// One feed item. Read state is per-user: an email in `readBy` has seen it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationItem {
    pub id: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// RFC3339 creation timestamp
    pub created_at: String,
    pub target: NotificationTarget,
    #[serde(default)]
    pub read_by: Vec<String>,
}

impl NotificationItem {
    pub fn is_read_by(&self, email: &str) -> bool {
        self.read_by.iter().any(|e| e == email)
    }
}

/// Feed item before id and timestamp are assigned.
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub message: String,
    pub link: Option<String>,
    pub target: NotificationTarget,
}
