// SPDX-License-Identifier: MIT

//! Persisted key-value storage layer.
//!
//! One JSON blob per key, whole-blob read-modify-write. The key names are a
//! compatibility surface: a reimplementation pointed at the same namespace
//! must keep them byte-for-byte.

pub mod backend;
pub mod kv;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use kv::Storage;

/// Storage key names as constants.
pub mod keys {
    /// User directory: sequence of accounts with plaintext passwords (mock-grade by contract)
    pub const USERS: &str = "users";
    /// Session scalar fields
    pub const TOKEN: &str = "token";
    pub const CURRENT_USER: &str = "current_user";
    pub const TOKEN_EXPIRY: &str = "token_expiry";
    /// Personal WOD log entries (newest first)
    pub const WODS: &str = "wods";
    /// Coach-published WODs (newest first)
    pub const WOD_ADMIN_SAVED: &str = "wod_admin_saved";
    /// Scheduled classes (insertion order)
    pub const ADMIN_CLASSES: &str = "admin_classes";
    /// Member reservations
    pub const RESERVED_WODS: &str = "reserved_wods";
    /// Notification feed, capped at the 20 most recent
    pub const NOTIFICATIONS: &str = "notifications";
    /// Transient page-handoff keys, consumed (removed) by the reader
    pub const EDIT_WOD: &str = "edit_wod";
    pub const CLASS_WOD_WRITE: &str = "class_wod_write";
    pub const SELECTED_WOD_FOR_CLASS: &str = "selected_wod_for_class";
    /// User preference scalars
    pub const PREF_NOTIF: &str = "pref_notif";
    pub const PREF_NOTIF_TIME: &str = "pref_notif_time";
    pub const PREF_DARK: &str = "pref_dark";

    /// Prefix of the per-user profile keys.
    pub const MEMBER_PROFILE_PREFIX: &str = "member_profile_";

    /// Dynamic per-user profile key: `member_profile_<email>`.
    pub fn member_profile(email: &str) -> String {
        format!("{MEMBER_PROFILE_PREFIX}{email}")
    }
}
