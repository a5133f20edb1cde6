// SPDX-License-Identifier: MIT

//! Per-user profiles under dynamic `member_profile_<email>` keys.
//!
//! Lookup is cache-then-storage: a miss falls through to the persisted key
//! and backfills the cache, so profiles written by another context appear
//! without an explicit reload.

use dashmap::DashMap;

use crate::error::Result;
use crate::models::Profile;
use crate::storage::{keys, Storage};

pub struct ProfileStore {
    storage: Storage,
    cache: DashMap<String, Profile>,
}

impl ProfileStore {
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            cache: DashMap::new(),
        }
    }

    pub fn get(&self, email: &str) -> Option<Profile> {
        if let Some(profile) = self.cache.get(email) {
            return Some(profile.clone());
        }
        let profile: Option<Profile> = self.storage.read_or(&keys::member_profile(email), None);
        if let Some(profile) = &profile {
            self.cache.insert(email.to_string(), profile.clone());
        }
        profile
    }

    /// Validate and persist a profile.
    pub fn set(&self, email: &str, profile: Profile) -> Result<()> {
        profile.validate()?;
        if let Err(err) = self.storage.write(&keys::member_profile(email), &profile) {
            tracing::warn!(email, error = %err, "Failed to persist profile");
        }
        self.cache.insert(email.to_string(), profile);
        Ok(())
    }

    pub fn remove(&self, email: &str) {
        if let Err(err) = self.storage.remove(&keys::member_profile(email)) {
            tracing::warn!(email, error = %err, "Failed to remove profile");
        }
        self.cache.remove(email);
    }

    /// Drop the cached copy so the next `get` re-reads storage (foreign
    /// change-event handler).
    pub fn invalidate(&self, email: &str) {
        self.cache.remove(email);
    }

    /// Scan storage for every profile key.
    pub fn get_all(&self) -> Vec<(String, Profile)> {
        self.storage
            .keys_with_prefix(keys::MEMBER_PROFILE_PREFIX)
            .into_iter()
            .filter_map(|key| {
                let email = key.strip_prefix(keys::MEMBER_PROFILE_PREFIX)?.to_string();
                let profile = self.get(&email)?;
                Some((email, profile))
            })
            .collect()
    }
}
