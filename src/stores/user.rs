// SPDX-License-Identifier: MIT

//! User directory, backed by the `users` key. The mock auth fallback reads
//! and writes accounts here.

use crate::error::{AppError, Result};
use crate::models::user::normalize_email;
use crate::models::UserAccount;
use crate::storage::{keys, Storage};
use crate::stores::list::ListCache;

pub struct UserStore {
    inner: ListCache<UserAccount>,
}

impl UserStore {
    pub fn new(storage: Storage) -> Self {
        Self {
            inner: ListCache::new(storage, keys::USERS),
        }
    }

    /// Register an account. Email is the unique key across the directory.
    pub fn add(&self, account: UserAccount) -> Result<()> {
        let email = normalize_email(&account.email);
        if self.find_by_email(&email).is_some() {
            return Err(AppError::EmailTaken(email));
        }
        self.inner.mutate(|items| items.push(account));
        Ok(())
    }

    pub fn find_by_email(&self, email: &str) -> Option<UserAccount> {
        let email = normalize_email(email);
        self.inner.find(|u| normalize_email(&u.email) == email)
    }

    pub fn get_all(&self) -> Vec<UserAccount> {
        self.inner.snapshot()
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
