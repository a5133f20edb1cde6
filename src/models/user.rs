// SPDX-License-Identifier: MIT

//! User models: the directory record and the session snapshot.

use serde::{Deserialize, Serialize};

/// Member vs coach. Coaches publish WODs and manage classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Member,
    Coach,
}

/// Directory record stored under the `users` key.
///
/// The password is plaintext by contract: the auth layer is mock-grade and
/// explicitly not a security design to preserve or harden.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub email: String,
    pub password: String,
    pub nickname: String,
    #[serde(default)]
    pub role: Role,
}

/// Denormalized session snapshot stored under `current_user`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub nickname: String,
    #[serde(default)]
    pub role: Role,
}

impl From<&UserAccount> for User {
    fn from(account: &UserAccount) -> Self {
        User {
            email: account.email.clone(),
            nickname: account.nickname.clone(),
            role: account.role,
        }
    }
}

/// Shallow-merge patch for the session snapshot.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub nickname: Option<String>,
    pub role: Option<Role>,
}

impl User {
    pub fn apply(&mut self, patch: &UserPatch) {
        if let Some(nickname) = &patch.nickname {
            self.nickname = nickname.clone();
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
    }
}

/// Canonical email form: trimmed, lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Canonical nickname form: trimmed.
pub fn normalize_nickname(nickname: &str) -> String {
    nickname.trim().to_string()
}
