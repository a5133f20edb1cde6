// SPDX-License-Identifier: MIT

//! Session/auth store: the `token` / `current_user` / `token_expiry` keys
//! and the loggedOut -> loggedIn state machine over them.
//!
//! `restore` is the only transition evaluated outside an explicit call: it
//! runs at construction, whenever another context changes one of the three
//! keys, and when the window regains focus.

use std::sync::RwLock;

use crate::error::Result;
use crate::models::{User, UserPatch};
use crate::services::AuthService;
use crate::storage::{keys, Storage};
use crate::time_utils::now_millis;

/// Tokens are valid for a fixed year from login; there is no refresh.
const TOKEN_LIFETIME_MILLIS: i64 = 365 * 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, Default)]
struct SessionState {
    token: Option<String>,
    user: Option<User>,
    token_expiry: Option<i64>,
    logged_in: bool,
}

pub struct SessionStore {
    storage: Storage,
    state: RwLock<SessionState>,
}

impl SessionStore {
    pub fn new(storage: Storage) -> Self {
        let store = Self {
            storage,
            state: RwLock::new(SessionState::default()),
        };
        store.restore();
        store
    }

    /// Re-evaluate the session against storage. Idempotent and free of
    /// writes when state is already consistent.
    ///
    /// An expired token clears the session. A token+user pair without a
    /// stored expiry gets one backfilled at a full lifetime from now. A
    /// partial key set resolves to logged-out without touching storage:
    /// another context may be mid-way through writing the full set, and
    /// deleting here would race its remaining writes.
    pub fn restore(&self) {
        let token: Option<String> = self.storage.read_or(keys::TOKEN, None);
        let user: Option<User> = self.storage.read_or(keys::CURRENT_USER, None);
        let expiry: Option<i64> = self.storage.read_or(keys::TOKEN_EXPIRY, None);
        let now = now_millis();

        if let Some(expiry) = expiry {
            if expiry < now {
                tracing::debug!("Session token expired, clearing");
                self.clear_persisted();
                *self.state.write().expect("session state poisoned") = SessionState::default();
                return;
            }
        }

        if token.is_some() && user.is_some() {
            let expiry = match expiry {
                Some(expiry) => expiry,
                None => {
                    let backfilled = now + TOKEN_LIFETIME_MILLIS;
                    self.persist_expiry(backfilled);
                    backfilled
                }
            };
            *self.state.write().expect("session state poisoned") = SessionState {
                token,
                user,
                token_expiry: Some(expiry),
                logged_in: true,
            };
        } else {
            *self.state.write().expect("session state poisoned") = SessionState::default();
        }
    }

    /// Log in via the auth collaborator. On success the token, user snapshot
    /// and a fresh expiry are persisted; on failure the collaborator's error
    /// propagates unchanged and state is untouched.
    pub async fn login(&self, auth: &AuthService, email: &str, password: &str) -> Result<User> {
        let response = auth.login(email, password).await?;
        let expiry = now_millis() + TOKEN_LIFETIME_MILLIS;

        if let Err(err) = self.storage.write(keys::TOKEN, &response.access_token) {
            tracing::warn!(error = %err, "Failed to persist token");
        }
        if let Err(err) = self.storage.write(keys::CURRENT_USER, &response.user) {
            tracing::warn!(error = %err, "Failed to persist user snapshot");
        }
        self.persist_expiry(expiry);

        *self.state.write().expect("session state poisoned") = SessionState {
            token: Some(response.access_token),
            user: Some(response.user.clone()),
            token_expiry: Some(expiry),
            logged_in: true,
        };
        tracing::info!(email = %response.user.email, "Logged in");
        Ok(response.user)
    }

    /// Clear the session. Navigation back to the login page is the caller's
    /// concern (route guards react to the state change).
    pub fn logout(&self) {
        self.clear_persisted();
        *self.state.write().expect("session state poisoned") = SessionState::default();
        tracing::info!("Logged out");
    }

    /// Shallow-merge fields into the stored user snapshot. No-op while
    /// logged out.
    pub fn update_user(&self, patch: &UserPatch) {
        let mut state = self.state.write().expect("session state poisoned");
        if !state.logged_in {
            return;
        }
        if let Some(user) = state.user.as_mut() {
            user.apply(patch);
            let snapshot = user.clone();
            drop(state);
            if let Err(err) = self.storage.write(keys::CURRENT_USER, &snapshot) {
                tracing::warn!(error = %err, "Failed to persist user snapshot");
            }
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.read().expect("session state poisoned").logged_in
    }

    pub fn current_user(&self) -> Option<User> {
        self.state
            .read()
            .expect("session state poisoned")
            .user
            .clone()
    }

    pub fn token(&self) -> Option<String> {
        self.state
            .read()
            .expect("session state poisoned")
            .token
            .clone()
    }

    pub fn token_expiry(&self) -> Option<i64> {
        self.state
            .read()
            .expect("session state poisoned")
            .token_expiry
    }

    fn persist_expiry(&self, expiry: i64) {
        if let Err(err) = self.storage.write(keys::TOKEN_EXPIRY, &expiry) {
            tracing::warn!(error = %err, "Failed to persist token expiry");
        }
    }

    // Removes only keys that are present, so a restore triggered by this
    // removal in another context settles without publishing again.
    fn clear_persisted(&self) {
        for key in [keys::TOKEN, keys::CURRENT_USER, keys::TOKEN_EXPIRY] {
            let present = matches!(self.storage.read::<serde_json::Value>(key), Ok(Some(_)));
            if present {
                if let Err(err) = self.storage.remove(key) {
                    tracing::warn!(key, error = %err, "Failed to clear session key");
                }
            }
        }
    }
}
