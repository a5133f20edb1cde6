// SPDX-License-Identifier: MIT

//! Auth API client with a local mock fallback.
//!
//! Signup and login first try the HTTP endpoint; any transport or server
//! failure falls back to the local user directory. Callers cannot tell the
//! two outcomes apart, which is part of the contract: the app works
//! identically with and without a server.
//!
//! Passwords are plaintext and the token is an opaque random string. This is
//! mock-grade by design, not a security layer.

use std::sync::Arc;

use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::error::{AppError, Result};
use crate::models::field_error;
use crate::models::user::{normalize_email, normalize_nickname};
use crate::models::{Profile, Role, User, UserAccount};
use crate::stores::{ProfileStore, UserStore};

/// Signup form input.
#[derive(Debug, Clone, Validate)]
pub struct SignupInput {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
    pub nickname: String,
    pub role: Role,
}

impl SignupInput {
    /// Derive-based checks plus the trimmed-nickname minimum.
    pub fn validate_fields(&self) -> std::result::Result<(), ValidationErrors> {
        self.validate()?;
        if self.nickname.trim().chars().count() < 2 {
            return Err(field_error("nickname", "length"));
        }
        Ok(())
    }
}

/// Successful login payload, real or mock.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
}

#[derive(Serialize)]
struct SignupBody<'a> {
    email: &'a str,
    password: &'a str,
    nickname: &'a str,
    role: Role,
}

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

/// Auth collaborator client.
#[derive(Clone)]
pub struct AuthService {
    http: reqwest::Client,
    base_url: String,
    users: Arc<UserStore>,
    profiles: Arc<ProfileStore>,
}

impl AuthService {
    pub fn new(base_url: &str, users: Arc<UserStore>, profiles: Arc<ProfileStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            users,
            profiles,
        }
    }

    /// Register an account and create the default profile for it.
    pub async fn signup(&self, input: SignupInput) -> Result<()> {
        input.validate_fields()?;
        let email = normalize_email(&input.email);
        let nickname = normalize_nickname(&input.nickname);

        let url = format!("{}/auth/signup", self.base_url);
        let body = SignupBody {
            email: &email,
            password: &input.password,
            nickname: &nickname,
            role: input.role,
        };
        match self.http.post(&url).json(&body).send().await {
            Ok(response) if response.status().is_success() => {
                tracing::debug!(email = %email, "Signed up via auth API");
            }
            _ => {
                tracing::debug!(email = %email, "Auth API unavailable, registering locally");
                self.users.add(UserAccount {
                    email: email.clone(),
                    password: input.password.clone(),
                    nickname: nickname.clone(),
                    role: input.role,
                })?;
            }
        }

        // Profiles are local state either way; the server does not hold them.
        if self.profiles.get(&email).is_none() {
            self.profiles.set(&email, Profile::default_for(&nickname))?;
        }
        Ok(())
    }

    /// Authenticate, returning a bearer token and user snapshot.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let email = normalize_email(email);
        let url = format!("{}/auth/login", self.base_url);
        let body = LoginBody {
            email: &email,
            password,
        };
        if let Ok(response) = self.http.post(&url).json(&body).send().await {
            if response.status().is_success() {
                return response
                    .json::<LoginResponse>()
                    .await
                    .map_err(|err| AppError::AuthApi(err.to_string()));
            }
        }

        tracing::debug!(email = %email, "Auth API unavailable, checking local directory");
        self.mock_login(&email, password)
    }

    fn mock_login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let account = self
            .users
            .find_by_email(email)
            .filter(|account| account.password == password)
            .ok_or(AppError::InvalidCredentials)?;

        Ok(LoginResponse {
            access_token: mock_token(),
            user: User::from(&account),
        })
    }
}

/// Opaque random bearer token for mock logins.
fn mock_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> SignupInput {
        SignupInput {
            email: "a@b.com".to_string(),
            password: "secret1".to_string(),
            nickname: "Al".to_string(),
            role: Role::Member,
        }
    }

    #[test]
    fn test_valid_signup_input() {
        assert!(valid_input().validate_fields().is_ok());
    }

    #[test]
    fn test_short_password_rejected() {
        let mut input = valid_input();
        input.password = "12345".to_string();
        assert!(input.validate_fields().is_err());
    }

    #[test]
    fn test_malformed_email_rejected() {
        let mut input = valid_input();
        input.email = "not-an-email".to_string();
        assert!(input.validate_fields().is_err());
    }

    #[test]
    fn test_one_char_nickname_rejected() {
        let mut input = valid_input();
        input.nickname = " A ".to_string();
        assert!(input.validate_fields().is_err());
    }

    #[test]
    fn test_mock_tokens_are_distinct() {
        assert_eq!(mock_token().len(), 32);
        assert_ne!(mock_token(), mock_token());
    }
}
