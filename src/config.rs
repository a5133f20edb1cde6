// SPDX-License-Identifier: MIT

//! Application configuration loaded from environment variables.
//!
//! Every setting has a development default; nothing here is secret. The auth
//! token is an opaque mock string by contract, so there is no signing key to
//! manage.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the auth API (`/auth/signup`, `/auth/login`)
    pub auth_base_url: String,
    /// Full URL of the WOD classification endpoint
    pub classify_url: String,
    /// Client-enforced timeout for the classification call, in milliseconds
    pub classify_timeout_ms: u64,
    /// Path of the shared storage file; `None` keeps state in memory
    pub storage_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables (reads `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            auth_base_url: env::var("AUTH_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            classify_url: env::var("CLASSIFY_URL")
                .unwrap_or_else(|_| "http://localhost:3000/wod/cluster".to_string()),
            classify_timeout_ms: match env::var("CLASSIFY_TIMEOUT_MS") {
                Ok(raw) => raw
                    .parse()
                    .map_err(|_| ConfigError::Invalid("CLASSIFY_TIMEOUT_MS", raw))?,
                Err(_) => 2000,
            },
            storage_path: env::var("STORAGE_PATH").ok().map(PathBuf::from),
        })
    }

    /// Default config for testing: in-memory storage, unreachable endpoints
    /// (so collaborator calls exercise their fallback paths), short timeout.
    pub fn test_default() -> Self {
        Self {
            auth_base_url: "http://127.0.0.1:1".to_string(),
            classify_url: "http://127.0.0.1:1/wod/cluster".to_string(),
            classify_timeout_ms: 200,
            storage_path: None,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
