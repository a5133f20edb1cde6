// SPDX-License-Identifier: MIT

//! Application error types.
//!
//! Storage problems get their own type so stores can log and fall back to a
//! safe default instead of failing the caller; everything else surfaces
//! through [`AppError`].

/// Errors from the key-value storage layer.
///
/// Stores treat these as recoverable: a corrupt blob resolves to an empty
/// collection, a failed write is logged and the in-memory cache keeps the
/// new state until the next successful write.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("serialization failed for key '{key}': {source}")]
    Serde {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("backend error for key '{key}': {reason}")]
    Backend { key: String, reason: String },
}

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Account already exists: {0}")]
    EmailTaken(String),

    #[error("Reservation already exists for this class and date")]
    DuplicateReservation,

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Auth API error: {0}")]
    AuthApi(String),

    #[error("Classification error: {0}")]
    Classify(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for store and service operations.
pub type Result<T> = std::result::Result<T, AppError>;
