// SPDX-License-Identifier: MIT

//! WOD-Tracker: client-state synchronization layer for a box/gym tracking app.
//!
//! Members log workouts, reserve classes, and coaches publish WODs. All state
//! lives in a shared key-value namespace (one JSON blob per key); this crate
//! provides the typed domain stores over that namespace, the change
//! propagation that keeps caches in other contexts fresh, and the two
//! external HTTP collaborators (auth with a local mock fallback, and the
//! WOD classification endpoint with a heuristic fallback).

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod stores;
pub mod sync;
pub mod time_utils;

use std::sync::Arc;

use config::Config;
use services::{AuthService, ClassifyService};
use storage::{FileBackend, MemoryBackend, Storage, StorageBackend};
use stores::Stores;
use sync::ChangeBus;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub storage: Storage,
    pub stores: Stores,
    pub auth: AuthService,
    pub classifier: ClassifyService,
}

impl AppState {
    /// Build the full state from a config: backend, change bus, stores and
    /// collaborator clients.
    ///
    /// A configured storage path selects the file backend; otherwise state is
    /// kept in memory (useful for tests and ephemeral sessions).
    pub fn from_config(config: Config) -> Self {
        let backend: Arc<dyn StorageBackend> = match &config.storage_path {
            Some(path) => Arc::new(FileBackend::new(path.clone())),
            None => Arc::new(MemoryBackend::new()),
        };
        let bus = ChangeBus::new();
        let storage = Storage::new(backend, bus);
        let stores = Stores::new(storage.clone());
        let auth = AuthService::new(
            &config.auth_base_url,
            stores.users.clone(),
            stores.profiles.clone(),
        );
        let classifier = ClassifyService::new(&config.classify_url, config.classify_timeout_ms);

        AppState {
            config,
            storage,
            stores,
            auth,
            classifier,
        }
    }
}

/// Initialize tracing with an env-filtered fmt layer.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wod_tracker=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
