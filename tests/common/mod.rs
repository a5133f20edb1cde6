// SPDX-License-Identifier: MIT

use std::sync::Arc;

use wod_tracker::config::Config;
use wod_tracker::storage::{MemoryBackend, Storage, StorageBackend};
use wod_tracker::stores::Stores;
use wod_tracker::sync::ChangeBus;
use wod_tracker::AppState;

/// Full app state over in-memory storage, with collaborator endpoints
/// pointing at an unreachable address so HTTP calls exercise their
/// fallbacks.
#[allow(dead_code)]
pub fn test_state() -> AppState {
    AppState::from_config(Config::test_default())
}

/// A fresh in-memory storage context.
#[allow(dead_code)]
pub fn test_storage() -> Storage {
    Storage::new(Arc::new(MemoryBackend::new()), ChangeBus::new())
}

/// Two store contexts ("tabs") sharing one backend and one change bus.
#[allow(dead_code)]
pub fn twin_contexts() -> (Stores, Storage, Stores, Storage) {
    let backend: Arc<dyn StorageBackend> = Arc::new(MemoryBackend::new());
    let bus = ChangeBus::new();
    let storage_a = Storage::new(backend.clone(), bus.clone());
    let storage_b = Storage::new(backend, bus);
    let stores_a = Stores::new(storage_a.clone());
    let stores_b = Stores::new(storage_b.clone());
    (stores_a, storage_a, stores_b, storage_b)
}
