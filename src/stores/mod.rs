// SPDX-License-Identifier: MIT

//! Typed domain stores over the shared storage namespace.
//!
//! Each store owns its key(s), keeps an in-memory cache for synchronous
//! reads, and re-synchronizes when the underlying key changes elsewhere.
//! [`Stores::new`] wires one bus listener per context that dispatches change
//! events to the matching store, honoring the storage-event vs custom-signal
//! delivery rules.

mod list;

pub mod class;
pub mod handoff;
pub mod notification;
pub mod prefs;
pub mod profile;
pub mod reservation;
pub mod saved_wod;
pub mod session;
pub mod user;
pub mod wod_log;

pub use class::ClassStore;
pub use handoff::HandoffStore;
pub use notification::NotificationStore;
pub use prefs::PreferenceStore;
pub use profile::ProfileStore;
pub use reservation::ReservationStore;
pub use saved_wod::{SavedWodStore, DELETED_WOD_PLACEHOLDER};
pub use session::SessionStore;
pub use user::UserStore;
pub use wod_log::WodLogStore;

use std::sync::Arc;

use crate::storage::{keys, Storage};

/// One authoritative in-memory view per entity type, shared across the
/// whole context.
pub struct Stores {
    pub users: Arc<UserStore>,
    pub wod_log: Arc<WodLogStore>,
    pub saved_wods: Arc<SavedWodStore>,
    pub classes: Arc<ClassStore>,
    pub reservations: Arc<ReservationStore>,
    pub notifications: Arc<NotificationStore>,
    pub profiles: Arc<ProfileStore>,
    pub session: Arc<SessionStore>,
    pub prefs: Arc<PreferenceStore>,
    pub handoff: Arc<HandoffStore>,
}

impl Stores {
    /// Construct every store over `storage` and subscribe them to change
    /// events on its bus.
    pub fn new(storage: Storage) -> Self {
        let stores = Stores {
            users: Arc::new(UserStore::new(storage.clone())),
            wod_log: Arc::new(WodLogStore::new(storage.clone())),
            saved_wods: Arc::new(SavedWodStore::new(storage.clone())),
            classes: Arc::new(ClassStore::new(storage.clone())),
            reservations: Arc::new(ReservationStore::new(storage.clone())),
            notifications: Arc::new(NotificationStore::new(storage.clone())),
            profiles: Arc::new(ProfileStore::new(storage.clone())),
            session: Arc::new(SessionStore::new(storage.clone())),
            prefs: Arc::new(PreferenceStore::new(storage.clone())),
            handoff: Arc::new(HandoffStore::new(storage.clone())),
        };
        stores.wire(&storage);
        stores
    }

    /// Window-focus hook: unconditionally re-check the session and the WOD
    /// lists, covering edits that never produced an observable event.
    pub fn on_focus(&self) {
        self.session.restore();
        self.wod_log.reload();
        self.saved_wods.reload();
    }

    fn wire(&self, storage: &Storage) {
        let origin = storage.origin();
        let users = self.users.clone();
        let wod_log = self.wod_log.clone();
        let saved_wods = self.saved_wods.clone();
        let classes = self.classes.clone();
        let reservations = self.reservations.clone();
        let notifications = self.notifications.clone();
        let profiles = self.profiles.clone();
        let session = self.session.clone();

        storage.bus().subscribe(move |event| {
            if !event.delivered_to(origin) {
                return;
            }
            match event.key.as_str() {
                keys::USERS => users.reload(),
                keys::WODS => wod_log.reload(),
                keys::WOD_ADMIN_SAVED => saved_wods.reload(),
                keys::ADMIN_CLASSES => classes.reload(),
                keys::RESERVED_WODS => reservations.reload(),
                keys::NOTIFICATIONS => notifications.reload(),
                keys::TOKEN | keys::CURRENT_USER | keys::TOKEN_EXPIRY => session.restore(),
                key => {
                    if let Some(email) = key.strip_prefix(keys::MEMBER_PROFILE_PREFIX) {
                        profiles.invalidate(email);
                    }
                }
            }
        });
    }
}
