// SPDX-License-Identifier: MIT

//! Data models for the application.
//!
//! Serialized field names are a compatibility surface with the persisted
//! namespace (camelCase where the original blobs used it).

pub mod class;
pub mod notification;
pub mod profile;
pub mod reservation;
pub mod user;
pub mod wod;

pub use class::{Class, ClassPatch, NewClass};
pub use notification::{NewNotification, NotificationItem, NotificationTarget};
pub use profile::{NumberOrBlank, Profile};
pub use reservation::Reservation;
pub use user::{Role, User, UserAccount, UserPatch};
pub use wod::{ExerciseSet, NewSavedWod, NewWodEntry, SavedWod, SavedWodPatch, WodEntry, WodEntryPatch, WodTime};

use validator::{ValidationError, ValidationErrors};

/// Build a single-field validation failure (for checks the derive macro
/// cannot express).
pub(crate) fn field_error(field: &'static str, code: &'static str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.add(field, ValidationError::new(code));
    errors
}
