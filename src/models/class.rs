// SPDX-License-Identifier: MIT

//! Scheduled, capacity-limited class tied to one published WOD.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::models::field_error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub id: String,
    /// ISO calendar date, `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub location: String,
    /// Reference to `SavedWod.id`. May dangle after WOD deletion; lookups
    /// fall back to a placeholder rather than failing.
    pub wod_id: String,
    pub capacity: u32,
}

/// Class before an id is assigned.
#[derive(Debug, Clone, Default, Validate)]
pub struct NewClass {
    pub date: String,
    pub time: String,
    pub location: String,
    pub wod_id: String,
    #[validate(range(min = 1, max = 100))]
    pub capacity: u32,
}

impl NewClass {
    /// Full input validation: capacity range plus the non-derivable checks.
    pub fn validate_fields(&self) -> Result<(), ValidationErrors> {
        self.validate()?;
        if self.date.trim().is_empty() {
            return Err(field_error("date", "required"));
        }
        if self.time.trim().is_empty() {
            return Err(field_error("time", "required"));
        }
        Ok(())
    }
}

/// Shallow-merge patch for a class.
#[derive(Debug, Clone, Default)]
pub struct ClassPatch {
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub wod_id: Option<String>,
    pub capacity: Option<u32>,
}

impl Class {
    pub fn apply(&mut self, patch: &ClassPatch) {
        if let Some(date) = &patch.date {
            self.date = date.clone();
        }
        if let Some(time) = &patch.time {
            self.time = time.clone();
        }
        if let Some(location) = &patch.location {
            self.location = location.clone();
        }
        if let Some(wod_id) = &patch.wod_id {
            self.wod_id = wod_id.clone();
        }
        if let Some(capacity) = patch.capacity {
            self.capacity = capacity;
        }
    }
}
