// SPDX-License-Identifier: MIT

//! A member's claim on a seat for a WOD on a given date.

use serde::{Deserialize, Serialize};

/// Reservation record. No id of its own; identity is the
/// `(wodId, date, userId)` triple, which is unique among active
/// reservations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub wod_id: String,
    /// ISO calendar date, `YYYY-MM-DD`
    pub date: String,
    /// The reserving member's email
    pub user_id: String,
    /// Denormalized for roster display
    pub user_nickname: String,
}

impl Reservation {
    pub fn matches(&self, wod_id: &str, date: &str, user_id: &str) -> bool {
        self.wod_id == wod_id && self.date == date && self.user_id == user_id
    }
}
