// SPDX-License-Identifier: MIT

//! Reservations, backed by the `reserved_wods` key.
//!
//! Identity is the `(wodId, date, userId)` triple; duplicates are rejected
//! rather than tolerated.

use crate::error::{AppError, Result};
use crate::models::Reservation;
use crate::storage::{keys, Storage};
use crate::stores::list::ListCache;

pub struct ReservationStore {
    inner: ListCache<Reservation>,
}

impl ReservationStore {
    pub fn new(storage: Storage) -> Self {
        Self {
            inner: ListCache::new(storage, keys::RESERVED_WODS),
        }
    }

    /// Reserve a seat. Fails if this member already holds a reservation for
    /// the same WOD and date.
    pub fn add(&self, reservation: Reservation) -> Result<()> {
        let taken = self
            .inner
            .find(|r| r.matches(&reservation.wod_id, &reservation.date, &reservation.user_id))
            .is_some();
        if taken {
            return Err(AppError::DuplicateReservation);
        }
        self.inner.mutate(|items| items.push(reservation));
        Ok(())
    }

    /// Cancel one member's reservation; other users and dates on the same
    /// WOD are untouched.
    pub fn remove(&self, wod_id: &str, date: &str, user_id: &str) {
        self.inner
            .mutate(|items| items.retain(|r| !r.matches(wod_id, date, user_id)));
    }

    pub fn get_all(&self) -> Vec<Reservation> {
        self.inner.snapshot()
    }

    pub fn by_date(&self, date: &str) -> Vec<Reservation> {
        self.inner
            .snapshot()
            .into_iter()
            .filter(|r| r.date == date)
            .collect()
    }

    pub fn by_user(&self, user_id: &str) -> Vec<Reservation> {
        self.inner
            .snapshot()
            .into_iter()
            .filter(|r| r.user_id == user_id)
            .collect()
    }

    pub fn by_date_and_user(&self, date: &str, user_id: &str) -> Vec<Reservation> {
        self.inner
            .snapshot()
            .into_iter()
            .filter(|r| r.date == date && r.user_id == user_id)
            .collect()
    }

    pub fn reload(&self) {
        self.inner.reload();
    }
}
