// SPDX-License-Identifier: MIT

//! Shared helpers for date/time formatting.

use chrono::{DateTime, Local, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Current time as epoch milliseconds (token expiry arithmetic).
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Today's calendar date in the local timezone, `YYYY-MM-DD`.
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Display form of a calendar date: `2024-01-10` -> `2024.01.10`.
pub fn format_display_date(date: &str) -> String {
    date.replace('-', ".")
}

/// Whether a `YYYY-MM-DD` date string is today (local time).
pub fn is_today(date: &str) -> bool {
    date == today()
}
