// SPDX-License-Identifier: MIT

//! WOD classification client.
//!
//! Sends workout texts and loads to the clustering endpoint and gets label
//! tags back. The call is raced against a client-enforced timeout; the
//! loser's eventual settlement is discarded. On any failure the caller
//! substitutes the deterministic parity heuristic, so saving a log entry
//! always completes.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Heuristic tag pair for odd-positioned entries (1st, 3rd, 5th...).
pub const FALLBACK_TAG_PAIR_A: [&str; 2] = ["Interval", "Machine"];
/// Heuristic tag pair for even-positioned entries (2nd, 4th...).
pub const FALLBACK_TAG_PAIR_B: [&str; 2] = ["For Time", "Barbell"];

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    wods: &'a [String],
    weights: &'a [f64],
}

#[derive(Deserialize)]
struct ClassifyResponse {
    labels: Vec<String>,
}

/// Classification collaborator client.
#[derive(Clone)]
pub struct ClassifyService {
    http: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl ClassifyService {
    pub fn new(url: &str, timeout_ms: u64) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.to_string(),
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    /// Classify workout texts into label tags.
    pub async fn classify(&self, wods: &[String], weights: &[f64]) -> Result<Vec<String>> {
        let request = self
            .http
            .post(&self.url)
            .json(&ClassifyRequest { wods, weights })
            .send();

        let response = match tokio::time::timeout(self.timeout, request).await {
            Err(_) => {
                return Err(AppError::Classify(format!(
                    "timed out after {}ms",
                    self.timeout.as_millis()
                )))
            }
            Ok(Err(err)) => return Err(AppError::Classify(err.to_string())),
            Ok(Ok(response)) => response,
        };

        if !response.status().is_success() {
            return Err(AppError::Classify(format!(
                "unexpected status {}",
                response.status()
            )));
        }
        let body: ClassifyResponse = response
            .json()
            .await
            .map_err(|err| AppError::Classify(err.to_string()))?;
        Ok(body.labels)
    }

    /// Tags for a new log entry: remote labels when the endpoint answers in
    /// time, the parity heuristic otherwise. Never fails.
    pub async fn tags_for_new_entry(
        &self,
        text: &str,
        weight: f64,
        existing_entries: usize,
    ) -> Vec<String> {
        match self.classify(&[text.to_string()], &[weight]).await {
            Ok(labels) if !labels.is_empty() => labels,
            Ok(_) => fallback_tags(existing_entries)
                .iter()
                .map(|t| t.to_string())
                .collect(),
            Err(err) => {
                tracing::debug!(error = %err, "Classification unavailable, using heuristic tags");
                fallback_tags(existing_entries)
                    .iter()
                    .map(|t| t.to_string())
                    .collect()
            }
        }
    }
}

/// Deterministic alternating heuristic: the new entry's 1-based position
/// among existing entries picks the pair.
pub fn fallback_tags(existing_entries: usize) -> [&'static str; 2] {
    let position = existing_entries + 1;
    if position % 2 == 1 {
        FALLBACK_TAG_PAIR_A
    } else {
        FALLBACK_TAG_PAIR_B
    }
}
