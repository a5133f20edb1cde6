// SPDX-License-Identifier: MIT

//! Workout models: personal log entries and coach-published WODs.

use serde::{Deserialize, Serialize};

/// Recorded completion time, as entered (string fields straight from the
/// form; no zero-padding is applied on input).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WodTime {
    pub min: String,
    pub sec: String,
}

impl WodTime {
    /// Display form `MM:SS`.
    pub fn as_clock(&self) -> String {
        format!("{}:{}", self.min, self.sec)
    }
}

/// One movement with its load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSet {
    pub name: String,
    pub weight: f64,
}

/// A member's personal WOD log entry. Display order is newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WodEntry {
    pub id: String,
    /// ISO calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Free-form description of the workout performed
    pub text: String,
    pub time: WodTime,
    pub exercises: Vec<ExerciseSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Log entry before an id is assigned.
#[derive(Debug, Clone, Default)]
pub struct NewWodEntry {
    pub date: String,
    pub text: String,
    pub time: WodTime,
    pub exercises: Vec<ExerciseSet>,
    pub tags: Option<Vec<String>>,
}

/// Shallow-merge patch for a log entry.
#[derive(Debug, Clone, Default)]
pub struct WodEntryPatch {
    pub date: Option<String>,
    pub text: Option<String>,
    pub time: Option<WodTime>,
    pub exercises: Option<Vec<ExerciseSet>>,
    pub tags: Option<Vec<String>>,
}

impl WodEntry {
    pub fn apply(&mut self, patch: &WodEntryPatch) {
        if let Some(date) = &patch.date {
            self.date = date.clone();
        }
        if let Some(text) = &patch.text {
            self.text = text.clone();
        }
        if let Some(time) = &patch.time {
            self.time = time.clone();
        }
        if let Some(exercises) = &patch.exercises {
            self.exercises = exercises.clone();
        }
        if let Some(tags) = &patch.tags {
            self.tags = Some(tags.clone());
        }
    }
}

/// A coach-published WOD, referenced by classes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedWod {
    pub id: String,
    pub date: String,
    pub title: String,
    pub description: String,
}

/// Published WOD before an id is assigned.
#[derive(Debug, Clone, Default)]
pub struct NewSavedWod {
    pub date: String,
    pub title: String,
    pub description: String,
}

/// Shallow-merge patch for a published WOD.
#[derive(Debug, Clone, Default)]
pub struct SavedWodPatch {
    pub date: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl SavedWod {
    pub fn apply(&mut self, patch: &SavedWodPatch) {
        if let Some(date) = &patch.date {
            self.date = date.clone();
        }
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_clock_format() {
        let time = WodTime {
            min: "12".to_string(),
            sec: "34".to_string(),
        };
        assert_eq!(time.as_clock(), "12:34");
    }

    #[test]
    fn test_entry_without_tags_omits_field() {
        let entry = WodEntry {
            id: "w1".to_string(),
            date: "2024-01-10".to_string(),
            text: "5k row".to_string(),
            time: WodTime::default(),
            exercises: vec![],
            tags: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("tags").is_none());
    }

    #[test]
    fn test_entry_roundtrip() {
        let entry = WodEntry {
            id: "w1".to_string(),
            date: "2024-01-10".to_string(),
            text: "Fran".to_string(),
            time: WodTime {
                min: "4".to_string(),
                sec: "20".to_string(),
            },
            exercises: vec![ExerciseSet {
                name: "Thruster".to_string(),
                weight: 95.0,
            }],
            tags: Some(vec!["Interval".to_string(), "Machine".to_string()]),
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: WodEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
    }
}
