// SPDX-License-Identifier: MIT

//! Per-user profile, keyed `member_profile_<email>`.

use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

use crate::models::field_error;

/// A numeric field that may be blank (the persisted blobs store `""` for
/// values the user has not filled in yet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrBlank {
    Number(f64),
    Blank(String),
}

impl NumberOrBlank {
    pub fn blank() -> Self {
        NumberOrBlank::Blank(String::new())
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NumberOrBlank::Number(n) => Some(*n),
            NumberOrBlank::Blank(_) => None,
        }
    }
}

impl Default for NumberOrBlank {
    fn default() -> Self {
        NumberOrBlank::blank()
    }
}

impl From<f64> for NumberOrBlank {
    fn from(n: f64) -> Self {
        NumberOrBlank::Number(n)
    }
}

/// Profile record. Created with defaults at signup, independently editable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub age: NumberOrBlank,
    #[serde(default)]
    pub height_cm: NumberOrBlank,
    #[serde(default)]
    pub weight_kg: NumberOrBlank,
    #[serde(default)]
    pub muscle_kg: NumberOrBlank,
    #[serde(default)]
    pub box_name: String,
}

impl Profile {
    /// Default profile created at signup: name from the nickname, every
    /// numeric field blank.
    pub fn default_for(nickname: &str) -> Self {
        Profile {
            name: nickname.to_string(),
            age: NumberOrBlank::blank(),
            height_cm: NumberOrBlank::blank(),
            weight_kg: NumberOrBlank::blank(),
            muscle_kg: NumberOrBlank::blank(),
            box_name: String::new(),
        }
    }

    /// Range checks for the filled-in numeric fields; blanks always pass.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        if let Some(age) = self.age.as_f64() {
            if age <= 0.0 || age >= 150.0 {
                return Err(field_error("age", "range"));
            }
        }
        if let Some(height) = self.height_cm.as_f64() {
            if height <= 0.0 || height >= 300.0 {
                return Err(field_error("heightCm", "range"));
            }
        }
        if let Some(weight) = self.weight_kg.as_f64() {
            if weight <= 0.0 || weight >= 500.0 {
                return Err(field_error("weightKg", "range"));
            }
        }
        if let Some(muscle) = self.muscle_kg.as_f64() {
            if muscle <= 0.0 || muscle >= 500.0 {
                return Err(field_error("muscleKg", "range"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_serialize_as_empty_string() {
        let profile = Profile::default_for("Al");
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["age"], "");
        assert_eq!(json["name"], "Al");
    }

    #[test]
    fn test_numeric_fields_roundtrip() {
        let json = r#"{"name":"Al","age":30,"heightCm":180,"weightKg":"","muscleKg":"","boxName":"CF Seoul"}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.age.as_f64(), Some(30.0));
        assert_eq!(profile.weight_kg.as_f64(), None);

        let back = serde_json::to_string(&profile).unwrap();
        let again: Profile = serde_json::from_str(&back).unwrap();
        assert_eq!(profile, again);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut profile = Profile::default_for("Al");
        profile.age = 200.0.into();
        assert!(profile.validate().is_err());

        profile.age = 34.0.into();
        assert!(profile.validate().is_ok());
    }
}
