//! # Calculation Settings
//!
//! Tolerances and defaults shared by groups, profiles and front ends.
//! Settings are plain JSON; any field left out takes its default.
//!
//! ## Example
//!
//! ```rust
//! use weld_core::settings::CalcSettings;
//!
//! let settings = CalcSettings::from_json(r#"{ "circle_chords": 360 }"#).unwrap();
//! assert_eq!(settings.circle_chords, 360);
//! assert_eq!(settings.default_size, 0.25);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_positive, ensure_tolerance, WeldError, WeldResult};
use crate::segment::WeldType;

/// Global calculation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SettingsInput")]
pub struct CalcSettings {
    /// Placed lengths at or below this are degenerate
    pub degenerate_tolerance: f64,

    /// Number of chords used to approximate a circular weld
    pub circle_chords: usize,

    /// Weld size offered to new profiles
    pub default_size: f64,

    /// Weld type offered to new profiles
    pub default_weld_type: WeldType,
}

impl Default for CalcSettings {
    fn default() -> Self {
        CalcSettings {
            degenerate_tolerance: 1e-12,
            circle_chords: 100,
            default_size: 0.25,
            default_weld_type: WeldType::Fillet,
        }
    }
}

/// Wire form of [`CalcSettings`]; missing fields take their defaults.
#[derive(Deserialize)]
#[serde(default)]
struct SettingsInput {
    degenerate_tolerance: f64,
    circle_chords: usize,
    default_size: f64,
    default_weld_type: String,
}

impl Default for SettingsInput {
    fn default() -> Self {
        let defaults = CalcSettings::default();
        SettingsInput {
            degenerate_tolerance: defaults.degenerate_tolerance,
            circle_chords: defaults.circle_chords,
            default_size: defaults.default_size,
            default_weld_type: defaults.default_weld_type.to_string(),
        }
    }
}

impl TryFrom<SettingsInput> for CalcSettings {
    type Error = WeldError;

    fn try_from(input: SettingsInput) -> Result<Self, Self::Error> {
        let settings = CalcSettings {
            degenerate_tolerance: input.degenerate_tolerance,
            circle_chords: input.circle_chords,
            default_size: input.default_size,
            default_weld_type: input.default_weld_type.parse()?,
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl CalcSettings {
    /// Parse settings from JSON and validate them.
    pub fn from_json(json: &str) -> WeldResult<Self> {
        let input: SettingsInput = serde_json::from_str(json)?;
        CalcSettings::try_from(input)
    }

    /// Validate setting values.
    pub fn validate(&self) -> WeldResult<()> {
        ensure_tolerance("degenerate_tolerance", self.degenerate_tolerance)?;
        if self.circle_chords < 3 {
            return Err(WeldError::invalid_input(
                "circle_chords",
                self.circle_chords.to_string(),
                "A circle needs at least 3 chords",
            ));
        }
        ensure_positive("default_size", self.default_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = CalcSettings::default();
        assert_eq!(settings.circle_chords, 100);
        assert_eq!(settings.default_weld_type, WeldType::Fillet);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let json = r#"{ "default_size": 0.5, "default_weld_type": "groove" }"#;
        let settings = CalcSettings::from_json(json).unwrap();
        assert_eq!(settings.default_size, 0.5);
        assert_eq!(settings.default_weld_type, WeldType::Groove);
        assert_eq!(settings.circle_chords, 100);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = CalcSettings::from_json(r#"{ "circle_chords": 2 }"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let err = CalcSettings::from_json(r#"{ "degenerate_tolerance": -1.0 }"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let err = CalcSettings::from_json(r#"{ "default_weld_type": "plug" }"#).unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_WELD_TYPE");

        let err = CalcSettings::from_json("not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        // Plain serde deserialization runs the same checks
        assert!(serde_json::from_str::<CalcSettings>(r#"{ "circle_chords": 1 }"#).is_err());
        let settings: CalcSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, CalcSettings::default());
    }
}
