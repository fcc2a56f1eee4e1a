//! Game settings chosen during setup
//!
//! Settings outlive individual rounds: the impostor count, word category and
//! discussion length stay as they were when the game returns home.

use std::time::Duration;

use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        roster::MAX_IMPOSTOR_COUNT,
        timer::{DEFAULT_ROUND_DURATION, MAX_ROUND_DURATION, MIN_ROUND_DURATION},
    },
    content::Category,
};

/// Validation result type for duration validation
type ValidationResult = garde::Result;

/// Validates that a duration falls within specified bounds.
///
/// This is a custom validation function for use with the `garde` crate.
/// It checks if the duration in seconds is within the inclusive range
/// defined by `MIN_SECONDS` and `MAX_SECONDS`.
///
/// # Errors
///
/// Returns a `garde::Error` if the duration is outside the specified bounds.
pub fn validate_duration<const MIN_SECONDS: u64, const MAX_SECONDS: u64>(
    val: &Duration,
    _ctx: &(),
) -> ValidationResult {
    if (MIN_SECONDS..=MAX_SECONDS).contains(&val.as_secs()) {
        Ok(())
    } else {
        Err(garde::Error::new(format!(
            "outside of bounds [{MIN_SECONDS},{MAX_SECONDS}]",
        )))
    }
}

/// Setup choices that persist between rounds
#[serde_with::serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Settings {
    /// Desired number of impostors, clamped to the roster at deal time
    #[garde(range(min = 1, max = MAX_IMPOSTOR_COUNT))]
    pub impostor_count: usize,
    /// Word category for Impostor Word
    #[garde(skip)]
    #[serde(default)]
    pub category: Category,
    /// Length of the discussion countdown
    #[garde(custom(validate_duration::<MIN_ROUND_DURATION, MAX_ROUND_DURATION>))]
    #[serde_as(as = "serde_with::DurationSeconds<u64>")]
    pub round_duration: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            impostor_count: 1,
            category: Category::RandomMix,
            round_duration: Duration::from_secs(DEFAULT_ROUND_DURATION),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.impostor_count, 1);
        assert_eq!(settings.category, Category::RandomMix);
        assert_eq!(settings.round_duration.as_secs(), DEFAULT_ROUND_DURATION);
    }

    #[test]
    fn test_impostor_count_bounds() {
        let mut settings = Settings::default();
        settings.impostor_count = 0;
        assert!(settings.validate().is_err());

        settings.impostor_count = MAX_IMPOSTOR_COUNT;
        assert!(settings.validate().is_ok());

        settings.impostor_count = MAX_IMPOSTOR_COUNT + 1;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_round_duration_bounds() {
        let mut settings = Settings::default();
        settings.round_duration = Duration::from_secs(MIN_ROUND_DURATION - 1);
        assert!(settings.validate().is_err());

        settings.round_duration = Duration::from_secs(MIN_ROUND_DURATION);
        assert!(settings.validate().is_ok());

        settings.round_duration = Duration::from_secs(MAX_ROUND_DURATION + 1);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_duration_message() {
        let err = validate_duration::<5, 10>(&Duration::from_secs(11), &()).unwrap_err();
        assert!(err.to_string().contains("[5,10]"));
        assert!(validate_duration::<5, 10>(&Duration::from_secs(10), &()).is_ok());
    }

    #[test]
    fn test_settings_json() {
        let json = r#"{"impostor_count":2,"category":"Food","round_duration":90}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.impostor_count, 2);
        assert_eq!(settings.category, Category::Food);
        assert_eq!(settings.round_duration, Duration::from_secs(90));

        let back = serde_json::to_string(&settings).unwrap();
        assert!(back.contains("\"round_duration\":90"));
    }

    #[test]
    fn test_settings_json_category_defaults() {
        let json = r#"{"impostor_count":1,"round_duration":120}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.category, Category::RandomMix);
    }
}
