//! Form intake boundary
//!
//! Turns the five raw fields of a TDEE form submission into a
//! [`BiometricProfile`]. The numeric fields follow the original widget's
//! silent-default policy: anything empty, unparsable, non-finite, or
//! negative becomes zero, with no error and no logging. The two selector
//! fields (sex, activity level) are enum choices and must parse; an
//! unknown selector value is rejected rather than coerced.

use serde::{Deserialize, Serialize};

use crate::energy;
use crate::errors::IntakeError;
use crate::profile::{ActivityLevel, BiometricProfile, Sex};

/// Parse a raw numeric field, substituting zero on any failure
pub fn parse_or_zero_f64(raw: Option<&str>) -> f64 {
    let value = raw
        .map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(0.0);
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        0.0
    }
}

/// Parse a raw integer field, substituting zero on any failure
pub fn parse_or_zero_u32(raw: Option<&str>) -> u32 {
    raw.map(str::trim)
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(0)
}

/// One TDEE form submission, fields as the form posts them
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TdeeSubmission {
    /// "male" or "female"
    pub gender: Option<String>,
    /// "1".."5", or the snake_case level name
    pub activity_level: Option<String>,
    /// Weight in kg, free text
    pub weight: Option<String>,
    /// Height in cm, free text
    pub height: Option<String>,
    /// Age in years, free text
    pub age: Option<String>,
}

impl TdeeSubmission {
    /// Build a profile from the raw fields
    ///
    /// Numeric fields default to zero; missing or unknown selector
    /// values fail with an [`IntakeError`].
    pub fn to_profile(&self) -> Result<BiometricProfile, IntakeError> {
        let sex = self
            .gender
            .as_deref()
            .ok_or_else(|| IntakeError::UnknownSex(String::new()))?
            .parse::<Sex>()?;
        let activity_level = self
            .activity_level
            .as_deref()
            .ok_or_else(|| IntakeError::UnknownActivityLevel(String::new()))?
            .parse::<ActivityLevel>()?;

        Ok(BiometricProfile {
            sex,
            activity_level,
            weight_kg: parse_or_zero_f64(self.weight.as_deref()),
            height_cm: parse_or_zero_f64(self.height.as_deref()),
            age_years: parse_or_zero_u32(self.age.as_deref()),
        })
    }
}

/// Estimate daily calories for a form submission
///
/// Returns the integer calorie string the caller writes into its display
/// surface.
pub fn estimate_submission(submission: &TdeeSubmission) -> Result<String, IntakeError> {
    let profile = submission.to_profile()?;
    Ok(energy::estimate(&profile).display_calories())
}
