//! Biometric profile types
//!
//! The inputs to the calorie estimator: biological sex, activity level,
//! and the three body measurements. All measurements are stored in SI
//! units (kg, cm); conversion, if any, happens at the caller's boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::IntakeError;

/// Biological sex for the basal-rate offset term
/// Note: This is used for physiological calculations only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Constant offset term of the Mifflin-St Jeor equation
    pub fn basal_offset(&self) -> f64 {
        match self {
            Sex::Male => 5.0,
            Sex::Female => -161.0,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

impl std::str::FromStr for Sex {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            _ => Err(IntakeError::UnknownSex(s.to_string())),
        }
    }
}

/// Activity level for TDEE calculation
///
/// Five ordered levels, encoded 1-5 on the wire (form selectors submit
/// the numeric value). Levels outside 1-5 are rejected rather than
/// coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise or physical job
    SuperActive,
}

impl ActivityLevel {
    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::SuperActive => 1.9,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::LightlyActive => "Light exercise 1-3 days/week",
            ActivityLevel::ModeratelyActive => "Moderate exercise 3-5 days/week",
            ActivityLevel::VeryActive => "Hard exercise 6-7 days/week",
            ActivityLevel::SuperActive => "Very hard exercise or physical job",
        }
    }

    /// Decode the 1-5 wire encoding
    pub fn from_level(level: u8) -> Result<Self, IntakeError> {
        match level {
            1 => Ok(ActivityLevel::Sedentary),
            2 => Ok(ActivityLevel::LightlyActive),
            3 => Ok(ActivityLevel::ModeratelyActive),
            4 => Ok(ActivityLevel::VeryActive),
            5 => Ok(ActivityLevel::SuperActive),
            _ => Err(IntakeError::ActivityLevelOutOfRange(level)),
        }
    }

    /// The 1-5 wire encoding of this level
    pub fn level(&self) -> u8 {
        match self {
            ActivityLevel::Sedentary => 1,
            ActivityLevel::LightlyActive => 2,
            ActivityLevel::ModeratelyActive => 3,
            ActivityLevel::VeryActive => 4,
            ActivityLevel::SuperActive => 5,
        }
    }
}

impl TryFrom<u8> for ActivityLevel {
    type Error = IntakeError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        ActivityLevel::from_level(level)
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "1" | "sedentary" => Ok(ActivityLevel::Sedentary),
            "2" | "lightly_active" => Ok(ActivityLevel::LightlyActive),
            "3" | "moderately_active" => Ok(ActivityLevel::ModeratelyActive),
            "4" | "very_active" => Ok(ActivityLevel::VeryActive),
            "5" | "super_active" => Ok(ActivityLevel::SuperActive),
            _ => Err(IntakeError::UnknownActivityLevel(s.to_string())),
        }
    }
}

/// Profile data needed for the calorie estimate
///
/// Invariant: the numeric fields are finite and non-negative. The intake
/// layer substitutes zero for anything that fails to parse, so a profile
/// never carries NaN into the arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiometricProfile {
    /// Biological sex for the basal-rate offset
    pub sex: Sex,
    /// Activity level for TDEE
    pub activity_level: ActivityLevel,
    /// Current weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age_years: u32,
}
