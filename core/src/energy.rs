//! Energy expenditure calculations
//!
//! Provides the Mifflin-St Jeor daily calorie estimate (TDEE) plus BMI,
//! based on a biometric profile.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Evidence-Based**: Formulas from peer-reviewed research
//! 3. **Clamped Output**: A calorie estimate is never negative

use serde::{Deserialize, Serialize};

use crate::profile::BiometricProfile;

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
///
/// The raw rate is returned unclamped; degenerate inputs (e.g. zero
/// weight with high age) can make it negative.
pub fn basal_metabolic_rate(profile: &BiometricProfile) -> f64 {
    10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * profile.age_years as f64
        + profile.sex.basal_offset()
}

/// Calculate Total Daily Energy Expenditure
///
/// TDEE = max(0, BMR × Activity Multiplier). The clamp applies after the
/// multiplier so a negative basal rate never surfaces as a negative
/// calorie figure.
pub fn estimate_tdee(profile: &BiometricProfile) -> f64 {
    let tdee = basal_metabolic_rate(profile) * profile.activity_level.multiplier();
    tdee.max(0.0)
}

/// TDEE calculation result with breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TdeeEstimate {
    /// Basal Metabolic Rate (unclamped)
    pub bmr: f64,
    /// Total Daily Energy Expenditure, clamped to >= 0
    pub tdee: f64,
    /// Activity multiplier used
    pub activity_multiplier: f64,
}

impl TdeeEstimate {
    /// The integer calorie string shown to the user
    ///
    /// Rounded half away from zero, matching the original display.
    pub fn display_calories(&self) -> String {
        format!("{:.0}", self.tdee.round())
    }
}

/// Calculate the complete TDEE breakdown for a profile
pub fn estimate(profile: &BiometricProfile) -> TdeeEstimate {
    let bmr = basal_metabolic_rate(profile);
    let multiplier = profile.activity_level.multiplier();

    TdeeEstimate {
        bmr,
        tdee: (bmr * multiplier).max(0.0),
        activity_multiplier: multiplier,
    }
}

/// Calculate Body Mass Index from weight and height
///
/// Formula: BMI = weight(kg) / height(m)², rounded to two decimals.
/// Returns `None` when either measurement is zero (missing inputs
/// default to zero at the intake boundary).
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if weight_kg <= 0.0 || height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some((weight_kg / (height_m * height_m) * 100.0).round() / 100.0)
}
