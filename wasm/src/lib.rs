//! DietCalc WASM Module
//!
//! This crate provides WebAssembly bindings for the calorie estimator so
//! a browser form widget can call it directly.

use wasm_bindgen::prelude::*;

use dietcalc_core::{
    energy, ActivityLevel, BiometricProfile, Sex, TdeeSubmission,
};

fn profile(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    is_male: bool,
    activity_level: u8,
) -> Result<BiometricProfile, JsError> {
    let activity_level = ActivityLevel::from_level(activity_level)?;
    Ok(BiometricProfile {
        sex: if is_male { Sex::Male } else { Sex::Female },
        activity_level,
        weight_kg,
        height_cm,
        age_years,
    })
}

/// Calculate TDEE (Total Daily Energy Expenditure)
/// Uses the Mifflin-St Jeor equation; the result is clamped to >= 0.
#[wasm_bindgen]
pub fn estimate_tdee(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    is_male: bool,
    activity_level: u8,
) -> Result<f64, JsError> {
    let profile = profile(weight_kg, height_cm, age_years, is_male, activity_level)?;
    Ok(energy::estimate_tdee(&profile))
}

/// Full TDEE breakdown (BMR, TDEE, multiplier) as a JSON string
#[wasm_bindgen]
pub fn estimate_breakdown(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    is_male: bool,
    activity_level: u8,
) -> Result<String, JsError> {
    let profile = profile(weight_kg, height_cm, age_years, is_male, activity_level)?;
    Ok(serde_json::to_string(&energy::estimate(&profile))?)
}

/// Estimate daily calories from raw form field values
///
/// This is the form widget's contract: five field strings in, the
/// integer calorie string out. Numeric fields that fail to parse count
/// as zero; the selector fields must hold valid choices.
#[wasm_bindgen]
pub fn estimate_calories(
    gender: &str,
    activity_level: &str,
    weight: Option<String>,
    height: Option<String>,
    age: Option<String>,
) -> Result<String, JsError> {
    let submission = TdeeSubmission {
        gender: Some(gender.to_string()),
        activity_level: Some(activity_level.to_string()),
        weight,
        height,
        age,
    };
    Ok(dietcalc_core::estimate_submission(&submission)?)
}

/// Calculate BMI from weight (kg) and height (cm)
/// Returns `undefined` when either measurement is zero.
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    energy::body_mass_index(weight_kg, height_cm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_tdee() {
        let tdee = estimate_tdee(70.0, 175.0, 25, true, 3).unwrap();
        assert!((tdee - 2594.3125).abs() < 0.001);
    }

    #[test]
    fn test_invalid_activity_level_rejected() {
        assert!(estimate_tdee(70.0, 175.0, 25, true, 0).is_err());
        assert!(estimate_tdee(70.0, 175.0, 25, true, 6).is_err());
    }

    #[test]
    fn test_estimate_calories_from_form_fields() {
        let result = estimate_calories(
            "female",
            "1",
            Some("60".to_string()),
            Some("165".to_string()),
            Some("30".to_string()),
        )
        .unwrap();
        assert_eq!(result, "1584");
    }

    #[test]
    fn test_estimate_calories_defaults_blank_fields() {
        let result = estimate_calories("male", "1", None, Some("".to_string()), None).unwrap();
        assert_eq!(result, "6");
    }

    #[test]
    fn test_breakdown_json() {
        let json = estimate_breakdown(80.0, 180.0, 30, true, 3).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["activity_multiplier"], 1.55);
        assert!((value["bmr"].as_f64().unwrap() - 1780.0).abs() < 0.001);
    }

    #[test]
    fn test_bmi() {
        assert_eq!(calculate_bmi(70.0, 175.0), Some(22.86));
        assert_eq!(calculate_bmi(70.0, 0.0), None);
    }
}
