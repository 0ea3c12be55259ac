//! Macronutrient arithmetic
//!
//! Calorie math for meal entries: 4 kcal per gram of protein and
//! carbohydrate, 9 kcal per gram of fat.

use serde::{Deserialize, Serialize};

pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Calories implied by a meal's macronutrient grams
pub fn calories_from_macros(protein_g: f64, carbs_g: f64, fat_g: f64) -> f64 {
    KCAL_PER_GRAM_PROTEIN * protein_g + KCAL_PER_GRAM_CARBS * carbs_g + KCAL_PER_GRAM_FAT * fat_g
}

/// Share of a meal's calories contributed by each macronutrient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroDistribution {
    pub protein_pct: f64,
    pub carbs_pct: f64,
    pub fat_pct: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Calculate the macronutrient distribution of a meal
///
/// Percentages are of the stated calorie total, rounded to two decimals.
/// A zero-calorie meal distributes to all zeros.
pub fn macro_distribution(
    calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
) -> MacroDistribution {
    if calories == 0.0 {
        return MacroDistribution {
            protein_pct: 0.0,
            carbs_pct: 0.0,
            fat_pct: 0.0,
        };
    }

    MacroDistribution {
        protein_pct: round2(protein_g * KCAL_PER_GRAM_PROTEIN / calories * 100.0),
        carbs_pct: round2(carbs_g * KCAL_PER_GRAM_CARBS / calories * 100.0),
        fat_pct: round2(fat_g * KCAL_PER_GRAM_FAT / calories * 100.0),
    }
}

/// Validate a meal's stated calories against its macros
///
/// The stated total may not be negative, and may not exceed the total
/// derivable from the macronutrient grams.
pub fn validate_meal_calories(
    calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
) -> Result<(), String> {
    if calories < 0.0 {
        return Err("Calories cannot be negative".to_string());
    }
    if protein_g < 0.0 || carbs_g < 0.0 || fat_g < 0.0 {
        return Err("Nutritional values cannot be negative".to_string());
    }
    let derived = calories_from_macros(protein_g, carbs_g, fat_g);
    if calories > derived {
        return Err(format!(
            "Calories exceed the calculated value from macros: {:.2} kcal",
            derived
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_calories_from_macros() {
        // 30g protein, 40g carbs, 10g fat -> 120 + 160 + 90 = 370
        assert_eq!(calories_from_macros(30.0, 40.0, 10.0), 370.0);
    }

    #[test]
    fn test_macro_distribution() {
        let dist = macro_distribution(370.0, 30.0, 40.0, 10.0);
        assert_eq!(dist.protein_pct, 32.43);
        assert_eq!(dist.carbs_pct, 43.24);
        assert_eq!(dist.fat_pct, 24.32);
    }

    #[test]
    fn test_zero_calorie_distribution() {
        let dist = macro_distribution(0.0, 30.0, 40.0, 10.0);
        assert_eq!(dist.protein_pct, 0.0);
        assert_eq!(dist.carbs_pct, 0.0);
        assert_eq!(dist.fat_pct, 0.0);
    }

    #[test]
    fn test_meal_calorie_validation() {
        assert!(validate_meal_calories(350.0, 30.0, 40.0, 10.0).is_ok());
        assert!(validate_meal_calories(370.0, 30.0, 40.0, 10.0).is_ok());
        assert!(validate_meal_calories(400.0, 30.0, 40.0, 10.0).is_err());
        assert!(validate_meal_calories(-1.0, 0.0, 0.0, 0.0).is_err());
        assert!(validate_meal_calories(100.0, -30.0, 40.0, 10.0).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: the macro-derived total always passes its own validation
        #[test]
        fn prop_derived_total_is_consistent(
            protein in 0.0f64..300.0,
            carbs in 0.0f64..300.0,
            fat in 0.0f64..300.0,
        ) {
            let derived = calories_from_macros(protein, carbs, fat);
            prop_assert!(validate_meal_calories(derived, protein, carbs, fat).is_ok());
        }

        /// Property: distribution of the derived total sums to ~100%
        #[test]
        fn prop_distribution_sums_to_hundred(
            protein in 1.0f64..300.0,
            carbs in 1.0f64..300.0,
            fat in 1.0f64..300.0,
        ) {
            let derived = calories_from_macros(protein, carbs, fat);
            let dist = macro_distribution(derived, protein, carbs, fat);
            let total = dist.protein_pct + dist.carbs_pct + dist.fat_pct;
            prop_assert!((total - 100.0).abs() < 0.05);
        }
    }
}
