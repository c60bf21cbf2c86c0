use vitalscore_core::models::scores::BmiCategory;

use crate::round1;

/// Lowest BMI accepted as a real measurement rather than a data-entry error.
pub const MIN_PLAUSIBLE_BMI: f64 = 10.0;
/// Highest BMI accepted as a real measurement rather than a data-entry error.
pub const MAX_PLAUSIBLE_BMI: f64 = 50.0;

/// Body mass index from height in centimetres and weight in kilograms,
/// rounded to one decimal. Returns 0 when either input is missing.
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    if !(height_cm.is_finite() && weight_kg.is_finite()) || height_cm <= 0.0 || weight_kg <= 0.0 {
        return 0.0;
    }
    let height_m = height_cm / 100.0;
    round1(weight_kg / (height_m * height_m))
}

/// Boundary values belong to the higher band: 18.5 is Normal, 25 is
/// Overweight, 30 is Obese.
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

pub fn is_plausible(bmi: f64) -> bool {
    (MIN_PLAUSIBLE_BMI..=MAX_PLAUSIBLE_BMI).contains(&bmi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_values() {
        assert_eq!(compute_bmi(170.0, 70.0), 24.2);
        assert_eq!(compute_bmi(140.0, 32.0), 16.3);
    }

    #[test]
    fn missing_inputs_give_zero() {
        assert_eq!(compute_bmi(0.0, 70.0), 0.0);
        assert_eq!(compute_bmi(170.0, 0.0), 0.0);
        assert_eq!(compute_bmi(-150.0, 40.0), 0.0);
        assert_eq!(compute_bmi(f64::NAN, 40.0), 0.0);
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(classify_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(classify_bmi(18.5), BmiCategory::Normal);
        assert_eq!(classify_bmi(24.9), BmiCategory::Normal);
        assert_eq!(classify_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(classify_bmi(29.9), BmiCategory::Overweight);
        assert_eq!(classify_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn plausibility_range_is_inclusive() {
        assert!(!is_plausible(0.0));
        assert!(!is_plausible(9.9));
        assert!(is_plausible(10.0));
        assert!(is_plausible(50.0));
        assert!(!is_plausible(50.1));
    }
}
