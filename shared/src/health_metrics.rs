//! Health metrics calculations module
//!
//! Provides BMI and the 0-100 health score derived from a single health log.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Absence is not zero**: A metric that was not provided never moves the score
//! 3. **Never fails**: Missing input degrades to `None` or a score of 0

use crate::models::{HealthLog, Profile};

// ============================================================================
// Provided-value semantics
// ============================================================================

/// Return the value only if it was actually provided
///
/// Zero and NaN count as "not provided", matching how the log form treats
/// an empty or unparseable input.
pub fn provided(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

// ============================================================================
// BMI Calculations
// ============================================================================

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
///
/// Returns `None` when either input is missing, zero or NaN.
pub fn compute_bmi(weight_kg: Option<f64>, height_cm: Option<f64>) -> Option<f64> {
    let weight_kg = provided(weight_kg)?;
    let height_cm = provided(height_cm)?;
    let height_m = height_cm / 100.0;
    Some(weight_kg / (height_m * height_m))
}

/// Calculate BMI from the log weight, falling back to the profile weight
///
/// The fallback only applies when the log has no weight at all; a logged
/// weight of zero is used as-is (and yields no BMI).
pub fn resolve_bmi(log: Option<&HealthLog>, profile: Option<&Profile>) -> Option<f64> {
    let weight_kg = log
        .and_then(|l| l.weight_kg)
        .or_else(|| profile.and_then(|p| p.weight_kg));
    let height_cm = profile.and_then(|p| p.height_cm);
    compute_bmi(weight_kg, height_cm)
}

// ============================================================================
// Health Score
// ============================================================================

/// Starting value before any metric adjustment
pub const BASE_SCORE: i32 = 50;

/// Lowest possible score
pub const MIN_SCORE: u8 = 0;

/// Highest possible score
pub const MAX_SCORE: u8 = 100;

fn bmi_adjustment(bmi: f64) -> i32 {
    if (18.5..=24.9).contains(&bmi) {
        15
    } else if (25.0..=29.9).contains(&bmi) {
        5
    } else {
        -5
    }
}

fn heart_rate_adjustment(bpm: f64) -> i32 {
    if (60.0..=100.0).contains(&bpm) {
        10
    } else {
        -5
    }
}

fn blood_pressure_adjustment(systolic: f64, diastolic: f64) -> i32 {
    if systolic < 120.0 && diastolic < 80.0 {
        10
    } else if systolic < 140.0 && diastolic < 90.0 {
        5
    } else {
        -10
    }
}

fn sleep_adjustment(hours: f64) -> i32 {
    if (7.0..=9.0).contains(&hours) {
        10
    } else if hours >= 6.0 {
        5
    } else {
        -5
    }
}

fn water_adjustment(liters: f64) -> i32 {
    if liters >= 2.0 {
        5
    } else {
        -3
    }
}

fn exercise_adjustment(minutes: f64) -> i32 {
    if minutes >= 30.0 {
        10
    } else if minutes >= 15.0 {
        5
    } else {
        0
    }
}

fn blood_sugar_adjustment(mg_dl: f64) -> i32 {
    if (70.0..=100.0).contains(&mg_dl) {
        5
    } else if mg_dl > 126.0 {
        -10
    } else {
        0
    }
}

/// Calculate the 0-100 health score for a log
///
/// Starts at [`BASE_SCORE`] and applies one independent adjustment per
/// provided metric. Returns 0 when there is no log.
pub fn compute_health_score(log: Option<&HealthLog>, bmi: Option<f64>) -> u8 {
    let Some(log) = log else {
        return MIN_SCORE;
    };

    let mut score = BASE_SCORE;

    if let Some(bmi) = provided(bmi) {
        score += bmi_adjustment(bmi);
    }
    if let Some(bpm) = provided(log.heart_rate) {
        score += heart_rate_adjustment(bpm);
    }
    if let (Some(systolic), Some(diastolic)) = (provided(log.systolic_bp), provided(log.diastolic_bp)) {
        score += blood_pressure_adjustment(systolic, diastolic);
    }
    if let Some(hours) = provided(log.sleep_hours) {
        score += sleep_adjustment(hours);
    }
    if let Some(liters) = provided(log.water_intake_liters) {
        score += water_adjustment(liters);
    }
    if let Some(minutes) = provided(log.exercise_minutes) {
        score += exercise_adjustment(minutes);
    }
    if let Some(mg_dl) = provided(log.blood_sugar) {
        score += blood_sugar_adjustment(mg_dl);
    }

    score.clamp(MIN_SCORE as i32, MAX_SCORE as i32) as u8
}
