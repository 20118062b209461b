//! Input validation functions
//!
//! This module provides physiological range checks for form input.
//! The scoring engine never validates; these checks run only at intake.

fn validate_range(value: f64, min: f64, max: f64, what: &str, unit: &str) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err(format!("{} must be a valid number", what));
    }
    if value < min {
        return Err(format!("{} must be at least {} {}", what, min, unit));
    }
    if value > max {
        return Err(format!("{} must be at most {} {}", what, max, unit));
    }
    Ok(())
}

/// Validate weight value (in kg)
pub fn validate_weight(weight_kg: f64) -> Result<(), String> {
    validate_range(weight_kg, 20.0, 500.0, "Weight", "kg")
}

/// Validate height value (in cm)
/// Valid range: 50-300 cm (covers infants to tallest recorded humans)
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    validate_range(height_cm, 50.0, 300.0, "Height", "cm")
}

/// Validate systolic blood pressure (mmHg)
pub fn validate_systolic_bp(mm_hg: f64) -> Result<(), String> {
    validate_range(mm_hg, 50.0, 300.0, "Systolic pressure", "mmHg")
}

/// Validate diastolic blood pressure (mmHg)
pub fn validate_diastolic_bp(mm_hg: f64) -> Result<(), String> {
    validate_range(mm_hg, 30.0, 200.0, "Diastolic pressure", "mmHg")
}

/// Validate blood sugar (mg/dL)
pub fn validate_blood_sugar(mg_dl: f64) -> Result<(), String> {
    validate_range(mg_dl, 10.0, 1000.0, "Blood sugar", "mg/dL")
}

/// Validate heart rate (bpm)
pub fn validate_heart_rate(bpm: f64) -> Result<(), String> {
    validate_range(bpm, 20.0, 300.0, "Heart rate", "bpm")
}

pub fn validate_sleep_hours(hours: f64) -> Result<(), String> {
    validate_range(hours, 0.0, 24.0, "Sleep", "hours")
}

pub fn validate_water_liters(liters: f64) -> Result<(), String> {
    validate_range(liters, 0.0, 20.0, "Water intake", "L")
}

/// Validate exercise duration in minutes (at most 24 hours)
pub fn validate_exercise_minutes(minutes: f64) -> Result<(), String> {
    validate_range(minutes, 0.0, 1440.0, "Exercise", "minutes")
}

/// Validate age in years
pub fn validate_age(age: f64) -> Result<(), String> {
    validate_range(age, 1.0, 150.0, "Age", "years")
}

/// Valid gender values
pub const VALID_GENDERS: &[&str] = &["male", "female", "other"];

/// Validate gender
pub fn validate_gender(gender: &str) -> Result<(), String> {
    let normalized = gender.to_lowercase();
    if VALID_GENDERS.contains(&normalized.as_str()) {
        Ok(())
    } else {
        Err(format!(
            "Invalid gender. Must be one of: {}",
            VALID_GENDERS.join(", ")
        ))
    }
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "weight_kg" => "Weight (kg)",
        "systolic_bp" => "Systolic BP (mmHg)",
        "diastolic_bp" => "Diastolic BP (mmHg)",
        "blood_sugar" => "Blood Sugar (mg/dL)",
        "heart_rate" => "Heart Rate (bpm)",
        "sleep_hours" => "Sleep (hours)",
        "water_intake_liters" => "Water Intake (L)",
        "exercise_minutes" => "Exercise (minutes)",
        "notes" => "Notes",
        "full_name" => "Full Name",
        "age" => "Age",
        "gender" => "Gender",
        "height_cm" => "Height (cm)",
        "medical_conditions" => "Medical Conditions",
        _ => field_name,
    }
}

/// Message for a text field that exceeds its length limit
pub fn too_long_message(field_name: &str, max: u64) -> String {
    format!("{} must be at most {} characters", get_field_display_label(field_name), max)
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}
