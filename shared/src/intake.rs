//! Form intake
//!
//! Turns the raw text submitted by the log and profile forms into typed
//! records. A blank input means "not measured" and becomes `None`; it is
//! never stored as zero.

use crate::errors::IntakeError;
use crate::models::{HealthLog, HealthLogEntry, Profile};
use crate::validation::{
    get_field_display_label, validate_age, validate_blood_sugar, validate_diastolic_bp,
    validate_exercise_minutes, validate_gender, validate_heart_rate, validate_height_cm,
    validate_sleep_hours, validate_systolic_bp, validate_water_liters, validate_weight,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

type RangeCheck = fn(f64) -> Result<(), String>;

/// Parse a decimal field, treating blank input as absent
fn parse_decimal(field: &str, raw: &str) -> Result<Option<f64>, IntakeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(IntakeError::field(
            field,
            format!("{} must be a number", get_field_display_label(field)),
        )),
    }
}

/// Parse a whole-number field; any fractional part is dropped
fn parse_whole(field: &str, raw: &str) -> Result<Option<f64>, IntakeError> {
    Ok(parse_decimal(field, raw)?.map(f64::trunc))
}

fn checked(field: &str, value: Option<f64>, check: RangeCheck) -> Result<Option<f64>, IntakeError> {
    if let Some(v) = value {
        check(v).map_err(|msg| IntakeError::field(field, msg))?;
    }
    Ok(value)
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// ============================================================================
// Health Log Form
// ============================================================================

/// Raw daily log form, one text input per metric
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct HealthLogForm {
    pub weight_kg: String,
    pub systolic_bp: String,
    pub diastolic_bp: String,
    pub blood_sugar: String,
    pub heart_rate: String,
    pub sleep_hours: String,
    pub water_intake_liters: String,
    pub exercise_minutes: String,
    #[validate(length(max = 2000))]
    pub notes: String,
}

impl HealthLogForm {
    /// Parse the form into a log
    pub fn to_log(&self) -> Result<HealthLog, IntakeError> {
        Ok(HealthLog {
            weight_kg: checked("weight_kg", parse_decimal("weight_kg", &self.weight_kg)?, validate_weight)?,
            systolic_bp: checked(
                "systolic_bp",
                parse_whole("systolic_bp", &self.systolic_bp)?,
                validate_systolic_bp,
            )?,
            diastolic_bp: checked(
                "diastolic_bp",
                parse_whole("diastolic_bp", &self.diastolic_bp)?,
                validate_diastolic_bp,
            )?,
            blood_sugar: checked(
                "blood_sugar",
                parse_decimal("blood_sugar", &self.blood_sugar)?,
                validate_blood_sugar,
            )?,
            heart_rate: checked("heart_rate", parse_whole("heart_rate", &self.heart_rate)?, validate_heart_rate)?,
            sleep_hours: checked(
                "sleep_hours",
                parse_decimal("sleep_hours", &self.sleep_hours)?,
                validate_sleep_hours,
            )?,
            water_intake_liters: checked(
                "water_intake_liters",
                parse_decimal("water_intake_liters", &self.water_intake_liters)?,
                validate_water_liters,
            )?,
            exercise_minutes: checked(
                "exercise_minutes",
                parse_whole("exercise_minutes", &self.exercise_minutes)?,
                validate_exercise_minutes,
            )?,
        })
    }

    /// Parse and validate the form into a new log entry
    ///
    /// Notes are trimmed before the length limit applies.
    pub fn into_entry(mut self, logged_at: DateTime<Utc>) -> Result<HealthLogEntry, IntakeError> {
        self.notes = self.notes.trim().to_string();
        self.validate()?;
        let log = self.to_log()?;
        Ok(HealthLogEntry {
            id: Some(Uuid::new_v4()),
            logged_at,
            log,
            notes: non_blank(&self.notes),
        })
    }
}

// ============================================================================
// Profile Form
// ============================================================================

/// Raw profile form
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ProfileForm {
    #[validate(length(max = 200))]
    pub full_name: String,
    pub age: String,
    pub gender: String,
    pub height_cm: String,
    pub weight_kg: String,
    /// Comma-separated list, e.g. "Diabetes, Hypertension"
    pub medical_conditions: String,
}

impl ProfileForm {
    /// Parse and validate the form into a profile
    pub fn into_profile(mut self) -> Result<Profile, IntakeError> {
        self.full_name = self.full_name.trim().to_string();
        self.validate()?;

        let age = checked("age", parse_whole("age", &self.age)?, validate_age)?;

        let gender = match non_blank(&self.gender) {
            Some(raw) => {
                validate_gender(&raw).map_err(|msg| IntakeError::field("gender", msg))?;
                Some(raw.to_lowercase())
            }
            None => None,
        };

        let medical_conditions = self
            .medical_conditions
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Ok(Profile {
            height_cm: checked("height_cm", parse_decimal("height_cm", &self.height_cm)?, validate_height_cm)?,
            weight_kg: checked("weight_kg", parse_decimal("weight_kg", &self.weight_kg)?, validate_weight)?,
            age,
            gender,
            full_name: non_blank(&self.full_name),
            medical_conditions,
        })
    }
}
