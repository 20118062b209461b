//! Data models for the Vitality Coach application
//!
//! Every measurement is optional. An absent field means "not measured that
//! day" and is never coerced to zero.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single day's biometric measurements
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthLog {
    /// Body weight in kilograms
    pub weight_kg: Option<f64>,
    /// Systolic blood pressure (mmHg)
    pub systolic_bp: Option<f64>,
    /// Diastolic blood pressure (mmHg)
    pub diastolic_bp: Option<f64>,
    /// Fasting blood sugar (mg/dL)
    pub blood_sugar: Option<f64>,
    /// Resting heart rate (bpm)
    pub heart_rate: Option<f64>,
    pub sleep_hours: Option<f64>,
    pub water_intake_liters: Option<f64>,
    pub exercise_minutes: Option<f64>,
}

/// A health log as recorded by the storage layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthLogEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub logged_at: DateTime<Utc>,
    #[serde(flatten)]
    pub log: HealthLog,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// User profile supplying anthropometric fallbacks
///
/// `age`, `gender`, `full_name` and `medical_conditions` are carried for
/// display and are not read by the scoring engine, so any value is accepted
/// here. The profile form normalizes them on intake.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub height_cm: Option<f64>,
    /// Used for BMI when the log has no weight
    pub weight_kg: Option<f64>,
    pub age: Option<f64>,
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub medical_conditions: Vec<String>,
}

/// Severity tag of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationType {
    Good,
    Warning,
    Danger,
}

impl RecommendationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationType::Good => "good",
            RecommendationType::Warning => "warning",
            RecommendationType::Danger => "danger",
        }
    }
}

impl std::fmt::Display for RecommendationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity-tagged advice tied to one measured metric
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: RecommendationType,
}

impl Recommendation {
    pub fn new(title: &str, message: &str, kind: RecommendationType) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            kind,
        }
    }
}
