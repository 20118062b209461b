//! Vitality Coach WASM Module
//!
//! This crate provides WebAssembly bindings so the browser can score a log
//! locally, without a round trip to the backend.

use vitality_coach_shared::{assess as assess_log, compute_bmi, compute_health_score, HealthLog, Profile};
use wasm_bindgen::prelude::*;

/// Calculate BMI from weight (kg) and height (cm)
///
/// Returns `undefined` when either value is missing or zero.
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: Option<f64>, height_cm: Option<f64>) -> Option<f64> {
    compute_bmi(weight_kg, height_cm)
}

/// Calculate the 0-100 health score for a JSON-encoded log (or `null`)
#[wasm_bindgen]
pub fn health_score(log_json: &str, bmi: Option<f64>) -> Result<u8, JsError> {
    score_json(log_json, bmi).map_err(|e| JsError::new(&e.to_string()))
}

/// Full assessment of a JSON-encoded log and profile, returned as JSON
#[wasm_bindgen]
pub fn assess(log_json: &str, profile_json: &str) -> Result<String, JsError> {
    assess_json(log_json, profile_json).map_err(|e| JsError::new(&e.to_string()))
}

fn score_json(log_json: &str, bmi: Option<f64>) -> Result<u8, serde_json::Error> {
    let log: Option<HealthLog> = serde_json::from_str(log_json)?;
    Ok(compute_health_score(log.as_ref(), bmi))
}

fn assess_json(log_json: &str, profile_json: &str) -> Result<String, serde_json::Error> {
    let log: Option<HealthLog> = serde_json::from_str(log_json)?;
    let profile: Option<Profile> = serde_json::from_str(profile_json)?;
    serde_json::to_string(&assess_log(log.as_ref(), profile.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi() {
        let bmi = calculate_bmi(Some(70.0), Some(175.0)).unwrap();
        assert!((bmi - 22.86).abs() < 0.1);
        assert_eq!(calculate_bmi(Some(70.0), Some(0.0)), None);
    }

    #[test]
    fn test_score_json() {
        assert_eq!(score_json("null", Some(22.0)).unwrap(), 0);
        assert_eq!(score_json("{}", None).unwrap(), 50);
        assert_eq!(score_json(r#"{"heart_rate": 72}"#, Some(22.0)).unwrap(), 75);
        assert!(score_json("not json", None).is_err());
    }

    #[test]
    fn test_assess_json() {
        let out = assess_json(r#"{"exercise_minutes": 0}"#, r#"{"height_cm": 175, "weight_kg": 70}"#).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["health_score"], 65);
        assert_eq!(value["recommendations"][0]["title"], "Healthy BMI");
        assert_eq!(value["recommendations"][1]["title"], "Increase Activity");
        assert_eq!(value["recommendations"][1]["type"], "warning");
    }

    #[test]
    fn test_assess_json_accepts_free_form_profile() {
        let profile = r#"{"height_cm": 175, "weight_kg": 70, "gender": "Male", "age": 34.5}"#;
        let out = assess_json("{}", profile).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["health_score"], 65);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_invalid_json_surfaces_as_js_error() {
        assert!(assess("not json", "null").is_err());
        assert!(health_score("\"text\"", None).is_err());
    }
}
