//! Intake service - normalizes submitted log and profile forms

use crate::error::ApiError;
use chrono::Utc;
use tracing::{debug, info};
use vitality_coach_shared::{HealthLogEntry, HealthLogForm, Profile, ProfileForm};

/// Intake service
pub struct IntakeService;

impl IntakeService {
    /// Turn a submitted log form into a timestamped entry
    pub fn normalize_log(form: HealthLogForm) -> Result<HealthLogEntry, ApiError> {
        let entry = form.into_entry(Utc::now()).map_err(|e| {
            metrics::counter!("vitality_intake_rejections_total", "form" => "health_log").increment(1);
            ApiError::from(e)
        })?;

        info!(
            entry_id = ?entry.id,
            logged_at = %entry.logged_at,
            "Normalized health log"
        );
        Ok(entry)
    }

    /// Turn a submitted profile form into a profile
    pub fn normalize_profile(form: ProfileForm) -> Result<Profile, ApiError> {
        let profile = form.into_profile().map_err(|e| {
            metrics::counter!("vitality_intake_rejections_total", "form" => "profile").increment(1);
            ApiError::from(e)
        })?;

        debug!(
            has_height = profile.height_cm.is_some(),
            conditions = profile.medical_conditions.len(),
            "Normalized profile"
        );
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_normalize_log_assigns_id() {
        let form = HealthLogForm {
            heart_rate: "64".to_string(),
            ..Default::default()
        };
        let entry = IntakeService::normalize_log(form).unwrap();
        assert!(entry.id.is_some());
        assert_eq!(entry.log.heart_rate, Some(64.0));
    }

    #[rstest]
    #[case("blood_sugar", HealthLogForm { blood_sugar: "sweet".to_string(), ..Default::default() })]
    #[case("heart_rate", HealthLogForm { heart_rate: "400".to_string(), ..Default::default() })]
    #[case("sleep_hours", HealthLogForm { sleep_hours: "-1".to_string(), ..Default::default() })]
    fn test_normalize_log_rejects_bad_input(#[case] field: &str, #[case] form: HealthLogForm) {
        match IntakeService::normalize_log(form) {
            Err(ApiError::Intake(e)) => assert_eq!(e.field_name(), field),
            other => panic!("expected intake error, got {:?}", other),
        }
    }

    #[test]
    fn test_normalize_profile() {
        let form = ProfileForm {
            height_cm: "180".to_string(),
            medical_conditions: "Asthma".to_string(),
            ..Default::default()
        };
        let profile = IntakeService::normalize_profile(form).unwrap();
        assert_eq!(profile.height_cm, Some(180.0));
        assert_eq!(profile.medical_conditions, vec!["Asthma"]);
    }
}
