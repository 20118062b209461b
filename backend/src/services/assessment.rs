//! Health assessment service - scores a single log against a profile

use tracing::debug;
use vitality_coach_shared::{assess, HealthAssessment, HealthLog, Profile};

/// Assessment service
pub struct AssessmentService;

impl AssessmentService {
    /// Assess a log and record the outcome in metrics
    ///
    /// Never fails: missing data degrades to no BMI, a score of 0 and no
    /// recommendations.
    pub fn assess(log: Option<&HealthLog>, profile: Option<&Profile>) -> HealthAssessment {
        let assessment = assess(log, profile);
        Self::record(&assessment);

        debug!(
            has_log = log.is_some(),
            bmi = ?assessment.bmi,
            health_score = assessment.health_score,
            recommendations = assessment.recommendations.len(),
            "Computed health assessment"
        );

        assessment
    }

    pub(crate) fn record(assessment: &HealthAssessment) {
        metrics::counter!("vitality_assessments_total").increment(1);
        metrics::histogram!("vitality_health_score").record(f64::from(assessment.health_score));
        for rec in &assessment.recommendations {
            metrics::counter!("vitality_recommendations_total", "type" => rec.kind.as_str()).increment(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_assess_matches_engine() {
        let log = HealthLog {
            heart_rate: Some(72.0),
            sleep_hours: Some(8.0),
            water_intake_liters: Some(2.5),
            exercise_minutes: Some(40.0),
            systolic_bp: Some(118.0),
            diastolic_bp: Some(76.0),
            blood_sugar: Some(90.0),
            weight_kg: Some(70.0),
        };
        let profile = Profile {
            height_cm: Some(175.0),
            ..Default::default()
        };

        let result = AssessmentService::assess(Some(&log), Some(&profile));
        assert_eq!(result.health_score, 100);
        let titles: Vec<_> = result.recommendations.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Healthy BMI", "Active Lifestyle"]);
    }

    #[test]
    fn test_assess_without_anything() {
        let result = AssessmentService::assess(None, None);
        assert_eq!(result.bmi, None);
        assert_eq!(result.health_score, 0);
        assert!(result.recommendations.is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: assessment is idempotent
        #[test]
        fn prop_assess_idempotent(
            hr in prop::option::of(30.0f64..200.0),
            sleep in prop::option::of(0.0f64..14.0),
            weight in prop::option::of(40.0f64..150.0),
        ) {
            let log = HealthLog { heart_rate: hr, sleep_hours: sleep, weight_kg: weight, ..Default::default() };
            let profile = Profile { height_cm: Some(170.0), ..Default::default() };
            let first = AssessmentService::assess(Some(&log), Some(&profile));
            let second = AssessmentService::assess(Some(&log), Some(&profile));
            prop_assert_eq!(first, second);
        }
    }
}
