//! Integration tests for the Prometheus metrics endpoint

mod common;

use axum::http::StatusCode;
use metrics_exporter_prometheus::PrometheusBuilder;
use vitality_coach_backend::{
    config::AppConfig,
    services::{AssessmentService, IntakeService},
    state::AppState,
};
use vitality_coach_shared::{HealthLog, HealthLogForm};

#[tokio::test]
async fn test_metrics_render_assessment_and_intake_series() {
    let recorder = PrometheusBuilder::new().build_recorder();
    let handle = recorder.handle();

    metrics::with_local_recorder(&recorder, || {
        let log = HealthLog {
            heart_rate: Some(72.0),
            exercise_minutes: Some(45.0),
            ..Default::default()
        };
        AssessmentService::assess(Some(&log), None);

        let form = HealthLogForm {
            heart_rate: "fast".to_string(),
            ..Default::default()
        };
        assert!(IntakeService::normalize_log(form).is_err());
    });

    let app = common::TestApp::with_state(AppState::new(AppConfig::default(), Some(handle)));
    let (status, body) = app.get("/metrics").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("vitality_assessments_total 1"));
    assert!(body.contains("vitality_health_score"));
    assert!(body.contains(r#"vitality_recommendations_total{type="good"} 1"#));
    assert!(body.contains(r#"vitality_intake_rejections_total{form="health_log"} 1"#));
}

#[tokio::test]
async fn test_readiness_reports_metrics_enabled() {
    let handle = PrometheusBuilder::new().build_recorder().handle();
    let app = common::TestApp::with_state(AppState::new(AppConfig::default(), Some(handle)));

    let (status, body) = app.get("/health/ready").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("enabled"));
}
