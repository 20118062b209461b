//! Integration tests for the dashboard endpoint

mod common;

use axum::http::StatusCode;
use serde_json::json;
use vitality_coach_backend::config::AppConfig;

#[tokio::test]
async fn test_dashboard_uses_latest_entry() {
    let app = common::TestApp::new();

    // Submitted out of order on purpose
    let body = json!({
        "logs": [
            { "logged_at": "2024-03-06T08:00:00Z", "heart_rate": 64, "sleep_hours": 8, "weight_kg": 72.0 },
            { "logged_at": "2024-03-05T08:00:00Z", "heart_rate": 110, "sleep_hours": 4, "weight_kg": 73.0 }
        ],
        "profile": { "height_cm": 180.0 }
    });

    let (status, response) = app.post_json("/api/v1/dashboard", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["latest"]["heart_rate"], 64.0);
    assert_eq!(response["trend"][0]["date"], "Mar 5");
    assert_eq!(response["trend"][1]["date"], "Mar 6");
    assert_eq!(response["show_trends"], true);

    // BMI 22.2 -> +15, heart rate -> +10, sleep -> +10
    assert_eq!(response["health_score"], 85);

    let cards = response["stat_cards"].as_array().unwrap();
    assert_eq!(cards[0]["label"], "BMI");
    assert_eq!(cards[0]["value"], "22.2");
    assert_eq!(cards[1]["value"], "64 bpm");
}

#[tokio::test]
async fn test_dashboard_without_logs() {
    let app = common::TestApp::new();

    let (status, response) = app.post_json("/api/v1/dashboard", &json!({ "logs": [] })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["health_score"], 0);
    assert!(response.get("latest").is_none());
    assert_eq!(response["show_trends"], false);
    assert_eq!(
        response["empty_message"],
        "Log your health data to receive personalized recommendations."
    );
}

#[tokio::test]
async fn test_dashboard_respects_configured_history_limit() {
    let mut config = AppConfig::default();
    config.dashboard.history_limit = 2;
    let app = common::TestApp::with_config(config);

    let logs: Vec<_> = (1..=5)
        .map(|day| json!({ "logged_at": format!("2024-03-0{day}T08:00:00Z"), "water_intake_liters": 1.0 }))
        .collect();

    let (status, response) = app.post_json("/api/v1/dashboard", &json!({ "logs": logs })).await;

    assert_eq!(status, StatusCode::OK);
    let trend = response["trend"].as_array().unwrap();
    assert_eq!(trend.len(), 2);
    assert_eq!(trend[0]["date"], "Mar 4");
    assert_eq!(trend[1]["date"], "Mar 5");
}

#[tokio::test]
async fn test_dashboard_accepts_free_form_profile() {
    let app = common::TestApp::new();

    let body = json!({
        "logs": [{ "logged_at": "2024-03-05T08:00:00Z", "sleep_hours": 8 }],
        "profile": { "gender": "Prefer not to say", "age": 41.5 }
    });

    let (status, response) = app.post_json("/api/v1/dashboard", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["health_score"], 60);
}
