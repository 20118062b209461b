//! Health log intake API routes

use crate::error::ApiResult;
use crate::services::IntakeService;
use crate::state::AppState;
use axum::{http::StatusCode, routing::post, Json, Router};
use vitality_coach_shared::{HealthLogEntry, HealthLogForm};

/// Create health log routes
pub fn log_routes() -> Router<AppState> {
    Router::new().route("/", post(submit_log))
}

/// POST /api/v1/logs - Normalize a submitted daily log form
///
/// Blank inputs become absent measurements. Returns the timestamped entry.
async fn submit_log(
    Json(form): Json<HealthLogForm>,
) -> ApiResult<(StatusCode, Json<HealthLogEntry>)> {
    let entry = IntakeService::normalize_log(form)?;
    Ok((StatusCode::CREATED, Json(entry)))
}
