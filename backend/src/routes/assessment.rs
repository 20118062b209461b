//! Health assessment API routes

use crate::services::AssessmentService;
use crate::state::AppState;
use axum::{routing::post, Json, Router};
use vitality_coach_shared::types::AssessmentRequest;
use vitality_coach_shared::HealthAssessment;

/// Create assessment routes
pub fn assessment_routes() -> Router<AppState> {
    Router::new().route("/", post(assess))
}

/// POST /api/v1/assessment - Score a single day's log
///
/// Both the log and the profile are optional. Missing measurements
/// simply contribute nothing to the score.
async fn assess(Json(req): Json<AssessmentRequest>) -> Json<HealthAssessment> {
    Json(AssessmentService::assess(req.log.as_ref(), req.profile.as_ref()))
}
