//! Dashboard API routes

use crate::services::DashboardService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use vitality_coach_shared::types::DashboardRequest;
use vitality_coach_shared::DashboardSummary;

/// Create dashboard routes
pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/", post(build_dashboard))
}

/// POST /api/v1/dashboard - Summarize a log history
async fn build_dashboard(
    State(state): State<AppState>,
    Json(req): Json<DashboardRequest>,
) -> Json<DashboardSummary> {
    let limit = state.config().dashboard.history_limit;
    Json(DashboardService::summarize(&req.logs, req.profile.as_ref(), limit))
}
