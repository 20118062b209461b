//! Prometheus metrics endpoint

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::State;

/// GET /metrics - Render metrics in Prometheus text format
pub async fn render_metrics(State(state): State<AppState>) -> Result<String, ApiError> {
    state
        .metrics()
        .map(|handle| handle.render())
        .ok_or_else(|| ApiError::NotFound("Metrics are disabled".to_string()))
}
