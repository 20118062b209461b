//! Profile intake API routes

use crate::error::ApiResult;
use crate::services::IntakeService;
use crate::state::AppState;
use axum::{routing::post, Json, Router};
use vitality_coach_shared::{Profile, ProfileForm};

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/", post(submit_profile))
}

/// POST /api/v1/profile - Normalize a submitted profile form
async fn submit_profile(Json(form): Json<ProfileForm>) -> ApiResult<Json<Profile>> {
    Ok(Json(IntakeService::normalize_profile(form)?))
}
