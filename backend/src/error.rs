//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting internal errors to appropriate HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::warn;
use vitality_coach_shared::types::{ErrorDetail, ErrorResponse};
use vitality_coach_shared::IntakeError;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    Intake(#[from] IntakeError),

    #[error("Resource not found: {0}")]
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut field = None;
        let (status, code, message) = match &self {
            ApiError::Intake(err) => {
                warn!(field = err.field_name(), "Rejected form input: {}", err);
                field = Some(err.field_name().to_string());
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", err.to_string())
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
        };

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                field,
            },
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intake_error_status() {
        let error = ApiError::from(IntakeError::field("heart_rate", "Heart rate must be at least 20 bpm"));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_status() {
        let error = ApiError::NotFound("Metrics are disabled".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
