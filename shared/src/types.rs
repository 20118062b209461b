//! API request and response types

use crate::models::{HealthLog, HealthLogEntry, Profile};
use serde::{Deserialize, Serialize};

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Assessment request: a single log plus the profile it belongs to
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentRequest {
    pub log: Option<HealthLog>,
    pub profile: Option<Profile>,
}

/// Dashboard request: the user's log history plus profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardRequest {
    pub logs: Vec<HealthLogEntry>,
    pub profile: Option<Profile>,
}
