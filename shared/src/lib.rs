//! Vitality Coach Shared Library
//!
//! This crate contains the health assessment engine together with the
//! models, form intake and API types shared by the backend and WASM modules.

pub mod dashboard;
pub mod errors;
pub mod health_metrics;
pub mod intake;
pub mod models;
pub mod recommendations;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use dashboard::{assess, DashboardSummary, HealthAssessment, StatCard, TrendPoint};
pub use errors::*;
pub use health_metrics::{compute_bmi, compute_health_score, resolve_bmi};
pub use intake::{HealthLogForm, ProfileForm};
pub use models::{HealthLog, HealthLogEntry, Profile, Recommendation, RecommendationType};
pub use recommendations::generate_recommendations;
