//! Business logic services
//!
//! Services wrap the shared assessment engine with logging and metrics.
//! They hold no state of their own.

pub mod assessment;
pub mod dashboard;
pub mod intake;

pub use assessment::AssessmentService;
pub use dashboard::DashboardService;
pub use intake::IntakeService;
