//! Dashboard service - builds the dashboard summary from a log history

use crate::services::AssessmentService;
use tracing::debug;
use vitality_coach_shared::{DashboardSummary, HealthLogEntry, Profile};

/// Dashboard service
pub struct DashboardService;

impl DashboardService {
    /// Build the dashboard for a user's history
    ///
    /// Only the most recent `history_limit` entries are considered.
    pub fn summarize(
        entries: &[HealthLogEntry],
        profile: Option<&Profile>,
        history_limit: usize,
    ) -> DashboardSummary {
        let summary = DashboardSummary::build(entries, profile, history_limit);
        AssessmentService::record(&summary.assessment);

        debug!(
            submitted = entries.len(),
            kept = summary.trend.len(),
            health_score = summary.assessment.health_score,
            "Built dashboard summary"
        );

        summary
    }
}
