//! Health assessment and dashboard summary
//!
//! Combines the engine outputs for the latest log with the display data the
//! dashboard needs: stat cards and per-day trend points. Chart rendering is
//! left to the client.

use crate::health_metrics::{compute_health_score, provided, resolve_bmi};
use crate::models::{HealthLog, HealthLogEntry, Profile, Recommendation};
use crate::recommendations::generate_recommendations;
use serde::{Deserialize, Serialize};

/// Default number of log entries shown on the dashboard
pub const DEFAULT_HISTORY_LIMIT: usize = 30;

/// Shown in place of a stat that was not measured
pub const MISSING_VALUE: &str = "—";

/// Shown when there are no recommendations to list
pub const EMPTY_RECOMMENDATIONS_MESSAGE: &str =
    "Log your health data to receive personalized recommendations.";

/// Engine output for a single log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthAssessment {
    pub bmi: Option<f64>,
    pub health_score: u8,
    pub recommendations: Vec<Recommendation>,
}

/// Run BMI, score and recommendations for one log and profile
pub fn assess(log: Option<&HealthLog>, profile: Option<&Profile>) -> HealthAssessment {
    let bmi = resolve_bmi(log, profile);
    HealthAssessment {
        bmi,
        health_score: compute_health_score(log, bmi),
        recommendations: generate_recommendations(log, profile, bmi),
    }
}

/// One summary tile on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCard {
    pub label: String,
    pub value: String,
}

impl StatCard {
    fn new(label: &str, value: Option<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.unwrap_or_else(|| MISSING_VALUE.to_string()),
        }
    }
}

/// One day's values for the trend charts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Short date label, e.g. "Mar 5"
    pub date: String,
    pub weight: Option<f64>,
    pub heart_rate: Option<f64>,
    pub sleep: Option<f64>,
    pub water: Option<f64>,
    pub sugar: Option<f64>,
}

impl From<&HealthLogEntry> for TrendPoint {
    fn from(entry: &HealthLogEntry) -> Self {
        Self {
            date: entry.logged_at.format("%b %-d").to_string(),
            weight: entry.log.weight_kg,
            heart_rate: entry.log.heart_rate,
            sleep: entry.log.sleep_hours,
            water: entry.log.water_intake_liters,
            sugar: entry.log.blood_sugar,
        }
    }
}

/// Everything the dashboard page displays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(flatten)]
    pub assessment: HealthAssessment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<HealthLogEntry>,
    pub stat_cards: Vec<StatCard>,
    pub trend: Vec<TrendPoint>,
    /// Charts need at least two points
    pub show_trends: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

impl DashboardSummary {
    /// Build the summary from a user's log history
    ///
    /// Entries are ordered by `logged_at` and only the most recent
    /// `history_limit` are kept. The last one drives the assessment.
    pub fn build(entries: &[HealthLogEntry], profile: Option<&Profile>, history_limit: usize) -> Self {
        let mut history: Vec<&HealthLogEntry> = entries.iter().collect();
        history.sort_by_key(|e| e.logged_at);
        let skip = history.len().saturating_sub(history_limit);
        let history = &history[skip..];

        let latest = history.last().copied();
        let assessment = assess(latest.map(|e| &e.log), profile);
        let stat_cards = stat_cards(latest.map(|e| &e.log), assessment.bmi);
        let trend: Vec<TrendPoint> = history.iter().map(|e| TrendPoint::from(*e)).collect();
        let empty_message = assessment
            .recommendations
            .is_empty()
            .then(|| EMPTY_RECOMMENDATIONS_MESSAGE.to_string());

        Self {
            show_trends: trend.len() > 1,
            latest: latest.cloned(),
            assessment,
            stat_cards,
            trend,
            empty_message,
        }
    }
}

fn stat_cards(log: Option<&HealthLog>, bmi: Option<f64>) -> Vec<StatCard> {
    let field = |get: fn(&HealthLog) -> Option<f64>| log.and_then(|l| provided(get(l)));

    let blood_pressure = field(|l| l.systolic_bp).map(|systolic| {
        let diastolic = field(|l| l.diastolic_bp)
            .map(|d| d.to_string())
            .unwrap_or_else(|| MISSING_VALUE.to_string());
        format!("{}/{}", systolic, diastolic)
    });

    vec![
        StatCard::new("BMI", provided(bmi).map(|b| format!("{:.1}", b))),
        StatCard::new("Heart Rate", field(|l| l.heart_rate).map(|v| format!("{} bpm", v))),
        StatCard::new("Sleep", field(|l| l.sleep_hours).map(|v| format!("{}h", v))),
        StatCard::new("Water", field(|l| l.water_intake_liters).map(|v| format!("{}L", v))),
        StatCard::new("Exercise", field(|l| l.exercise_minutes).map(|v| format!("{} min", v))),
        StatCard::new("Blood Pressure", blood_pressure),
    ]
}
