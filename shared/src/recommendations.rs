//! Rule-based health recommendations
//!
//! Each metric block contributes at most one recommendation, and blocks run in
//! a fixed order. The order is part of the output contract: the dashboard
//! renders the list as-is.
//!
//! The thresholds here are intentionally independent from the score bands in
//! [`crate::health_metrics`]. Blood sugar between 100 and 126 scores neutral
//! but is still flagged as prediabetes.

use crate::health_metrics::provided;
use crate::models::{HealthLog, Profile, Recommendation, RecommendationType};

/// Generate the ordered recommendation list for a log
///
/// `profile` is accepted for future age/gender-adjusted thresholds and is
/// not read yet. Returns an empty list when there is no log.
pub fn generate_recommendations(
    log: Option<&HealthLog>,
    _profile: Option<&Profile>,
    bmi: Option<f64>,
) -> Vec<Recommendation> {
    let Some(log) = log else {
        return Vec::new();
    };

    [
        provided(bmi).map(bmi_recommendation),
        blood_pressure_recommendation(log),
        provided(log.blood_sugar).and_then(blood_sugar_recommendation),
        provided(log.heart_rate).and_then(heart_rate_recommendation),
        provided(log.sleep_hours).and_then(sleep_recommendation),
        provided(log.water_intake_liters).and_then(water_recommendation),
        // Zero minutes is a meaningful reading here, so only absence is skipped
        log.exercise_minutes.and_then(exercise_recommendation),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn bmi_recommendation(bmi: f64) -> Recommendation {
    if bmi < 18.5 {
        Recommendation::new(
            "Underweight",
            "Your BMI is below 18.5. Consider nutrient-dense foods and consult a dietitian.",
            RecommendationType::Warning,
        )
    } else if (25.0..30.0).contains(&bmi) {
        Recommendation::new(
            "Overweight",
            "Your BMI suggests you're overweight. Focus on balanced meals and regular cardio exercise.",
            RecommendationType::Warning,
        )
    } else if bmi >= 30.0 {
        Recommendation::new(
            "Obesity Risk",
            "Your BMI indicates obesity. Please consult a healthcare professional for a personalized plan.",
            RecommendationType::Danger,
        )
    } else {
        Recommendation::new(
            "Healthy BMI",
            "Great job! Your BMI is in the healthy range. Keep maintaining your balanced lifestyle.",
            RecommendationType::Good,
        )
    }
}

fn blood_pressure_recommendation(log: &HealthLog) -> Option<Recommendation> {
    let systolic = provided(log.systolic_bp)?;
    let diastolic = provided(log.diastolic_bp)?;

    if systolic >= 140.0 || diastolic >= 90.0 {
        Some(Recommendation::new(
            "High Blood Pressure",
            "Your BP is elevated. Reduce sodium intake, exercise regularly, and monitor stress levels.",
            RecommendationType::Danger,
        ))
    } else if systolic >= 120.0 || diastolic >= 80.0 {
        Some(Recommendation::new(
            "Prehypertension",
            "Your BP is slightly elevated. Consider dietary changes like the DASH diet.",
            RecommendationType::Warning,
        ))
    } else {
        None
    }
}

fn blood_sugar_recommendation(mg_dl: f64) -> Option<Recommendation> {
    if mg_dl > 126.0 {
        Some(Recommendation::new(
            "High Blood Sugar",
            "Your fasting blood sugar is high. Limit refined carbs and sugary foods. Consult your doctor.",
            RecommendationType::Danger,
        ))
    } else if mg_dl > 100.0 {
        Some(Recommendation::new(
            "Prediabetes Range",
            "Your blood sugar is in the prediabetes range. Increase fiber intake and exercise regularly.",
            RecommendationType::Warning,
        ))
    } else {
        None
    }
}

fn heart_rate_recommendation(bpm: f64) -> Option<Recommendation> {
    if bpm > 100.0 {
        Some(Recommendation::new(
            "Elevated Heart Rate",
            "Your resting heart rate is high. Practice deep breathing, reduce caffeine, and stay hydrated.",
            RecommendationType::Warning,
        ))
    } else if bpm < 60.0 {
        Some(Recommendation::new(
            "Low Heart Rate",
            "Your heart rate is below normal. If you're not an athlete, consult a doctor.",
            RecommendationType::Warning,
        ))
    } else {
        None
    }
}

fn sleep_recommendation(hours: f64) -> Option<Recommendation> {
    if hours < 6.0 {
        Some(Recommendation::new(
            "Insufficient Sleep",
            "Aim for 7-9 hours. Poor sleep increases risk of heart disease and weakens immunity.",
            RecommendationType::Danger,
        ))
    } else if hours < 7.0 {
        Some(Recommendation::new(
            "Improve Sleep",
            "Try to get at least 7 hours. Establish a consistent bedtime routine.",
            RecommendationType::Warning,
        ))
    } else {
        None
    }
}

fn water_recommendation(liters: f64) -> Option<Recommendation> {
    (liters < 1.5).then(|| {
        Recommendation::new(
            "Drink More Water",
            "You're not drinking enough water. Aim for at least 2L daily for optimal hydration.",
            RecommendationType::Warning,
        )
    })
}

fn exercise_recommendation(minutes: f64) -> Option<Recommendation> {
    if minutes < 15.0 {
        Some(Recommendation::new(
            "Increase Activity",
            "Try at least 30 minutes of moderate exercise daily. Even walking helps!",
            RecommendationType::Warning,
        ))
    } else if minutes >= 30.0 {
        Some(Recommendation::new(
            "Active Lifestyle",
            "Great exercise habits! Keep up the consistent activity.",
            RecommendationType::Good,
        ))
    } else {
        None
    }
}
