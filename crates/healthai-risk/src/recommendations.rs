//! Advisory generation.
//!
//! At most one advisory per metric, most severe threshold first. Metrics are
//! visited in a fixed order (bmi, blood pressure, cholesterol, glucose,
//! smoking, exercise, age), then the tier advisory is appended.

use healthai_core::{HealthMetrics, RiskLevel};

pub const WEIGHT_MANAGEMENT: &str =
    "Work with a healthcare provider on a structured weight management plan";
pub const WEIGHT_REDUCTION: &str =
    "Aim for gradual weight loss through balanced nutrition and regular activity";
pub const WEIGHT_GAIN: &str = "Talk to a nutritionist about reaching a healthy weight";

pub const HYPERTENSION: &str =
    "Monitor your blood pressure regularly and discuss hypertension treatment with a physician";
pub const ELEVATED_PRESSURE: &str =
    "Reduce sodium intake and recheck your blood pressure within a few months";

pub const CHOLESTEROL_TREATMENT: &str = "Discuss cholesterol-lowering treatment with your doctor";
pub const CHOLESTEROL_DIET: &str = "Choose a heart-healthy diet low in saturated and trans fats";

pub const DIABETES_SCREENING: &str = "Get tested for diabetes and follow up with your doctor";
pub const GLUCOSE_DIET: &str = "Limit refined sugars and have your blood glucose rechecked";

pub const QUIT_SMOKING: &str = "Quit smoking; ask your doctor about cessation support programs";

pub const START_EXERCISING: &str =
    "Start with short daily walks and build toward 150 minutes of moderate exercise per week";
pub const EXERCISE_MORE: &str =
    "Increase physical activity to at least 150 minutes of moderate exercise per week";

pub const SENIOR_SCREENINGS: &str = "Keep up with age-appropriate preventive screenings";
pub const MIDLIFE_SCREENINGS: &str = "Schedule regular cardiovascular and diabetes screenings";

pub const COMPREHENSIVE_EVALUATION: &str =
    "Schedule a comprehensive health evaluation with your doctor soon";
pub const LIFESTYLE_MODIFICATION: &str =
    "Consider lifestyle modifications to lower your risk factors";

pub const KEEP_IT_UP: &str = "Keep up your healthy lifestyle and continue regular check-ups";

fn bmi_advice(bmi: f64) -> Option<&'static str> {
    if bmi >= 30.0 {
        Some(WEIGHT_MANAGEMENT)
    } else if bmi > 24.9 {
        Some(WEIGHT_REDUCTION)
    } else if bmi < 18.5 {
        Some(WEIGHT_GAIN)
    } else {
        None
    }
}

fn blood_pressure_advice(systolic: u32, diastolic: u32) -> Option<&'static str> {
    if systolic >= 140 || diastolic >= 90 {
        Some(HYPERTENSION)
    } else if systolic > 120 || diastolic > 80 {
        Some(ELEVATED_PRESSURE)
    } else {
        None
    }
}

fn cholesterol_advice(cholesterol: u32) -> Option<&'static str> {
    if cholesterol >= 240 {
        Some(CHOLESTEROL_TREATMENT)
    } else if cholesterol > 200 {
        Some(CHOLESTEROL_DIET)
    } else {
        None
    }
}

fn glucose_advice(glucose: u32) -> Option<&'static str> {
    if glucose >= 126 {
        Some(DIABETES_SCREENING)
    } else if glucose > 100 {
        Some(GLUCOSE_DIET)
    } else {
        None
    }
}

fn smoking_advice(smoking: bool) -> Option<&'static str> {
    smoking.then_some(QUIT_SMOKING)
}

fn exercise_advice(exercise_hours: f64) -> Option<&'static str> {
    if exercise_hours < 1.0 {
        Some(START_EXERCISING)
    } else if exercise_hours < 2.5 {
        Some(EXERCISE_MORE)
    } else {
        None
    }
}

fn age_advice(age: u32) -> Option<&'static str> {
    if age >= 65 {
        Some(SENIOR_SCREENINGS)
    } else if age >= 45 {
        Some(MIDLIFE_SCREENINGS)
    } else {
        None
    }
}

fn level_advice(level: RiskLevel) -> Option<&'static str> {
    match level {
        RiskLevel::High => Some(COMPREHENSIVE_EVALUATION),
        RiskLevel::Medium => Some(LIFESTYLE_MODIFICATION),
        RiskLevel::Low => None,
    }
}

fn push_unique(out: &mut Vec<String>, item: &str) {
    if !out.iter().any(|existing| existing == item) {
        out.push(item.to_string());
    }
}

/// Ordered, de-duplicated advisories for one assessment.
///
/// When no metric triggers an advisory the result is the single
/// positive-reinforcement entry, regardless of tier.
pub fn generate_recommendations(metrics: &HealthMetrics, level: RiskLevel) -> Vec<String> {
    let per_metric = [
        bmi_advice(metrics.bmi),
        blood_pressure_advice(metrics.systolic_bp, metrics.diastolic_bp),
        cholesterol_advice(metrics.cholesterol),
        glucose_advice(metrics.glucose),
        smoking_advice(metrics.smoking),
        exercise_advice(metrics.exercise_hours),
        age_advice(metrics.age),
    ];

    let mut out = Vec::new();
    for advice in per_metric.into_iter().flatten() {
        push_unique(&mut out, advice);
    }

    if out.is_empty() {
        return vec![KEEP_IT_UP.to_string()];
    }

    if let Some(advice) = level_advice(level) {
        push_unique(&mut out, advice);
    }
    out
}
