//! Confidence estimate: how far the inputs sit from ambiguous mid-range
//! values. Descriptive only, never used to gate output.

use healthai_core::HealthMetrics;

/// Binary input, so a constant signal.
const SMOKING_CONFIDENCE: f64 = 0.95;

pub fn age_confidence(age: u32) -> f64 {
    if age < 30 || age >= 65 {
        0.90
    } else if age < 45 {
        0.80
    } else {
        0.70
    }
}

pub fn bmi_confidence(bmi: f64) -> f64 {
    if bmi < 18.5 || bmi >= 30.0 {
        0.90
    } else if bmi < 25.0 {
        0.85
    } else {
        0.75
    }
}

pub fn blood_pressure_confidence(systolic: u32, diastolic: u32) -> f64 {
    if systolic >= 140 || diastolic >= 90 {
        0.95
    } else if systolic < 120 && diastolic < 80 {
        0.90
    } else {
        0.70
    }
}

pub fn exercise_confidence(exercise_hours: f64) -> f64 {
    if exercise_hours >= 5.0 || exercise_hours < 1.0 {
        0.90
    } else {
        0.80
    }
}

/// Arithmetic mean of the five signals.
pub fn calculate_confidence(metrics: &HealthMetrics) -> f64 {
    let signals = [
        age_confidence(metrics.age),
        bmi_confidence(metrics.bmi),
        blood_pressure_confidence(metrics.systolic_bp, metrics.diastolic_bp),
        SMOKING_CONFIDENCE,
        exercise_confidence(metrics.exercise_hours),
    ];
    signals.iter().sum::<f64>() / signals.len() as f64
}
