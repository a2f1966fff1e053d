//! Tests for RiskScorer — scoring examples, tier boundaries, packaging.

use healthai_core::config::RiskConfig;
use healthai_core::errors::{HealthAiError, PredictionError, ValidationError};
use healthai_core::traits::IRiskPredictor;
use healthai_core::{HealthMetrics, RiskLevel};
use healthai_risk::recommendations::*;
use healthai_risk::{RiskFactors, RiskScorer, RiskTiers};

fn healthy_adult() -> HealthMetrics {
    HealthMetrics {
        age: 30,
        bmi: 22.5,
        systolic_bp: 110,
        diastolic_bp: 70,
        cholesterol: 180,
        glucose: 85,
        smoking: false,
        exercise_hours: 5.0,
    }
}

fn high_risk_adult() -> HealthMetrics {
    HealthMetrics {
        age: 60,
        bmi: 32.0,
        systolic_bp: 160,
        diastolic_bp: 95,
        cholesterol: 280,
        glucose: 140,
        smoking: true,
        exercise_hours: 0.5,
    }
}

#[test]
fn test_healthy_adult_is_low_risk() {
    let scorer = RiskScorer::default();
    let assessment = scorer.predict(&healthy_adult()).unwrap();

    // 5 × 0.02 baseline, no smoking, −0.10 for exercise.
    assert!(assessment.risk_score.abs() < 1e-9);
    assert_eq!(assessment.risk_level, RiskLevel::Low);
    assert_eq!(assessment.recommendations, vec![KEEP_IT_UP.to_string()]);
}

#[test]
fn test_high_risk_adult() {
    let scorer = RiskScorer::default();
    let metrics = high_risk_adult();

    let factors = RiskFactors::from_metrics(&metrics);
    assert_eq!(factors.age, 0.10);
    assert_eq!(factors.bmi, 0.15);
    assert_eq!(factors.blood_pressure, 0.20);
    assert_eq!(factors.cholesterol, 0.15);
    assert_eq!(factors.glucose, 0.15);
    assert_eq!(factors.smoking, 0.15);
    assert_eq!(factors.exercise, 0.05);

    let assessment = scorer.predict(&metrics).unwrap();
    assert!((assessment.risk_score - 0.95).abs() < 1e-9);
    assert_eq!(assessment.risk_level, RiskLevel::High);
    assert_eq!(
        assessment.recommendations,
        vec![
            WEIGHT_MANAGEMENT.to_string(),
            HYPERTENSION.to_string(),
            CHOLESTEROL_TREATMENT.to_string(),
            DIABETES_SCREENING.to_string(),
            QUIT_SMOKING.to_string(),
            START_EXERCISING.to_string(),
            MIDLIFE_SCREENINGS.to_string(),
            COMPREHENSIVE_EVALUATION.to_string(),
        ]
    );
}

#[test]
fn test_score_is_clamped_at_one() {
    let metrics = HealthMetrics {
        age: 80,
        bmi: 40.0,
        systolic_bp: 200,
        diastolic_bp: 120,
        cholesterol: 350,
        glucose: 250,
        smoking: true,
        exercise_hours: 0.0,
    };
    let factors = RiskFactors::from_metrics(&metrics);
    assert!(factors.sum() > 1.0);
    assert_eq!(RiskScorer::default().calculate_risk_score(&metrics), 1.0);
}

#[test]
fn test_score_is_clamped_at_zero() {
    let metrics = HealthMetrics {
        exercise_hours: 12.0,
        ..healthy_adult()
    };
    let factors = RiskFactors::from_metrics(&metrics);
    assert!(factors.sum() <= 1e-9);
    assert!(RiskScorer::default().calculate_risk_score(&metrics) >= 0.0);
}

#[test]
fn test_tier_boundaries_belong_to_upper_tier() {
    let scorer = RiskScorer::default();
    assert_eq!(scorer.determine_risk_level(0.0), RiskLevel::Low);
    assert_eq!(scorer.determine_risk_level(0.29), RiskLevel::Low);
    assert_eq!(scorer.determine_risk_level(0.30), RiskLevel::Medium);
    assert_eq!(scorer.determine_risk_level(0.59), RiskLevel::Medium);
    assert_eq!(scorer.determine_risk_level(0.60), RiskLevel::High);
    assert_eq!(scorer.determine_risk_level(1.0), RiskLevel::High);
}

#[test]
fn test_configured_tiers() {
    let config = RiskConfig {
        medium_threshold: Some(0.2),
        high_threshold: Some(0.5),
    };
    let scorer = RiskScorer::from_config(&config);
    assert_eq!(
        *scorer.tiers(),
        RiskTiers {
            medium_threshold: 0.2,
            high_threshold: 0.5
        }
    );
    assert_eq!(scorer.determine_risk_level(0.25), RiskLevel::Medium);
    assert_eq!(scorer.determine_risk_level(0.5), RiskLevel::High);
}

#[test]
fn test_medium_tier_appends_lifestyle_advice() {
    // 0.10 age + 0.08 bmi + 0.05 bp + 0.02 + 0.02 + 0 + 0.02 exercise = 0.29 → Low
    // Bumping cholesterol to 210 adds 0.06 → 0.35 → Medium.
    let metrics = HealthMetrics {
        age: 50,
        bmi: 26.0,
        systolic_bp: 125,
        diastolic_bp: 75,
        cholesterol: 210,
        glucose: 90,
        smoking: false,
        exercise_hours: 1.5,
    };
    let assessment = RiskScorer::default().predict(&metrics).unwrap();
    assert_eq!(assessment.risk_level, RiskLevel::Medium);
    assert_eq!(
        assessment.recommendations.last().map(String::as_str),
        Some(LIFESTYLE_MODIFICATION)
    );
}

#[test]
fn test_predict_is_deterministic() {
    let scorer = RiskScorer::default();
    let metrics = high_risk_adult();
    let first = scorer.predict(&metrics).unwrap();
    let second = scorer.predict(&metrics).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_trait_object_dispatch() {
    let predictor: Box<dyn IRiskPredictor> = Box::new(RiskScorer::default());
    let assessment = predictor.predict(&healthy_adult()).unwrap();
    assert_eq!(assessment.risk_level, RiskLevel::Low);
}

#[test]
fn test_non_finite_metrics_never_produce_a_nan_score() {
    let metrics = HealthMetrics {
        bmi: f64::NAN,
        ..healthy_adult()
    };
    // NaN fails every band comparison and lands on the baseline.
    let assessment = RiskScorer::default().predict(&metrics).unwrap();
    assert!(assessment.risk_score.is_finite());
    assert!(assessment.confidence.is_finite());

    let metrics = HealthMetrics {
        bmi: f64::INFINITY,
        exercise_hours: f64::NEG_INFINITY,
        ..healthy_adult()
    };
    // Infinities map to finite contributions as well; assess() rejects them up front.
    let err = RiskScorer::default().assess(&metrics).unwrap_err();
    assert!(matches!(
        err,
        HealthAiError::Validation(ValidationError::NotFinite { .. })
    ));
}

#[test]
fn test_assess_validates_first() {
    let metrics = HealthMetrics {
        age: 0,
        ..healthy_adult()
    };
    let err = RiskScorer::default().assess(&metrics).unwrap_err();
    assert!(err.is_client_error());

    let ok = RiskScorer::default().assess(&healthy_adult()).unwrap();
    assert_eq!(ok.risk_level, RiskLevel::Low);
}

#[test]
fn test_prediction_error_message_is_generic() {
    let err = PredictionError::failed("risk score is not a finite number");
    assert!(err.to_string().starts_with("prediction failed"));
}

#[test]
fn test_assessment_serializes_with_lowercase_level() {
    let assessment = RiskScorer::default().predict(&healthy_adult()).unwrap();
    let json = serde_json::to_value(&assessment).unwrap();
    assert_eq!(json["risk_level"], "low");
    assert!(json["recommendations"].is_array());
}

#[test]
fn test_totals_on_a_boundary_land_in_the_upper_tier() {
    let scorer = RiskScorer::default();

    // 0.10 + 0.08 + 0.05 + 0.12 + 0.05 + 0 - 0.10
    let at_medium = HealthMetrics {
        age: 50,
        bmi: 26.0,
        systolic_bp: 125,
        diastolic_bp: 75,
        cholesterol: 250,
        glucose: 110,
        smoking: false,
        exercise_hours: 6.0,
    };
    let assessment = scorer.predict(&at_medium).unwrap();
    assert_eq!(assessment.risk_score, 0.3);
    assert_eq!(assessment.risk_level, RiskLevel::Medium);

    // 0.10 + 0.15 + 0.05 + 0.15 + 0.05 + 0.15 - 0.05
    let at_high = HealthMetrics {
        age: 50,
        bmi: 31.0,
        systolic_bp: 125,
        diastolic_bp: 75,
        cholesterol: 290,
        glucose: 110,
        smoking: true,
        exercise_hours: 3.0,
    };
    let assessment = scorer.predict(&at_high).unwrap();
    assert_eq!(assessment.risk_score, 0.6);
    assert_eq!(assessment.risk_level, RiskLevel::High);
}
