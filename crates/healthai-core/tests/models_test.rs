//! Tests for input validation and model serialization.

use healthai_core::errors::ValidationError;
use healthai_core::models::*;
use proptest::prelude::*;

fn healthy() -> HealthMetrics {
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

#[test]
fn test_valid_metrics_pass() {
    assert_eq!(healthy().validate(), Ok(()));
}

#[test]
fn test_range_bounds_are_inclusive() {
    let lower = HealthMetrics {
        age: 1,
        bmi: 10.0,
        systolic_bp: 70,
        diastolic_bp: 40,
        cholesterol: 100,
        glucose: 50,
        smoking: true,
        exercise_hours: 0.0,
    };
    assert_eq!(lower.validate(), Ok(()));

    let upper = HealthMetrics {
        age: 120,
        bmi: 50.0,
        systolic_bp: 250,
        diastolic_bp: 150,
        cholesterol: 400,
        glucose: 300,
        smoking: false,
        exercise_hours: 20.0,
    };
    assert_eq!(upper.validate(), Ok(()));
}

#[test]
fn test_each_field_is_checked() {
    let mut cases: Vec<(&str, HealthMetrics)> = Vec::new();
    let mut m = healthy();
    m.age = 0;
    cases.push(("age", m));
    let mut m = healthy();
    m.bmi = 50.1;
    cases.push(("bmi", m));
    let mut m = healthy();
    m.systolic_bp = 69;
    cases.push(("systolic_bp", m));
    let mut m = healthy();
    m.diastolic_bp = 151;
    cases.push(("diastolic_bp", m));
    let mut m = healthy();
    m.cholesterol = 401;
    cases.push(("cholesterol", m));
    let mut m = healthy();
    m.glucose = 49;
    cases.push(("glucose", m));
    let mut m = healthy();
    m.exercise_hours = 20.5;
    cases.push(("exercise_hours", m));

    for (expected_field, metrics) in cases {
        match metrics.validate() {
            Err(ValidationError::OutOfRange { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("{expected_field}: expected OutOfRange, got {other:?}"),
        }
    }
}

#[test]
fn test_non_finite_float_is_rejected() {
    let metrics = HealthMetrics {
        bmi: f64::NAN,
        ..healthy()
    };
    assert_eq!(
        metrics.validate(),
        Err(ValidationError::NotFinite {
            field: "bmi".to_string()
        })
    );
}

#[test]
fn test_metrics_deserialize_rejects_wrong_types() {
    let negative_age = r#"{"age":-5,"bmi":22.0,"systolic_bp":110,"diastolic_bp":70,
        "cholesterol":180,"glucose":85,"smoking":false,"exercise_hours":1.0}"#;
    let parsed = serde_json::from_str::<HealthMetrics>(negative_age);
    assert!(parsed.is_err());

    let missing_field = r#"{"age":40,"bmi":22.0}"#;
    let parsed = serde_json::from_str::<HealthMetrics>(missing_field);
    assert!(parsed.is_err());
}

#[test]
fn test_symptom_set_trims_and_lowercases() {
    let set = SymptomSet::parse(&["  Chest Pain ", "", "   ", "Fever"]).unwrap();
    assert_eq!(set.reported(), ["Chest Pain", "Fever"]);
    assert_eq!(set.normalized(), ["chest pain", "fever"]);
    assert_eq!(set.len(), 2);
}

#[test]
fn test_symptom_set_rejects_empty_and_blank() {
    let empty: [&str; 0] = [];
    assert_eq!(SymptomSet::parse(&empty), Err(ValidationError::NoSymptoms));
    assert_eq!(
        SymptomSet::parse(&["  ", "\t"]),
        Err(ValidationError::BlankSymptoms)
    );
}

#[test]
fn test_age_and_severity_validators() {
    assert!(validate_age(1).is_ok());
    assert!(validate_age(120).is_ok());
    assert!(validate_age(0).is_err());
    assert!(validate_age(121).is_err());

    assert!(validate_severity_scale(1).is_ok());
    assert!(validate_severity_scale(10).is_ok());
    assert!(validate_severity_scale(0).is_err());
    assert!(validate_severity_scale(11).is_err());
}

#[test]
fn test_urgency_order_and_escalation() {
    assert!(UrgencyLevel::Low < UrgencyLevel::Medium);
    assert!(UrgencyLevel::Medium < UrgencyLevel::High);
    assert!(UrgencyLevel::High < UrgencyLevel::Emergency);

    assert_eq!(UrgencyLevel::Low.escalate(), UrgencyLevel::Medium);
    assert_eq!(UrgencyLevel::High.escalate(), UrgencyLevel::Emergency);
    assert_eq!(UrgencyLevel::Emergency.escalate(), UrgencyLevel::Emergency);
}

#[test]
fn test_levels_serialize_lowercase() {
    let medium = serde_json::to_string(&RiskLevel::Medium).unwrap();
    assert_eq!(medium, "\"medium\"");
    assert_eq!(
        serde_json::to_string(&UrgencyLevel::Emergency).unwrap(),
        "\"emergency\""
    );
    let word: SeverityWord = serde_json::from_str("\"severe\"").unwrap();
    assert_eq!(word, SeverityWord::Severe);
}

proptest! {
    #[test]
    fn in_range_metrics_always_validate(
        age in 1u32..=120,
        bmi in 10.0f64..=50.0,
        systolic_bp in 70u32..=250,
        diastolic_bp in 40u32..=150,
        cholesterol in 100u32..=400,
        glucose in 50u32..=300,
        smoking in any::<bool>(),
        exercise_hours in 0.0f64..=20.0,
    ) {
        let metrics = HealthMetrics {
            age, bmi, systolic_bp, diastolic_bp, cholesterol, glucose, smoking, exercise_hours,
        };
        prop_assert!(metrics.validate().is_ok());
    }

    #[test]
    fn symptom_set_never_holds_blank_entries(
        symptoms in prop::collection::vec("[ a-zA-Z]{0,12}", 1..6),
    ) {
        if let Ok(set) = SymptomSet::parse(symptoms.as_slice()) {
            prop_assert!(set.normalized().iter().all(|s| !s.trim().is_empty()));
            prop_assert_eq!(set.reported().len(), set.normalized().len());
        }
    }
}
