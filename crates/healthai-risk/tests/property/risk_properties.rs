use healthai_core::{HealthMetrics, RiskLevel};
use healthai_risk::RiskScorer;
use proptest::prelude::*;

fn metrics_strategy() -> impl Strategy<Value = HealthMetrics> {
    (
        1u32..=120,
        10.0f64..=50.0,
        70u32..=250,
        40u32..=150,
        100u32..=400,
        50u32..=300,
        any::<bool>(),
        0.0f64..=20.0,
    )
        .prop_map(|(age, bmi, sys, dia, chol, glucose, smoking, exercise)| HealthMetrics {
            age,
            bmi,
            systolic_bp: sys,
            diastolic_bp: dia,
            cholesterol: chol,
            glucose,
            smoking,
            exercise_hours: exercise,
        })
}

proptest! {
    #[test]
    fn score_and_confidence_are_in_unit_interval(m in metrics_strategy()) {
        let a = RiskScorer::default().predict(&m).unwrap();
        prop_assert!((0.0..=1.0).contains(&a.risk_score));
        prop_assert!((0.0..=1.0).contains(&a.confidence));
        prop_assert!(!a.recommendations.is_empty());
    }

    #[test]
    fn level_is_a_function_of_score(m in metrics_strategy()) {
        let scorer = RiskScorer::default();
        let a = scorer.predict(&m).unwrap();
        prop_assert_eq!(a.risk_level, scorer.determine_risk_level(a.risk_score));
        let expected = if a.risk_score < 0.3 {
            RiskLevel::Low
        } else if a.risk_score < 0.6 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        };
        prop_assert_eq!(a.risk_level, expected);
    }

    #[test]
    fn score_is_a_whole_number_of_hundredths(m in metrics_strategy()) {
        let score = RiskScorer::default().calculate_risk_score(&m);
        prop_assert_eq!(score, (score * 100.0).round() / 100.0);
    }

    #[test]
    fn recommendations_have_no_duplicates(m in metrics_strategy()) {
        let a = RiskScorer::default().predict(&m).unwrap();
        for (i, rec) in a.recommendations.iter().enumerate() {
            prop_assert!(!a.recommendations[..i].contains(rec));
        }
    }

    #[test]
    fn predict_is_idempotent(m in metrics_strategy()) {
        let scorer = RiskScorer::default();
        prop_assert_eq!(scorer.predict(&m).unwrap(), scorer.predict(&m).unwrap());
    }

    #[test]
    fn risk_never_drops_as_a_metric_worsens(
        m in metrics_strategy(),
        age_step in 0u32..40,
        bmi_step in 0.0f64..20.0,
        sys_step in 0u32..60,
        dia_step in 0u32..40,
        chol_step in 0u32..100,
        glu_step in 0u32..100,
    ) {
        let scorer = RiskScorer::default();
        let base = scorer.calculate_risk_score(&m);

        let worse = [
            HealthMetrics { age: (m.age + age_step).min(120), ..m.clone() },
            HealthMetrics { bmi: (m.bmi + bmi_step).min(50.0), ..m.clone() },
            HealthMetrics { systolic_bp: (m.systolic_bp + sys_step).min(250), ..m.clone() },
            HealthMetrics { diastolic_bp: (m.diastolic_bp + dia_step).min(150), ..m.clone() },
            HealthMetrics { cholesterol: (m.cholesterol + chol_step).min(400), ..m.clone() },
            HealthMetrics { glucose: (m.glucose + glu_step).min(300), ..m.clone() },
        ];
        for w in &worse {
            prop_assert!(scorer.calculate_risk_score(w) >= base, "{:?} scored below {:?}", w, m);
        }
    }

    #[test]
    fn more_exercise_never_raises_risk(m in metrics_strategy(), step in 0.0f64..20.0) {
        let scorer = RiskScorer::default();
        let more = HealthMetrics {
            exercise_hours: (m.exercise_hours + step).min(20.0),
            ..m.clone()
        };
        prop_assert!(scorer.calculate_risk_score(&more) <= scorer.calculate_risk_score(&m));
    }
}
