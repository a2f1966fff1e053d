//! Additive risk factors.
//!
//! Each factor is a piecewise-constant lookup over one metric (blood
//! pressure looks at systolic and diastolic together). Bands are listed
//! most severe first and the first matching band wins.

use healthai_core::HealthMetrics;
use serde::Serialize;

/// Lower edge of a band.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Cut {
    /// value >= edge
    AtLeast(f64),
    /// value > edge
    Above(f64),
}

impl Cut {
    pub(crate) fn admits(self, value: f64) -> bool {
        match self {
            Cut::AtLeast(edge) => value >= edge,
            Cut::Above(edge) => value > edge,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Band {
    pub(crate) cut: Cut,
    pub(crate) contribution: f64,
}

const fn band(cut: Cut, contribution: f64) -> Band {
    Band { cut, contribution }
}

/// Returns the contribution of the first admitting band, else `fallback`.
pub(crate) fn lookup(value: f64, bands: &[Band], fallback: f64) -> f64 {
    bands
        .iter()
        .find(|b| b.cut.admits(value))
        .map_or(fallback, |b| b.contribution)
}

/// Contribution of any metric that sits in its normal range.
const BASELINE: f64 = 0.02;

const AGE_BANDS: &[Band] = &[
    band(Cut::AtLeast(65.0), 0.15),
    band(Cut::AtLeast(45.0), 0.10),
];

const BMI_BANDS: &[Band] = &[
    band(Cut::AtLeast(35.0), 0.20),
    band(Cut::Above(29.9), 0.15),
    band(Cut::Above(24.9), 0.08),
];

const CHOLESTEROL_BANDS: &[Band] = &[
    band(Cut::AtLeast(280.0), 0.15),
    band(Cut::Above(239.0), 0.12),
    band(Cut::Above(200.0), 0.08),
];

const GLUCOSE_BANDS: &[Band] = &[
    band(Cut::AtLeast(126.0), 0.15),
    band(Cut::Above(125.0), 0.10),
    band(Cut::Above(100.0), 0.05),
];

const EXERCISE_BANDS: &[Band] = &[
    band(Cut::AtLeast(5.0), -0.10),
    band(Cut::AtLeast(2.5), -0.05),
    band(Cut::AtLeast(1.0), 0.02),
];

const SEDENTARY: f64 = 0.05;

const SMOKING: f64 = 0.15;

/// One blood pressure tier: matches when either reading crosses its cut.
struct PressureTier {
    systolic: Cut,
    diastolic: Cut,
    contribution: f64,
}

const PRESSURE_TIERS: &[PressureTier] = &[
    PressureTier {
        systolic: Cut::AtLeast(180.0),
        diastolic: Cut::AtLeast(110.0),
        contribution: 0.25,
    },
    PressureTier {
        systolic: Cut::AtLeast(140.0),
        diastolic: Cut::AtLeast(90.0),
        contribution: 0.20,
    },
    PressureTier {
        systolic: Cut::Above(129.0),
        diastolic: Cut::Above(89.0),
        contribution: 0.12,
    },
    PressureTier {
        systolic: Cut::Above(120.0),
        diastolic: Cut::Above(80.0),
        contribution: 0.05,
    },
];

pub fn age_risk(age: u32) -> f64 {
    lookup(f64::from(age), AGE_BANDS, BASELINE)
}

pub fn bmi_risk(bmi: f64) -> f64 {
    lookup(bmi, BMI_BANDS, BASELINE)
}

pub fn blood_pressure_risk(systolic: u32, diastolic: u32) -> f64 {
    let (systolic, diastolic) = (f64::from(systolic), f64::from(diastolic));
    PRESSURE_TIERS
        .iter()
        .find(|t| t.systolic.admits(systolic) || t.diastolic.admits(diastolic))
        .map_or(BASELINE, |t| t.contribution)
}

pub fn cholesterol_risk(cholesterol: u32) -> f64 {
    lookup(f64::from(cholesterol), CHOLESTEROL_BANDS, BASELINE)
}

pub fn glucose_risk(glucose: u32) -> f64 {
    lookup(f64::from(glucose), GLUCOSE_BANDS, BASELINE)
}

pub fn smoking_risk(smoking: bool) -> f64 {
    if smoking {
        SMOKING
    } else {
        0.0
    }
}

/// Negative for active people, so it can pull the total down.
pub fn exercise_risk(exercise_hours: f64) -> f64 {
    lookup(exercise_hours, EXERCISE_BANDS, SEDENTARY)
}

/// The seven contributions for one set of metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskFactors {
    pub age: f64,
    pub bmi: f64,
    pub blood_pressure: f64,
    pub cholesterol: f64,
    pub glucose: f64,
    pub smoking: f64,
    pub exercise: f64,
}

impl RiskFactors {
    pub fn from_metrics(metrics: &HealthMetrics) -> Self {
        Self {
            age: age_risk(metrics.age),
            bmi: bmi_risk(metrics.bmi),
            blood_pressure: blood_pressure_risk(metrics.systolic_bp, metrics.diastolic_bp),
            cholesterol: cholesterol_risk(metrics.cholesterol),
            glucose: glucose_risk(metrics.glucose),
            smoking: smoking_risk(metrics.smoking),
            exercise: exercise_risk(metrics.exercise_hours),
        }
    }

    /// Unclamped sum of all contributions.
    pub fn sum(&self) -> f64 {
        self.age
            + self.bmi
            + self.blood_pressure
            + self.cholesterol
            + self.glucose
            + self.smoking
            + self.exercise
    }

    /// Sum rounded to hundredths, then clamped into [0.0, 1.0].
    ///
    /// Every contribution is a whole number of hundredths, so rounding
    /// removes float drift and totals land exactly on tier boundaries.
    pub fn score(&self) -> f64 {
        ((self.sum() * 100.0).round() / 100.0).clamp(0.0, 1.0)
    }
}
