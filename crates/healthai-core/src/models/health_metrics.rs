use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::errors::ValidationError;

/// Health metrics submitted for risk scoring. Immutable per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetrics {
    /// Age in years (1-120).
    pub age: u32,
    /// Body mass index (10.0-50.0).
    pub bmi: f64,
    /// Systolic blood pressure in mmHg (70-250).
    pub systolic_bp: u32,
    /// Diastolic blood pressure in mmHg (40-150).
    pub diastolic_bp: u32,
    /// Total cholesterol in mg/dL (100-400).
    pub cholesterol: u32,
    /// Fasting glucose in mg/dL (50-300).
    pub glucose: u32,
    pub smoking: bool,
    /// Weekly exercise in hours (0.0-20.0).
    pub exercise_hours: f64,
}

impl HealthMetrics {
    /// Check every field against its inclusive range.
    /// Reports the first violation in field declaration order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_int("age", self.age, AGE_MIN, AGE_MAX)?;
        check_float("bmi", self.bmi, BMI_MIN, BMI_MAX)?;
        check_int("systolic_bp", self.systolic_bp, SYSTOLIC_MIN, SYSTOLIC_MAX)?;
        check_int(
            "diastolic_bp",
            self.diastolic_bp,
            DIASTOLIC_MIN,
            DIASTOLIC_MAX,
        )?;
        check_int(
            "cholesterol",
            self.cholesterol,
            CHOLESTEROL_MIN,
            CHOLESTEROL_MAX,
        )?;
        check_int("glucose", self.glucose, GLUCOSE_MIN, GLUCOSE_MAX)?;
        check_float(
            "exercise_hours",
            self.exercise_hours,
            EXERCISE_MIN,
            EXERCISE_MAX,
        )?;
        Ok(())
    }
}

fn check_int(field: &str, value: u32, min: u32, max: u32) -> Result<(), ValidationError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(field, value, min, max))
    }
}

fn check_float(field: &str, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(field, value, min, max))
    }
}
