//! Input validation errors. Surfaced to callers as client errors.

use super::error_code::{self, HealthAiErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        value: String,
        min: String,
        max: String,
    },

    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    #[error("At least one symptom must be provided")]
    NoSymptoms,

    #[error("Please provide valid, non-empty symptoms")]
    BlankSymptoms,
}

impl ValidationError {
    /// Build an `OutOfRange` error from any displayable bounds.
    pub fn out_of_range<T: std::fmt::Display>(field: &str, value: T, min: T, max: T) -> Self {
        Self::OutOfRange {
            field: field.to_string(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}

impl HealthAiErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        error_code::VALIDATION_ERROR
    }
}
