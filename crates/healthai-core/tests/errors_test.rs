//! Tests for the HealthAI error handling system.

use healthai_core::errors::error_code::{self, HealthAiErrorCode};
use healthai_core::errors::*;

#[test]
fn test_every_error_has_a_code() {
    let validation = ValidationError::NoSymptoms;
    assert_eq!(validation.error_code(), error_code::VALIDATION_ERROR);

    let prediction = PredictionError::failed("nan score");
    assert_eq!(prediction.error_code(), error_code::PREDICTION_FAILED);

    let config = ConfigError::FileNotFound {
        path: "/tmp/healthai.toml".into(),
    };
    assert_eq!(config.error_code(), error_code::CONFIG_ERROR);

    let server = HealthAiError::Server {
        reason: "bind failed".into(),
    };
    assert_eq!(server.error_code(), error_code::SERVER_ERROR);
}

#[test]
fn test_from_conversions_keep_the_inner_code() {
    let err: HealthAiError = ValidationError::BlankSymptoms.into();
    assert!(err.is_client_error());
    assert_eq!(err.error_code(), error_code::VALIDATION_ERROR);

    let err: HealthAiError = PredictionError::failed("boom").into();
    assert!(!err.is_client_error());
    assert_eq!(err.error_code(), error_code::PREDICTION_FAILED);
}

#[test]
fn test_out_of_range_message_names_field_and_bounds() {
    let err = ValidationError::out_of_range("age", 130, 1, 120);
    assert_eq!(err.to_string(), "age must be between 1 and 120, got 130");
    assert_eq!(
        err.coded_string(),
        "[VALIDATION_ERROR] age must be between 1 and 120, got 130"
    );
}
