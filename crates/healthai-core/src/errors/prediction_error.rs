//! Scoring failures. There is a single generic variant: callers only learn
//! that the prediction failed, the reason goes to the logs.

use super::error_code::{self, HealthAiErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictionError {
    #[error("prediction failed: {reason}")]
    Failed { reason: String },
}

impl PredictionError {
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }
}

impl HealthAiErrorCode for PredictionError {
    fn error_code(&self) -> &'static str {
        error_code::PREDICTION_FAILED
    }
}
