//! Top-level error aggregating every subsystem error via `From`.

use super::error_code::{self, HealthAiErrorCode};
use super::{ConfigError, PredictionError, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum HealthAiError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Prediction error: {0}")]
    Prediction(#[from] PredictionError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Server error: {reason}")]
    Server { reason: String },
}

impl HealthAiError {
    /// True when the caller supplied bad input, as opposed to an internal failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl HealthAiErrorCode for HealthAiError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.error_code(),
            Self::Prediction(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Server { .. } => error_code::SERVER_ERROR,
        }
    }
}

pub type HealthAiResult<T> = Result<T, HealthAiError>;
