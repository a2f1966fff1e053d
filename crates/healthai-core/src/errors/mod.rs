//! Error handling for HealthAI.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod healthai_error;
pub mod prediction_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use error_code::HealthAiErrorCode;
pub use healthai_error::{HealthAiError, HealthAiResult};
pub use prediction_error::PredictionError;
pub use validation_error::ValidationError;
