//! HealthAiErrorCode trait for the HTTP boundary.

/// Every error enum implements this to expose a stable, machine-readable
/// code alongside its human-readable message.
pub trait HealthAiErrorCode {
    /// Returns the error code string (e.g., "VALIDATION_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const PREDICTION_FAILED: &str = "PREDICTION_FAILED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SERVER_ERROR: &str = "SERVER_ERROR";
