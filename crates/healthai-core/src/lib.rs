//! # healthai-core
//!
//! Foundation crate for the HealthAI service.
//! Defines the data model, input validation, errors, config, tracing setup,
//! and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::HealthAiConfig;
pub use errors::{HealthAiError, HealthAiResult};
pub use models::{HealthMetrics, RiskAssessment, RiskLevel, UrgencyLevel};
