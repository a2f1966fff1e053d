//! Request and response models shared across the workspace.

pub mod health_metrics;
pub mod risk_assessment;
pub mod symptoms;
pub mod triage;
pub mod urgency;

pub use health_metrics::HealthMetrics;
pub use risk_assessment::{RiskAssessment, RiskLevel};
pub use symptoms::{validate_age, validate_severity_scale, SeverityWord, SymptomSet, TriageInput};
pub use triage::{HealthAdvice, UrgencyAssessment};
pub use urgency::UrgencyLevel;
