//! Symptom urgency analysis.

pub mod analyzer;
pub mod patterns;

pub use analyzer::UrgencyAnalyzer;
pub use patterns::{UrgencyRule, URGENCY_RULES};
