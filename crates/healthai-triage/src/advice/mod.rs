//! Per-symptom advice.

pub mod advisor;
pub mod table;

pub use advisor::AdviceClassifier;
pub use table::{AdviceRule, ADVICE_RULES};
