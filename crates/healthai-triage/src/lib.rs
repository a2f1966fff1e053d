//! # healthai-triage
//!
//! Two keyword classifiers over fixed, process-wide rule tables:
//!
//! - [`UrgencyAnalyzer`]: tiered keyword cascade (emergency → high → medium
//!   → low) with severity and age escalation.
//! - [`AdviceClassifier`]: per-symptom advice entries, most severe matched
//!   urgency wins.
//!
//! Both implement `ISymptomClassifier` from healthai-core.

pub mod advice;
pub mod matching;
pub mod urgency;

pub use advice::AdviceClassifier;
pub use urgency::UrgencyAnalyzer;
