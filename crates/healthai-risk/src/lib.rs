//! # healthai-risk
//!
//! Rule-based risk scoring over [`HealthMetrics`](healthai_core::HealthMetrics).
//!
//! Seven bounded additive factors are summed and clamped into a score, the
//! score is bucketed into a tier, and a confidence estimate plus ordered
//! recommendations are derived. Everything is pure and single-pass.

pub mod confidence;
pub mod factors;
pub mod recommendations;
pub mod scorer;
pub mod tiers;

pub use factors::RiskFactors;
pub use scorer::RiskScorer;
pub use tiers::RiskTiers;
