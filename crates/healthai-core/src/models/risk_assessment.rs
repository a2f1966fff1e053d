use std::fmt;

use serde::{Deserialize, Serialize};

/// Discrete risk tier derived from a risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of scoring one set of [`HealthMetrics`](super::HealthMetrics).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk_level: RiskLevel,
    /// Clamped additive score in [0.0, 1.0].
    pub risk_score: f64,
    /// Mean of the per-factor confidence signals, in [0.0, 1.0].
    pub confidence: f64,
    /// Ordered, de-duplicated advisories.
    pub recommendations: Vec<String>,
}
