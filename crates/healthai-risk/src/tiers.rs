//! Score → tier bucketing.

use healthai_core::config::RiskConfig;
use healthai_core::constants::{DEFAULT_HIGH_THRESHOLD, DEFAULT_MEDIUM_THRESHOLD};
use healthai_core::RiskLevel;

/// Tier boundaries. Each boundary belongs to the tier above it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskTiers {
    pub medium_threshold: f64,
    pub high_threshold: f64,
}

impl Default for RiskTiers {
    fn default() -> Self {
        Self {
            medium_threshold: DEFAULT_MEDIUM_THRESHOLD,
            high_threshold: DEFAULT_HIGH_THRESHOLD,
        }
    }
}

impl RiskTiers {
    pub fn from_config(config: &RiskConfig) -> Self {
        Self {
            medium_threshold: config.effective_medium_threshold(),
            high_threshold: config.effective_high_threshold(),
        }
    }

    pub fn classify(&self, score: f64) -> RiskLevel {
        if score < self.medium_threshold {
            RiskLevel::Low
        } else if score < self.high_threshold {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}
