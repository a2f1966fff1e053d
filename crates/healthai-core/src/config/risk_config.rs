//! Risk tier boundaries.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RiskConfig {
    /// Lowest score classified as Medium. Default: 0.3.
    pub medium_threshold: Option<f64>,
    /// Lowest score classified as High. Default: 0.6.
    pub high_threshold: Option<f64>,
}

impl RiskConfig {
    pub fn effective_medium_threshold(&self) -> f64 {
        self.medium_threshold
            .unwrap_or(constants::DEFAULT_MEDIUM_THRESHOLD)
    }

    pub fn effective_high_threshold(&self) -> f64 {
        self.high_threshold
            .unwrap_or(constants::DEFAULT_HIGH_THRESHOLD)
    }
}
