use std::fmt;

use serde::{Deserialize, Serialize};

/// Symptom urgency tier. Declaration order is the severity order, so
/// `Ord` gives `Low < Medium < High < Emergency`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
    Emergency,
}

impl UrgencyLevel {
    /// Tiers from most to least severe, the order every cascade walks.
    pub const BY_PRIORITY: [UrgencyLevel; 4] = [
        UrgencyLevel::Emergency,
        UrgencyLevel::High,
        UrgencyLevel::Medium,
        UrgencyLevel::Low,
    ];

    /// One tier more severe, saturating at `Emergency`.
    pub fn escalate(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High | Self::Emergency => Self::Emergency,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Emergency => "emergency",
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
