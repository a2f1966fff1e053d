use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UrgencyLevel;

/// Output of the symptom urgency analyzer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrgencyAssessment {
    pub assessment: String,
    pub recommendations: Vec<String>,
    pub urgency_level: UrgencyLevel,
    pub disclaimer: String,
    pub timestamp: DateTime<Utc>,
}

/// Output of the symptom advice classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthAdvice {
    pub advice: String,
    pub recommendations: Vec<String>,
    pub urgency_level: UrgencyLevel,
    pub disclaimer: String,
    pub timestamp: DateTime<Utc>,
}
