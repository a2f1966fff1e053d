//! Request and metadata payloads that exist only at the HTTP boundary.
//!
//! Assessment responses reuse the core models directly.

use chrono::{DateTime, Utc};
use healthai_core::errors::ValidationError;
use healthai_core::models::{
    validate_age, validate_severity_scale, SeverityWord, SymptomSet, TriageInput,
};
use serde::{Deserialize, Serialize};

/// Body of `POST /analyze-health`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub age: Option<u32>,
    /// 1-10.
    #[serde(default)]
    pub severity: Option<u8>,
}

impl AnalyzeRequest {
    pub fn into_input(self) -> Result<TriageInput<u8>, ValidationError> {
        let symptoms = SymptomSet::parse(self.symptoms.as_slice())?;
        if let Some(age) = self.age {
            validate_age(age)?;
        }
        if let Some(severity) = self.severity {
            validate_severity_scale(severity)?;
        }
        Ok(TriageInput {
            symptoms,
            age: self.age,
            severity: self.severity,
        })
    }
}

/// Body of `POST /health-advice`.
#[derive(Debug, Clone, Deserialize)]
pub struct AdviceRequest {
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub severity: Option<SeverityWord>,
}

impl AdviceRequest {
    pub fn into_input(self) -> Result<TriageInput<SeverityWord>, ValidationError> {
        let symptoms = SymptomSet::parse(self.symptoms.as_slice())?;
        if let Some(age) = self.age {
            validate_age(age)?;
        }
        Ok(TriageInput {
            symptoms,
            age: self.age,
            severity: self.severity,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
    pub service: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoints {
    pub health_check: String,
    pub risk_prediction: String,
    pub health_analysis: String,
    pub health_advice: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub endpoints: Endpoints,
}

/// Error body: `{"error": <code>, "detail": <message>}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub detail: String,
}
