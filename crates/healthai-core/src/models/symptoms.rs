//! Symptom input normalization and the small validators shared by the
//! keyword classifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{AGE_MAX, AGE_MIN, SEVERITY_MAX, SEVERITY_MIN};
use crate::errors::ValidationError;

/// A validated, non-empty list of symptoms.
///
/// `reported` keeps the caller's wording (trimmed) for echoing back in
/// assessment text; `normalized` is lowercased for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomSet {
    reported: Vec<String>,
    normalized: Vec<String>,
}

impl SymptomSet {
    /// Trim every entry and drop blanks. Fails when the list is empty or
    /// nothing survives trimming.
    pub fn parse<S: AsRef<str>>(symptoms: &[S]) -> Result<Self, ValidationError> {
        if symptoms.is_empty() {
            return Err(ValidationError::NoSymptoms);
        }

        let reported: Vec<String> = symptoms
            .iter()
            .map(|s| s.as_ref().trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if reported.is_empty() {
            return Err(ValidationError::BlankSymptoms);
        }

        let normalized = reported.iter().map(|s| s.to_lowercase()).collect();
        Ok(Self {
            reported,
            normalized,
        })
    }

    pub fn reported(&self) -> &[String] {
        &self.reported
    }

    pub fn normalized(&self) -> &[String] {
        &self.normalized
    }

    pub fn len(&self) -> usize {
        self.reported.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reported.is_empty()
    }
}

/// Verbal severity accepted by the advice classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityWord {
    Mild,
    Moderate,
    Severe,
}

impl SeverityWord {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }
}

impl fmt::Display for SeverityWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn validate_age(age: u32) -> Result<(), ValidationError> {
    if (AGE_MIN..=AGE_MAX).contains(&age) {
        Ok(())
    } else {
        Err(ValidationError::out_of_range("age", age, AGE_MIN, AGE_MAX))
    }
}

pub fn validate_severity_scale(severity: u8) -> Result<(), ValidationError> {
    if (SEVERITY_MIN..=SEVERITY_MAX).contains(&severity) {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(
            "severity",
            severity,
            SEVERITY_MIN,
            SEVERITY_MAX,
        ))
    }
}

/// Validated input to a keyword classifier. `S` is the classifier's
/// severity representation.
#[derive(Debug, Clone, PartialEq)]
pub struct TriageInput<S> {
    pub symptoms: SymptomSet,
    pub age: Option<u32>,
    pub severity: Option<S>,
}
