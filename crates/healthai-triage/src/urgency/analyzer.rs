//! UrgencyAnalyzer — keyword cascade over [`URGENCY_RULES`] with severity
//! and age escalation.

use chrono::Utc;
use healthai_core::constants::{DISCLAIMER, ELDERLY_AGE, SEVERITY_ESCALATION_THRESHOLD};
use healthai_core::models::{TriageInput, UrgencyAssessment};
use healthai_core::traits::ISymptomClassifier;
use healthai_core::UrgencyLevel;
use tracing::debug;

use super::patterns::{
    UrgencyRule, AGE_RISK_ADVISORY, CONSULT_PROFESSIONAL, LOW_RECOMMENDATIONS, URGENCY_RULES,
};
use crate::matching::push_unique;

#[derive(Debug, Clone, Copy)]
pub struct UrgencyAnalyzer {
    rules: &'static [UrgencyRule],
}

impl Default for UrgencyAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl UrgencyAnalyzer {
    pub fn new() -> Self {
        Self {
            rules: URGENCY_RULES,
        }
    }

    /// First rule, in priority order, with a keyword inside any symptom.
    fn first_match(&self, normalized: &[String]) -> Option<&'static UrgencyRule> {
        self.rules.iter().find(|rule| rule.matches(normalized))
    }

    /// Analyze symptoms with an optional numeric severity (1-10).
    pub fn analyze(&self, input: &TriageInput<u8>) -> UrgencyAssessment {
        let span = healthai_core::triage_span!(self.name(), input.symptoms.len());
        let _guard = span.enter();

        let mut recommendations = Vec::new();
        let mut urgency = match self.first_match(input.symptoms.normalized()) {
            Some(rule) => {
                for rec in rule.recommendations {
                    push_unique(&mut recommendations, rec);
                }
                rule.level
            }
            None => {
                for rec in LOW_RECOMMENDATIONS {
                    push_unique(&mut recommendations, rec);
                }
                push_unique(&mut recommendations, CONSULT_PROFESSIONAL);
                UrgencyLevel::Low
            }
        };

        // High severity raises low and medium by one tier; it never
        // promotes anything to emergency.
        if input
            .severity
            .is_some_and(|s| s >= SEVERITY_ESCALATION_THRESHOLD)
            && urgency <= UrgencyLevel::Medium
        {
            urgency = urgency.escalate();
        }

        if input.age.is_some_and(|a| a >= ELDERLY_AGE) && urgency == UrgencyLevel::Low {
            urgency = UrgencyLevel::Medium;
            push_unique(&mut recommendations, AGE_RISK_ADVISORY);
        }

        debug!(
            %urgency,
            recommendation_count = recommendations.len(),
            "urgency assessed"
        );

        UrgencyAssessment {
            assessment: assessment_text(input, urgency),
            recommendations,
            urgency_level: urgency,
            disclaimer: DISCLAIMER.to_string(),
            timestamp: Utc::now(),
        }
    }
}

fn assessment_text(input: &TriageInput<u8>, urgency: UrgencyLevel) -> String {
    let mut text = format!(
        "Based on the reported symptoms ({}), ",
        input.symptoms.reported().join(", ")
    );
    if let Some(severity) = input.severity {
        text.push_str(&format!("with severity level {severity}/10, "));
    }
    if let Some(age) = input.age {
        text.push_str(&format!("for a {age}-year-old patient, "));
    }
    text.push_str(&format!("the urgency level is assessed as {urgency}."));
    text
}

impl ISymptomClassifier for UrgencyAnalyzer {
    type Severity = u8;
    type Output = UrgencyAssessment;

    fn name(&self) -> &'static str {
        "urgency"
    }

    fn classify(&self, input: &TriageInput<u8>) -> UrgencyAssessment {
        self.analyze(input)
    }
}
