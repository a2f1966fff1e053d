//! AdviceClassifier — matches each symptom against [`ADVICE_RULES`],
//! keeps the most severe matched urgency, and accumulates advice lines.

use chrono::Utc;
use healthai_core::constants::{DISCLAIMER, ELDERLY_AGE};
use healthai_core::models::{HealthAdvice, SeverityWord, TriageInput};
use healthai_core::traits::ISymptomClassifier;
use healthai_core::UrgencyLevel;
use tracing::debug;

use super::table::{AdviceRule, ADVICE_RULES, AGE_ADVISORY, GENERIC_ADVICE, IMMEDIATE_CARE};
use crate::matching::{is_word_run, keyword_in, push_unique};

#[derive(Debug, Clone, Copy)]
pub struct AdviceClassifier {
    rules: &'static [AdviceRule],
}

impl Default for AdviceClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl AdviceClassifier {
    pub fn new() -> Self {
        Self {
            rules: ADVICE_RULES,
        }
    }

    /// Rules matching one normalized symptom.
    ///
    /// A keyword found inside the symptom is a direct match. Only when a
    /// symptom has no direct match is the reverse direction tried, and then
    /// the symptom must appear in the keyword as whole words.
    pub fn matching_rules(&self, symptom: &str) -> Vec<&'static AdviceRule> {
        let rules = self.rules;
        let direct: Vec<&'static AdviceRule> = rules
            .iter()
            .filter(|rule| keyword_in(symptom, rule.keyword))
            .collect();
        if !direct.is_empty() {
            return direct;
        }
        rules
            .iter()
            .filter(|rule| is_word_run(symptom, rule.keyword))
            .collect()
    }

    pub fn advise(&self, input: &TriageInput<SeverityWord>) -> HealthAdvice {
        let span = healthai_core::triage_span!(self.name(), input.symptoms.len());
        let _guard = span.enter();

        let mut recommendations = Vec::new();
        let mut most_severe: Option<UrgencyLevel> = None;

        for symptom in input.symptoms.normalized() {
            for rule in self.matching_rules(symptom) {
                most_severe = Some(most_severe.map_or(rule.urgency, |u| u.max(rule.urgency)));
                for line in rule.advice {
                    push_unique(&mut recommendations, line);
                }
            }
        }

        let matched = most_severe.is_some();
        if !matched {
            for line in GENERIC_ADVICE {
                push_unique(&mut recommendations, line);
            }
        }

        let mut urgency = most_severe.unwrap_or(UrgencyLevel::Low);
        if input.severity == Some(SeverityWord::Severe) {
            urgency = urgency.escalate();
        }
        if input.age.is_some_and(|a| a >= ELDERLY_AGE) && urgency == UrgencyLevel::Low {
            urgency = UrgencyLevel::Medium;
            push_unique(&mut recommendations, AGE_ADVISORY);
        }
        if urgency == UrgencyLevel::Emergency
            && !recommendations.iter().any(|r| r == IMMEDIATE_CARE)
        {
            recommendations.insert(0, IMMEDIATE_CARE.to_string());
        }

        debug!(
            %urgency,
            matched,
            recommendation_count = recommendations.len(),
            "advice generated"
        );

        HealthAdvice {
            advice: advice_text(input, urgency, matched),
            recommendations,
            urgency_level: urgency,
            disclaimer: DISCLAIMER.to_string(),
            timestamp: Utc::now(),
        }
    }
}

fn advice_text(
    input: &TriageInput<SeverityWord>,
    urgency: UrgencyLevel,
    matched: bool,
) -> String {
    let symptoms = input.symptoms.reported().join(", ");
    if !matched {
        return format!(
            "We could not match your symptoms ({symptoms}) to a known pattern. \
             Please consult a healthcare professional for a proper evaluation."
        );
    }

    let mut text = format!("Based on your symptoms ({symptoms})");
    if let Some(severity) = input.severity {
        text.push_str(&format!(", reported as {severity}"));
    }
    if let Some(age) = input.age {
        text.push_str(&format!(", at age {age}"));
    }
    let summary = match urgency {
        UrgencyLevel::Emergency => {
            "your symptoms may indicate a medical emergency. Seek care immediately."
        }
        UrgencyLevel::High => "you should contact a healthcare provider promptly.",
        UrgencyLevel::Medium => {
            "home care and close monitoring are recommended; contact a provider if symptoms worsen."
        }
        UrgencyLevel::Low => "your symptoms appear mild and can usually be managed at home.",
    };
    text.push_str(", ");
    text.push_str(summary);
    text
}

impl ISymptomClassifier for AdviceClassifier {
    type Severity = SeverityWord;
    type Output = HealthAdvice;

    fn name(&self) -> &'static str {
        "advice"
    }

    fn classify(&self, input: &TriageInput<SeverityWord>) -> HealthAdvice {
        self.advise(input)
    }
}
