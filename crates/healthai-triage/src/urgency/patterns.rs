//! Urgency knowledge base. Rules are listed most severe first; the
//! analyzer walks them in this order and stops at the first match.

use healthai_core::UrgencyLevel;

use crate::matching::keyword_in;

#[derive(Debug)]
pub struct UrgencyRule {
    pub level: UrgencyLevel,
    pub keywords: &'static [&'static str],
    pub recommendations: &'static [&'static str],
}

impl UrgencyRule {
    /// Any keyword contained in any normalized symptom.
    pub fn matches(&self, normalized_symptoms: &[String]) -> bool {
        normalized_symptoms
            .iter()
            .any(|symptom| self.keywords.iter().any(|kw| keyword_in(symptom, kw)))
    }
}

pub const EMERGENCY_RECOMMENDATIONS: &[&str] = &[
    "Seek immediate emergency medical attention",
    "Call emergency services (911) immediately",
    "Do not delay medical care",
];

pub const HIGH_RECOMMENDATIONS: &[&str] = &[
    "Consult a healthcare provider within 24 hours",
    "Monitor symptoms closely",
    "Consider urgent care if symptoms worsen",
];

pub const MEDIUM_RECOMMENDATIONS: &[&str] = &[
    "Rest and stay hydrated",
    "Monitor symptoms for 2-3 days",
    "Consider over-the-counter pain relievers if appropriate",
    "Consult healthcare provider if symptoms persist or worsen",
];

pub const LOW_RECOMMENDATIONS: &[&str] = &[
    "Get adequate rest",
    "Stay hydrated",
    "Consider gentle exercise or stretching",
    "Monitor symptoms",
];

/// Added to the low-tier list when no rule matched at all.
pub const CONSULT_PROFESSIONAL: &str =
    "Consult a healthcare professional if you are unsure about your symptoms";

/// Added when age alone raised the urgency.
pub const AGE_RISK_ADVISORY: &str =
    "Consider consulting healthcare provider due to age-related risk factors";

pub const URGENCY_RULES: &[UrgencyRule] = &[
    UrgencyRule {
        level: UrgencyLevel::Emergency,
        keywords: &[
            "chest pain",
            "difficulty breathing",
            "severe bleeding",
            "unconscious",
            "stroke",
            "heart attack",
        ],
        recommendations: EMERGENCY_RECOMMENDATIONS,
    },
    UrgencyRule {
        level: UrgencyLevel::High,
        keywords: &[
            "high fever",
            "severe headache",
            "persistent vomiting",
            "severe pain",
            "difficulty swallowing",
        ],
        recommendations: HIGH_RECOMMENDATIONS,
    },
    UrgencyRule {
        level: UrgencyLevel::Medium,
        keywords: &[
            "fever",
            "headache",
            "nausea",
            "fatigue",
            "muscle aches",
            "sore throat",
        ],
        recommendations: MEDIUM_RECOMMENDATIONS,
    },
    UrgencyRule {
        level: UrgencyLevel::Low,
        keywords: &[
            "mild headache",
            "minor fatigue",
            "slight congestion",
            "mild muscle soreness",
        ],
        recommendations: LOW_RECOMMENDATIONS,
    },
];
