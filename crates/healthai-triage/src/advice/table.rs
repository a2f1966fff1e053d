//! Advice knowledge base: one entry per recognizable symptom.
//!
//! Entry order carries no priority. The classifier ranks matches by
//! [`UrgencyLevel`] explicitly.

use healthai_core::UrgencyLevel;

#[derive(Debug)]
pub struct AdviceRule {
    pub keyword: &'static str,
    pub urgency: UrgencyLevel,
    pub advice: &'static [&'static str],
}

pub const IMMEDIATE_CARE: &str =
    "Seek immediate medical attention or call emergency services (911)";

pub const AGE_ADVISORY: &str =
    "Given your age, check in with a healthcare provider even for mild symptoms";

pub const GENERIC_ADVICE: &[&str] = &[
    "Consult a healthcare professional for a proper evaluation",
    "Keep a record of when symptoms occur and how they change",
    "Seek urgent care if symptoms suddenly worsen",
];

pub const ADVICE_RULES: &[AdviceRule] = &[
    AdviceRule {
        keyword: "chest pain",
        urgency: UrgencyLevel::Emergency,
        advice: &[
            "Do not drive yourself to the hospital",
            "Stop any physical activity and rest while waiting for help",
            "Chew an aspirin only if a medical professional advises it",
        ],
    },
    AdviceRule {
        keyword: "difficulty breathing",
        urgency: UrgencyLevel::Emergency,
        advice: &[
            "Sit upright and try to stay calm",
            "Loosen any tight clothing",
        ],
    },
    AdviceRule {
        keyword: "severe bleeding",
        urgency: UrgencyLevel::Emergency,
        advice: &[
            "Apply firm, steady pressure to the wound with a clean cloth",
        ],
    },
    AdviceRule {
        keyword: "high fever",
        urgency: UrgencyLevel::High,
        advice: &[
            "Contact a healthcare provider within 24 hours",
            "Use fever reducers as directed and stay hydrated",
        ],
    },
    AdviceRule {
        keyword: "vomiting",
        urgency: UrgencyLevel::Medium,
        advice: &[
            "Sip clear fluids in small amounts",
            "Seek care if you cannot keep fluids down for 24 hours",
        ],
    },
    AdviceRule {
        keyword: "dizziness",
        urgency: UrgencyLevel::Medium,
        advice: &[
            "Sit or lie down until the dizziness passes",
            "Stand up slowly",
            "Seek care if dizziness recurs or comes with fainting",
        ],
    },
    AdviceRule {
        keyword: "fever",
        urgency: UrgencyLevel::Medium,
        advice: &[
            "Rest and drink plenty of fluids",
            "Take acetaminophen or ibuprofen as directed to reduce fever",
            "See a doctor if the fever exceeds 103°F (39.4°C) or lasts more than 3 days",
        ],
    },
    AdviceRule {
        keyword: "headache",
        urgency: UrgencyLevel::Low,
        advice: &[
            "Rest in a quiet, dark room",
            "Stay hydrated",
            "Consider over-the-counter pain relievers if appropriate",
            "See a doctor if headaches are severe or frequent",
        ],
    },
    AdviceRule {
        keyword: "cough",
        urgency: UrgencyLevel::Low,
        advice: &[
            "Stay hydrated and use honey or lozenges to soothe your throat",
            "Use a humidifier",
            "See a doctor if the cough lasts more than 3 weeks or produces blood",
        ],
    },
    AdviceRule {
        keyword: "fatigue",
        urgency: UrgencyLevel::Low,
        advice: &[
            "Aim for 7-9 hours of sleep",
            "Eat balanced meals and stay hydrated",
            "Consult a doctor if fatigue persists for more than two weeks",
        ],
    },
    AdviceRule {
        keyword: "nausea",
        urgency: UrgencyLevel::Low,
        advice: &["Eat small, bland meals", "Stay hydrated"],
    },
    AdviceRule {
        keyword: "sore throat",
        urgency: UrgencyLevel::Low,
        advice: &[
            "Gargle with warm salt water",
            "Drink warm fluids",
            "See a doctor if it lasts more than a week or swallowing becomes difficult",
        ],
    },
];
