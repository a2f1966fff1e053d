//! Shared constants for the HealthAI service.

/// HealthAI version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Human-readable service name reported by the metadata endpoints.
pub const SERVICE_NAME: &str = "Health AI API";

/// Medical disclaimer attached to every symptom response.
pub const DISCLAIMER: &str = "This is not a substitute for professional medical advice. \
Always consult healthcare providers for medical concerns.";

// ---- Server ----

/// Default bind host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 8000;

// ---- Observability ----

/// Default log level when neither `HEALTHAI_LOG` nor config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted by the config validator.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

// ---- Risk tiers ----

/// Scores at or above this are Medium.
pub const DEFAULT_MEDIUM_THRESHOLD: f64 = 0.3;

/// Scores at or above this are High.
pub const DEFAULT_HIGH_THRESHOLD: f64 = 0.6;

// ---- Metric ranges (inclusive) ----

pub const AGE_MIN: u32 = 1;
pub const AGE_MAX: u32 = 120;
pub const BMI_MIN: f64 = 10.0;
pub const BMI_MAX: f64 = 50.0;
pub const SYSTOLIC_MIN: u32 = 70;
pub const SYSTOLIC_MAX: u32 = 250;
pub const DIASTOLIC_MIN: u32 = 40;
pub const DIASTOLIC_MAX: u32 = 150;
pub const CHOLESTEROL_MIN: u32 = 100;
pub const CHOLESTEROL_MAX: u32 = 400;
pub const GLUCOSE_MIN: u32 = 50;
pub const GLUCOSE_MAX: u32 = 300;
pub const EXERCISE_MIN: f64 = 0.0;
pub const EXERCISE_MAX: f64 = 20.0;

// ---- Symptom triage ----

/// Numeric severity scale bounds for the urgency analyzer.
pub const SEVERITY_MIN: u8 = 1;
pub const SEVERITY_MAX: u8 = 10;

/// Numeric severity at or above which urgency escalates one tier.
pub const SEVERITY_ESCALATION_THRESHOLD: u8 = 8;

/// Age at or above which a low urgency is raised to medium.
pub const ELDERLY_AGE: u32 = 65;
