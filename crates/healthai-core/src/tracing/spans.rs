//! Span definitions per operation: risk prediction, symptom triage, and
//! inbound HTTP requests.

/// Create a risk prediction span.
#[macro_export]
macro_rules! predict_span {
    ($age:expr, $smoking:expr) => {
        tracing::info_span!("healthai.predict", age = $age, smoking = $smoking)
    };
}

/// Create a symptom triage span.
#[macro_export]
macro_rules! triage_span {
    ($classifier:expr, $symptom_count:expr) => {
        tracing::info_span!(
            "healthai.triage",
            classifier = %$classifier,
            symptom_count = $symptom_count
        )
    };
}

/// Create an inbound HTTP request span.
#[macro_export]
macro_rules! request_span {
    ($method:expr, $path:expr) => {
        tracing::info_span!("healthai.request", method = %$method, path = %$path)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const PREDICT: &str = "healthai.predict";
    pub const TRIAGE: &str = "healthai.triage";
    pub const REQUEST: &str = "healthai.request";
}
