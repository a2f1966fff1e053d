use crate::models::TriageInput;

/// Classifies reported symptoms against a fixed rule table.
pub trait ISymptomClassifier: Send + Sync {
    /// How the caller expresses severity for this classifier.
    type Severity;
    type Output;

    /// Short name used in spans and logs.
    fn name(&self) -> &'static str;

    fn classify(&self, input: &TriageInput<Self::Severity>) -> Self::Output;
}
