use crate::errors::PredictionError;
use crate::models::{HealthMetrics, RiskAssessment};

/// Scores a set of health metrics into a risk assessment.
///
/// Implementations are immutable after construction and safe to share
/// across concurrent requests.
pub trait IRiskPredictor: Send + Sync {
    /// Input is expected to be validated; any failure is a generic
    /// [`PredictionError`].
    fn predict(&self, metrics: &HealthMetrics) -> Result<RiskAssessment, PredictionError>;
}
