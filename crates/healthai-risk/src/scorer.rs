//! RiskScorer — runs score → tier → confidence → recommendations and
//! packages a [`RiskAssessment`].
//!
//! Implements `IRiskPredictor` from healthai-core.

use healthai_core::config::RiskConfig;
use healthai_core::errors::{HealthAiResult, PredictionError};
use healthai_core::traits::IRiskPredictor;
use healthai_core::{HealthMetrics, RiskAssessment, RiskLevel};
use tracing::{debug, warn};

use crate::confidence;
use crate::factors::RiskFactors;
use crate::recommendations;
use crate::tiers::RiskTiers;

/// Stateless rule-based scorer. Holds only the read-only tier boundaries,
/// so a single instance can serve concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct RiskScorer {
    tiers: RiskTiers,
}

impl RiskScorer {
    pub fn new(tiers: RiskTiers) -> Self {
        Self { tiers }
    }

    pub fn from_config(config: &RiskConfig) -> Self {
        Self::new(RiskTiers::from_config(config))
    }

    pub fn tiers(&self) -> &RiskTiers {
        &self.tiers
    }

    /// Sum of the seven factor contributions, rounded to hundredths and
    /// clamped to [0.0, 1.0].
    pub fn calculate_risk_score(&self, metrics: &HealthMetrics) -> f64 {
        RiskFactors::from_metrics(metrics).score()
    }

    pub fn determine_risk_level(&self, score: f64) -> RiskLevel {
        self.tiers.classify(score)
    }

    /// The score does not feed the estimate; it is recorded for tracing.
    pub fn calculate_confidence(&self, metrics: &HealthMetrics, score: f64) -> f64 {
        let confidence = confidence::calculate_confidence(metrics);
        debug!(score, confidence, "confidence computed");
        confidence
    }

    pub fn generate_recommendations(
        &self,
        metrics: &HealthMetrics,
        level: RiskLevel,
    ) -> Vec<String> {
        recommendations::generate_recommendations(metrics, level)
    }

    /// Score pre-validated metrics.
    pub fn predict(&self, metrics: &HealthMetrics) -> Result<RiskAssessment, PredictionError> {
        let span = healthai_core::predict_span!(metrics.age, metrics.smoking);
        let _guard = span.enter();

        let factors = RiskFactors::from_metrics(metrics);
        let risk_score = factors.score();
        if !risk_score.is_finite() {
            warn!(?factors, "non-finite risk score");
            return Err(PredictionError::failed("risk score is not a finite number"));
        }

        let risk_level = self.determine_risk_level(risk_score);

        let confidence = self.calculate_confidence(metrics, risk_score);
        if !confidence.is_finite() {
            warn!(?metrics, "non-finite confidence");
            return Err(PredictionError::failed("confidence is not a finite number"));
        }

        let recommendations = self.generate_recommendations(metrics, risk_level);

        debug!(
            risk_score,
            %risk_level,
            confidence,
            recommendation_count = recommendations.len(),
            "risk assessment computed"
        );

        Ok(RiskAssessment {
            risk_level,
            risk_score,
            confidence,
            recommendations,
        })
    }

    /// Validate then score. Validation failures stay distinguishable from
    /// prediction failures.
    pub fn assess(&self, metrics: &HealthMetrics) -> HealthAiResult<RiskAssessment> {
        metrics.validate()?;
        Ok(self.predict(metrics)?)
    }
}

impl IRiskPredictor for RiskScorer {
    fn predict(&self, metrics: &HealthMetrics) -> Result<RiskAssessment, PredictionError> {
        RiskScorer::predict(self, metrics)
    }
}
