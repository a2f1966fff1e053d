//! Shared, read-only request state.

use std::sync::Arc;

use healthai_core::traits::IRiskPredictor;
use healthai_core::HealthAiConfig;
use healthai_risk::RiskScorer;
use healthai_triage::{AdviceClassifier, UrgencyAnalyzer};

/// Engines shared by every request. Nothing here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<dyn IRiskPredictor>,
    pub urgency: UrgencyAnalyzer,
    pub advice: AdviceClassifier,
}

impl AppState {
    pub fn new(predictor: Arc<dyn IRiskPredictor>) -> Self {
        Self {
            predictor,
            urgency: UrgencyAnalyzer::new(),
            advice: AdviceClassifier::new(),
        }
    }

    /// State with a scorer using the configured risk tiers.
    pub fn from_config(config: &HealthAiConfig) -> Self {
        Self::new(Arc::new(RiskScorer::from_config(&config.risk)))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(RiskScorer::default()))
    }
}
