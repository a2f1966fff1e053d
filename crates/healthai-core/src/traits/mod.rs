//! Seams between the HTTP surface and the assessment engines.

pub mod classifier;
pub mod predictor;

pub use classifier::ISymptomClassifier;
pub use predictor::IRiskPredictor;
