//! # healthai-server
//!
//! axum HTTP surface over the risk scorer and the two symptom classifiers.
//!
//! | method | path                   | handler                          |
//! |--------|------------------------|----------------------------------|
//! | GET    | `/`                    | service metadata                 |
//! | GET    | `/health`              | liveness                         |
//! | POST   | `/predict-health-risk` | `RiskScorer` via `IRiskPredictor` |
//! | POST   | `/analyze-health`      | `UrgencyAnalyzer`                |
//! | POST   | `/health-advice`       | `AdviceClassifier`               |

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::{router, run, serve};
pub use state::AppState;
