//! Configuration system for HealthAI.
//! TOML-based, layered resolution: CLI > env > project file > defaults.

pub mod healthai_config;
pub mod observability_config;
pub mod risk_config;
pub mod server_config;

pub use healthai_config::{CliOverrides, HealthAiConfig};
pub use observability_config::ObservabilityConfig;
pub use risk_config::RiskConfig;
pub use server_config::ServerConfig;
