//! Top-level HealthAI configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ObservabilityConfig, RiskConfig, ServerConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Name of the project-level config file looked up by [`HealthAiConfig::load`].
pub const PROJECT_CONFIG_FILE: &str = "healthai.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`HEALTHAI_*`)
/// 3. Config file (`healthai.toml` in the project root, or an explicit path)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HealthAiConfig {
    pub server: ServerConfig,
    pub risk: RiskConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
    pub json_logs: Option<bool>,
}

impl HealthAiConfig {
    /// Load configuration, reading `healthai.toml` from `root` when present.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        let file = project_config_path
            .exists()
            .then_some(project_config_path.as_path());
        Self::resolve(file, cli_overrides)
    }

    /// Load configuration from an explicit file, which must exist.
    pub fn load_file(
        path: &Path,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        Self::resolve(Some(path), cli_overrides)
    }

    fn resolve(
        file: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = file {
            Self::merge_toml_file(&mut config, path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &HealthAiConfig) -> Result<(), ConfigError> {
        if config.server.port == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "server.port".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        let medium = config.risk.effective_medium_threshold();
        let high = config.risk.effective_high_threshold();
        for (field, value) in [
            ("risk.medium_threshold", medium),
            ("risk.high_threshold", high),
        ] {
            if !value.is_finite() || value <= 0.0 || value > 1.0 {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be in (0.0, 1.0]".to_string(),
                });
            }
        }
        if medium >= high {
            return Err(ConfigError::ValidationFailed {
                field: "risk.high_threshold".to_string(),
                message: "must be greater than risk.medium_threshold".to_string(),
            });
        }

        let level = config.observability.effective_log_level();
        if !constants::LOG_LEVELS.contains(&level) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!("must be one of {}", constants::LOG_LEVELS.join(", ")),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut HealthAiConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: HealthAiConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a `Some` value.
    fn merge(base: &mut HealthAiConfig, other: &HealthAiConfig) {
        // Server
        if other.server.host.is_some() {
            base.server.host = other.server.host.clone();
        }
        if other.server.port.is_some() {
            base.server.port = other.server.port;
        }

        // Risk
        if other.risk.medium_threshold.is_some() {
            base.risk.medium_threshold = other.risk.medium_threshold;
        }
        if other.risk.high_threshold.is_some() {
            base.risk.high_threshold = other.risk.high_threshold;
        }

        // Observability
        if other.observability.log_level.is_some() {
            base.observability.log_level = other.observability.log_level.clone();
        }
        if other.observability.json_logs.is_some() {
            base.observability.json_logs = other.observability.json_logs;
        }
    }

    /// Apply environment variable overrides.
    /// Unparseable values are ignored and the lower layer stays in effect.
    fn apply_env_overrides(config: &mut HealthAiConfig) {
        if let Ok(val) = std::env::var("HEALTHAI_HOST") {
            config.server.host = Some(val);
        }
        if let Ok(val) = std::env::var("HEALTHAI_PORT") {
            if let Ok(v) = val.parse::<u16>() {
                config.server.port = Some(v);
            }
        }
        if let Ok(val) = std::env::var("HEALTHAI_LOG_LEVEL") {
            config.observability.log_level = Some(val.to_lowercase());
        }
        if let Ok(val) = std::env::var("HEALTHAI_LOG_JSON") {
            if let Ok(v) = val.parse::<bool>() {
                config.observability.json_logs = Some(v);
            }
        }
        if let Ok(val) = std::env::var("HEALTHAI_RISK_MEDIUM_THRESHOLD") {
            if let Ok(v) = val.parse::<f64>() {
                config.risk.medium_threshold = Some(v);
            }
        }
        if let Ok(val) = std::env::var("HEALTHAI_RISK_HIGH_THRESHOLD") {
            if let Ok(v) = val.parse::<f64>() {
                config.risk.high_threshold = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut HealthAiConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.host {
            config.server.host = Some(v.clone());
        }
        if let Some(v) = cli.port {
            config.server.port = Some(v);
        }
        if let Some(ref v) = cli.log_level {
            config.observability.log_level = Some(v.to_lowercase());
        }
        if let Some(v) = cli.json_logs {
            config.observability.json_logs = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
