//! Logging configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level: "trace", "debug", "info", "warn", "error". Default: "info".
    pub log_level: Option<String>,
    /// Emit structured JSON log lines instead of the human format.
    pub json_logs: Option<bool>,
}

impl ObservabilityConfig {
    pub fn effective_log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .unwrap_or(constants::DEFAULT_LOG_LEVEL)
    }

    pub fn effective_json_logs(&self) -> bool {
        self.json_logs.unwrap_or(false)
    }
}
