//! HTTP bind configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind host. Default: "0.0.0.0".
    pub host: Option<String>,
    /// Bind port. Default: 8000.
    pub port: Option<u16>,
}

impl ServerConfig {
    pub fn effective_host(&self) -> &str {
        self.host.as_deref().unwrap_or(constants::DEFAULT_HOST)
    }

    pub fn effective_port(&self) -> u16 {
        self.port.unwrap_or(constants::DEFAULT_PORT)
    }

    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.effective_host(), self.effective_port())
    }
}
