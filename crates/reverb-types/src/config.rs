//! Server configuration for the Reverb API process.

use serde::{Deserialize, Serialize};

/// Host/port binding for the HTTP server.
///
/// Loaded from `reverb.toml` when present (see `reverb-infra`), overridable
/// by CLI flags. Defaults match the original deployment: `0.0.0.0:8000`,
/// reachable by the external chat frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_server_config_partial_toml_fills_defaults() {
        let config: ServerConfig = toml::from_str("port = 9001").unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9001);
    }
}
