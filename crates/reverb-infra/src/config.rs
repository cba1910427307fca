//! Server configuration loader for Reverb.
//!
//! Reads `reverb.toml` from the given path and deserializes it into
//! [`ServerConfig`]. Falls back to the defaults (`127.0.0.1:8000`) when the
//! file is missing or malformed.

use std::path::Path;

use reverb_types::config::ServerConfig;

/// Load server configuration from a TOML file.
///
/// - If the file does not exist, returns [`ServerConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and
///   returns the default.
/// - Otherwise returns the parsed config.
pub async fn load_server_config(config_path: &Path) -> ServerConfig {
    let content = match tokio::fs::read_to_string(config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return ServerConfig::default();
        }
        Err(err) => {
            tracing::warn!(
                "Failed to read {}: {err}, using defaults",
                config_path.display()
            );
            return ServerConfig::default();
        }
    };

    match toml::from_str::<ServerConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            ServerConfig::default()
        }
    }
}
