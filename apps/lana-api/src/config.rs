//! API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use serde::{Deserialize, Serialize};
use std::env;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8080;

/// Lana API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Interface to bind
    pub bind_addr: String,

    /// HTTP port
    pub port: u16,

    /// `tracing` filter directive, used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            bind_addr: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            log_filter: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = ApiConfig::default();

        let config = ApiConfig {
            bind_addr: lookup("LANA_BIND_ADDR").unwrap_or(defaults.bind_addr),

            port: lookup("LANA_PORT")
                .unwrap_or_else(|| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("LANA_PORT".to_string()))?,

            log_filter: lookup("LANA_LOG").unwrap_or(defaults.log_filter),
        };

        if config.bind_addr.trim().is_empty() {
            return Err(ConfigError::InvalidValue("LANA_BIND_ADDR".to_string()));
        }

        Ok(config)
    }

    /// Address string handed to the TCP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_overrides() {
        let config = ApiConfig::from_lookup(lookup(&[
            ("LANA_BIND_ADDR", "127.0.0.1"),
            ("LANA_PORT", "9090"),
            ("LANA_LOG", "lana_store=debug"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:9090");
        assert_eq!(config.log_filter, "lana_store=debug");
    }

    #[test]
    fn test_invalid_port() {
        let err = ApiConfig::from_lookup(lookup(&[("LANA_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(var) if var == "LANA_PORT"));

        assert!(ApiConfig::from_lookup(lookup(&[("LANA_PORT", "70000")])).is_err());
    }

    #[test]
    fn test_blank_bind_addr() {
        assert!(ApiConfig::from_lookup(lookup(&[("LANA_BIND_ADDR", "  ")])).is_err());
    }
}
