//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the server.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the hello server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Server configuration (bind address).
    pub server: ServerConfig,

    /// Response payload settings.
    pub response: ResponseConfig,

    /// Request limits (timeout, body size).
    pub limits: LimitsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Response payload configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ResponseConfig {
    /// Greeting body served by the plaintext and JSON endpoints.
    pub message: String,

    /// Token sent in the `Server` response header.
    pub server_header: String,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            message: "Hello, World!".to_string(),
            server_header: "hello-server".to_string(),
        }
    }
}

/// Request limit configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_timeout_secs: u64,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
            max_body_bytes: 64 * 1024,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind_address, "0.0.0.0:8080");
        assert_eq!(config.response.message, "Hello, World!");
        assert_eq!(config.limits.request_timeout_secs, 30);
        assert!(config.observability.metrics_enabled);
    }

    #[test]
    fn test_minimal_toml() {
        // Every section is optional; a sparse file fills in defaults.
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            bind_address = "127.0.0.1:9000"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.bind_address, "127.0.0.1:9000");
        assert_eq!(config.response.message, "Hello, World!");
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_full_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            bind_address = "0.0.0.0:8081"

            [response]
            message = "Hello, Benchmark!"
            server_header = "h"

            [limits]
            request_timeout_secs = 5
            max_body_bytes = 1024

            [observability]
            log_level = "debug"
            metrics_enabled = false
            metrics_address = "127.0.0.1:9100"
            "#,
        )
        .unwrap();

        assert_eq!(config.response.message, "Hello, Benchmark!");
        assert_eq!(config.response.server_header, "h");
        assert_eq!(config.limits.max_body_bytes, 1024);
        assert!(!config.observability.metrics_enabled);
    }
}
