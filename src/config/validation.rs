//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, body limit > 0)
//! - Check that addresses parse and header values are legal
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use axum::http::HeaderValue;

use crate::config::schema::AppConfig;

/// A single semantic validation failure.
#[derive(Debug)]
pub enum ValidationError {
    /// Bind address does not parse as a socket address.
    InvalidBindAddress(String),
    /// Metrics address does not parse as a socket address.
    InvalidMetricsAddress(String),
    /// Request timeout must be nonzero.
    ZeroRequestTimeout,
    /// Body limit must be nonzero.
    ZeroBodyLimit,
    /// Greeting message must be nonempty.
    EmptyMessage,
    /// Server header token is empty or not a legal header value.
    InvalidServerHeader(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "invalid server.bind_address: {}", addr)
            }
            ValidationError::InvalidMetricsAddress(addr) => {
                write!(f, "invalid observability.metrics_address: {}", addr)
            }
            ValidationError::ZeroRequestTimeout => {
                write!(f, "limits.request_timeout_secs must be greater than 0")
            }
            ValidationError::ZeroBodyLimit => {
                write!(f, "limits.max_body_bytes must be greater than 0")
            }
            ValidationError::EmptyMessage => write!(f, "response.message must not be empty"),
            ValidationError::InvalidServerHeader(value) => {
                write!(f, "invalid response.server_header: {}", value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a configuration, collecting every failure.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.server.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if config.limits.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if config.response.message.is_empty() {
        errors.push(ValidationError::EmptyMessage);
    }

    if config.response.server_header.is_empty()
        || HeaderValue::from_str(&config.response.server_header).is_err()
    {
        errors.push(ValidationError::InvalidServerHeader(
            config.response.server_header.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
