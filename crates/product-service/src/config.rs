//! # Service Configuration
//!
//! Transport addresses come from the environment, with defaults matching
//! the service's conventional ports:
//!
//! | Variable | Default | Purpose |
//! |---|---|---|
//! | `PRODUCT_TCP_ADDR` | `127.0.0.1:3002` | Command-message channel |
//! | `PRODUCT_HTTP_ADDR` | `127.0.0.1:3000` | HTTP routes |
//!
//! An unparseable address is a startup error; nothing is served with a
//! half-valid configuration.

use std::env;
use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_TCP_ADDR: &str = "127.0.0.1:3002";
pub const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:3000";

/// Errors raised while reading the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid socket address in {var}: {value}")]
    InvalidAddr { var: &'static str, value: String },
}

/// Resolved transport configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub tcp_addr: SocketAddr,
    pub http_addr: SocketAddr,
}

impl ServiceConfig {
    /// Reads the configuration from the environment, falling back to the
    /// defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            tcp_addr: addr_from_env("PRODUCT_TCP_ADDR", DEFAULT_TCP_ADDR)?,
            http_addr: addr_from_env("PRODUCT_HTTP_ADDR", DEFAULT_HTTP_ADDR)?,
        })
    }
}

fn addr_from_env(var: &'static str, default: &str) -> Result<SocketAddr, ConfigError> {
    let value = env::var(var).unwrap_or_else(|_| default.to_string());
    value
        .parse()
        .map_err(|_| ConfigError::InvalidAddr { var, value })
}
