//! Host configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use tracing_subscriber::EnvFilter;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: default 3000
    ///
    /// # Errors
    ///
    /// Returns an error if `HOST` or `PORT` is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = parse_var("HOST", std::env::var("HOST").ok(), DEFAULT_HOST)?;
        let port = parse_var("PORT", std::env::var("PORT").ok(), DEFAULT_PORT)?;
        Ok(Self { host, port })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Log filter from a `RUST_LOG`-style directive string.
///
/// Unset, blank or unparseable input falls back to [`DEFAULT_LOG_FILTER`].
pub fn log_filter(raw: Option<&str>) -> EnvFilter {
    match raw.map(str::trim).filter(|r| !r.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives).unwrap_or_else(|e| {
            eprintln!("ignoring invalid RUST_LOG {directives:?}: {e}");
            EnvFilter::new(DEFAULT_LOG_FILTER)
        }),
        None => EnvFilter::new(DEFAULT_LOG_FILTER),
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) if value.trim().is_empty() => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
