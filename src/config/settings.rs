//! Server settings loaded from the environment.
//!
//! This module provides the [`ServerConfig`] type. Each setting is read from
//! an environment variable and falls back to a default when the variable is
//! unset.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use crate::error::{EngineError, EngineResult};

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 5005;

/// Address used when `HOST` is unset.
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Listening settings for the HTTP server.
///
/// # Example
///
/// ```
/// use income_tax_calculator::config::ServerConfig;
///
/// let config = ServerConfig::from_lookup(|key| match key {
///     "PORT" => Some("8080".to_string()),
///     _ => None,
/// })
/// .unwrap();
/// assert_eq!(config.port, 8080);
/// assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// The interface to listen on (`HOST`).
    pub host: IpAddr,
    /// The TCP port to listen on (`PORT`).
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Returns
    ///
    /// Returns an `InvalidConfigValue` error if a variable is set but cannot
    /// be parsed.
    pub fn from_env() -> EngineResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = parse_var(&lookup, "HOST")?.unwrap_or(DEFAULT_HOST);
        let port = parse_var(&lookup, "PORT")?.unwrap_or(DEFAULT_PORT);

        Ok(Self { host, port })
    }

    /// Returns the socket address the server should bind.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> EngineResult<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| EngineError::InvalidConfigValue {
                key: key.to_string(),
                value,
            }),
    }
}
