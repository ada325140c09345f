use std::net::{IpAddr, SocketAddr};
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_ENVIRONMENT: &str = "development";

/// Errors raised while reading the server configuration
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),

    #[error("HOST must be an IP address, got {0:?}")]
    InvalidHost(String),
}

/// Server configuration, resolved once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Address to bind
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Deployment environment name reported by the health endpoint
    pub environment: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            environment: DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}

impl AppConfig {
    /// Read PORT, HOST and APP_ENV from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let raw_host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = raw_host
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost(raw_host.clone()))?;

        let environment = lookup("APP_ENV")
            .filter(|env| !env.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        Ok(Self {
            host,
            port,
            environment,
        })
    }

    /// Socket address the server binds to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
