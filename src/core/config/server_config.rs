// Runtime configuration for the relay, read from environment variables.
//
// **Environment Variables:**
// - `DOCS_RELAY_BIND` - Address to listen on (default `0.0.0.0:3000`)
// - `GOOGLE_DOCS_API_BASE_URL` - Docs API root (default `https://docs.googleapis.com`)
// - `GOOGLE_DOCS_TIMEOUT_SECS` - Outbound request timeout (default 30)

use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BIND: &str = "0.0.0.0:3000";
pub const DEFAULT_API_BASE_URL: &str = "https://docs.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid DOCS_RELAY_BIND '{0}': expected host:port")]
    InvalidBind(String),

    #[error("Invalid GOOGLE_DOCS_TIMEOUT_SECS '{0}': expected a positive number of seconds")]
    InvalidTimeout(String),

    #[error("GOOGLE_DOCS_API_BASE_URL must not be empty")]
    EmptyBaseUrl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// Without a trailing slash.
    pub api_base_url: String,
    pub timeout: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_raw = lookup("DOCS_RELAY_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBind(bind_raw.clone()))?;

        let api_base_url = lookup("GOOGLE_DOCS_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();
        if api_base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }

        let timeout = match lookup("GOOGLE_DOCS_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            bind,
            api_base_url,
            timeout,
        })
    }
}
