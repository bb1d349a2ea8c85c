//! Runtime configuration
//!
//! Everything the bridge needs from its environment is collected once at
//! startup into a [`BridgeConfig`] and handed to the components that need it.

mod error;

pub use error::{ConfigError, ConfigResult};

use std::net::SocketAddr;
use std::time::Duration;

/// Human-readable service name reported by `GET /`
pub const SERVICE_NAME: &str = "Ilex Techne Bridge";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Configuration for the bridge process
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Base URL of the Base44 app, without a trailing slash
    pub base_url: String,

    /// Bearer key sent with every Base44 request
    pub api_key: String,

    /// Host to bind the HTTP listener on
    pub host: String,

    /// Port to bind the HTTP listener on
    pub port: u16,

    /// Optional timeout applied to each outbound request
    pub request_timeout: Option<Duration>,
}

impl BridgeConfig {
    /// Build a config pointing at `base_url` with defaults for everything else
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            api_key: api_key.into(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            request_timeout: None,
        }
    }

    /// Load from process environment variables
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup.
    ///
    /// Values are trimmed; blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let base_url = read("BASE44_APP_URL").ok_or(ConfigError::Missing("BASE44_APP_URL"))?;
        let api_key = read("BASE44_API_KEY").ok_or(ConfigError::Missing("BASE44_API_KEY"))?;

        let mut config = Self::new(base_url, api_key);

        if let Some(host) = read("HOST") {
            config.host = host;
        }

        if let Some(port) = read("PORT") {
            config.port = port.parse().map_err(|e| ConfigError::Invalid {
                key: "PORT",
                reason: format!("{e}"),
            })?;
        }

        if let Some(secs) = read("BASE44_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|e| ConfigError::Invalid {
                key: "BASE44_TIMEOUT_SECS",
                reason: format!("{e}"),
            })?;
            config.request_timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Address the HTTP listener binds to
    pub fn listen_addr(&self) -> ConfigResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::Invalid {
                key: "HOST",
                reason: format!("{e}"),
            })
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
