//! Client configuration.
//!
//! All connection settings live in an explicit [`ClientConfig`] that is
//! constructed once and handed to [`crate::ApiFootball::new`]. Nothing is
//! read from ambient globals after construction.

use std::time::Duration;

use crate::error::{FootballError, Result};

/// Environment variable consulted by [`ClientConfig::from_env`].
pub const API_KEY_ENV_VAR: &str = "API_KEY";

/// Default base URL for the api-football service.
pub const DEFAULT_BASE_URL: &str = "https://server1.api-football.com";

/// Default request timeout; the upstream API has no documented SLA so this
/// is deliberately generous.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for [`crate::ApiFootball`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// RapidAPI key sent as the `X-RapidAPI-Key` header.
    pub api_key: String,
    /// Base URL all endpoint paths are appended to.
    pub base_url: String,
    /// Verify TLS certificates. Off by default, matching the upstream
    /// provider's self-signed staging hosts.
    pub verify: bool,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Additional headers sent with every request. Must not include the
    /// API key; that is always taken from `api_key`.
    pub extra_headers: Vec<(String, String)>,
}

impl ClientConfig {
    /// Build a config with an explicit API key and default connection
    /// settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            verify: false,
            timeout: DEFAULT_TIMEOUT,
            extra_headers: Vec::new(),
        }
    }

    /// Build a config reading the API key from the `API_KEY` environment
    /// variable. Fails fast with [`FootballError::MissingApiKey`] so a
    /// misconfigured process never reaches the network.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV_VAR).map_err(|_| FootballError::MissingApiKey {
            env_var: API_KEY_ENV_VAR.to_string(),
        })?;
        Ok(Self::new(api_key))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.push((name.into(), value.into()));
        self
    }
}
