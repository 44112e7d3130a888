//! # Client Configuration
//!
//! Connection settings for the RPC client, supplied once at construction
//! and applied uniformly to every call. There is no per-call override and
//! no config file: the embedding application decides these values and
//! constructs the client with them.
//!
//! ```rust
//! use std::time::Duration;
//! use vesta_client::config::ClientConfig;
//!
//! let config = ClientConfig::default()
//!     .with_request_timeout(Duration::from_secs(10))
//!     .with_retries(2);
//! assert_eq!(config.retries, 2);
//! ```

use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Well-known API endpoints.
pub mod endpoints {
    /// The production RPC endpoint.
    pub const PRODUCTION: &str = "https://api.vestaorders.com/v2/";
}

/// Configuration for [`crate::client::VestaClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base RPC endpoint URL.
    pub api_url: String,

    /// TCP connect timeout.
    pub connect_timeout: Duration,

    /// Whole-exchange timeout (connect + send + read).
    pub request_timeout: Duration,

    /// How many times a transport-level failure is retried. Total attempts
    /// per call = `retries + 1`. Error envelopes are never retried.
    pub retries: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_url: endpoints::PRODUCTION.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            retries: 1,
        }
    }
}

impl ClientConfig {
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Parses and validates the endpoint URL.
    pub fn endpoint(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.api_url).map_err(|source| ConfigError::InvalidApiUrl {
            url: self.api_url.clone(),
            source,
        })
    }
}

/// Client construction failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configured API endpoint is not a valid URL.
    #[error("invalid API url {url:?}")]
    InvalidApiUrl {
        url: String,

        #[source]
        source: url::ParseError,
    },

    /// The HTTP stack could not be initialized.
    #[error("failed to initialize transport: {0}")]
    Transport(String),
}
