//! Client configuration.
//!
//! All request parameters that were global constants in earlier clients live
//! in an explicit immutable [`ClientConfig`] passed into the client; no
//! process-wide state is involved.

use std::env;
use std::time::Duration;

/// Production endpoint for the chat API.
pub const DEFAULT_BASE_URL: &str = "https://api.on-demand.io/chat/v1";

/// Immutable configuration for one [`ChatClient`](crate::ChatClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL without a trailing slash, e.g. `https://api.on-demand.io/chat/v1`.
    pub base_url: String,
    /// Value sent in the `apikey` header on every call.
    pub api_key: String,
    /// Caller identity echoed into the session; generated as a v4 UUID when
    /// the caller does not supply one.
    pub external_user_id: String,
    /// Per-request timeout for the underlying HTTP client.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            external_user_id: uuid::Uuid::new_v4().to_string(),
            timeout: default_timeout(),
        }
    }

    /// Build a config from the environment.
    ///
    /// - `ONDEMAND_API_KEY` (required)
    /// - `ONDEMAND_BASE_URL` (optional)
    /// - `ONDEMAND_EXTERNAL_USER_ID` (optional; a v4 UUID is generated when absent)
    /// - `ONDEMAND_HTTP_TIMEOUT_SECS` (optional, default 30)
    pub fn from_env() -> crate::Result<Self> {
        let api_key = env::var("ONDEMAND_API_KEY").map_err(|_| {
            crate::Error::Configuration("ONDEMAND_API_KEY is not set".to_string())
        })?;

        let mut config = Self::new(api_key);
        if let Ok(base_url) = env::var("ONDEMAND_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(id) = env::var("ONDEMAND_EXTERNAL_USER_ID") {
            if !id.is_empty() {
                config.external_user_id = id;
            }
        }
        Ok(config)
    }
}

fn default_timeout() -> Duration {
    let secs = env::var("ONDEMAND_HTTP_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(30);
    Duration::from_secs(secs)
}
