use crate::client::core::ChatClient;
use crate::config::ClientConfig;
use crate::Result;
use std::time::Duration;

/// Builder for creating a [`ChatClient`] with custom configuration.
pub struct ChatClientBuilder {
    api_key: Option<String>,
    external_user_id: Option<String>,
    base_url_override: Option<String>,
    timeout: Option<Duration>,
}

impl ChatClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            external_user_id: None,
            base_url_override: None,
            timeout: None,
        }
    }

    /// Set the API key. When absent, the key is read from `ONDEMAND_API_KEY`.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the external user identifier echoed into the session. A v4 UUID
    /// is generated when the caller does not supply one.
    pub fn external_user_id(mut self, id: impl Into<String>) -> Self {
        self.external_user_id = Some(id.into());
        self
    }

    /// Override the base URL. Primarily for testing against mock servers.
    pub fn base_url_override(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    /// Override the connect timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<ChatClient> {
        let mut config = match self.api_key {
            Some(key) => ClientConfig::new(key),
            None => ClientConfig::from_env()?,
        };
        if let Some(id) = self.external_user_id {
            config.external_user_id = id;
        }
        if let Some(base_url) = self.base_url_override {
            config.base_url = base_url;
        }
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }
        ChatClient::with_config(config)
    }
}

impl Default for ChatClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
