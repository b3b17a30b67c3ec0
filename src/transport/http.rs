use crate::config::ClientConfig;
use crate::{BoxStream, Result};
use bytes::Bytes;
use futures::TryStreamExt;
use std::env;
use std::time::Duration;

/// Thin wrapper over `reqwest` carrying the base URL and `apikey` header.
///
/// Status handling stays with the caller: the transport reports only what
/// the network naturally reports, it does not interpret response codes.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let builder = reqwest::Client::builder()
            // No overall request timeout: stream-mode responses stay open
            // until the done sentinel or the server closes the connection.
            .connect_timeout(config.timeout)
            .pool_max_idle_per_host(
                env::var("ONDEMAND_HTTP_POOL_MAX_IDLE_PER_HOST")
                    .ok()
                    .and_then(|s| s.parse::<usize>().ok())
                    .unwrap_or(32),
            )
            .pool_idle_timeout(Some(Duration::from_secs(
                env::var("ONDEMAND_HTTP_POOL_IDLE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse::<u64>().ok())
                    .unwrap_or(90),
            )));

        let client = builder
            .build()
            .map_err(|e| crate::Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// POST a JSON body and return the raw response.
    pub async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .post(&url)
            .header("apikey", &self.api_key)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| crate::Error::Transport(TransportError::Http(e)))
    }

    /// POST a multipart form to an absolute URL. The media endpoint lives
    /// outside the chat base path, so the caller passes the full URL.
    /// `reqwest` supplies the multipart content type and boundary.
    pub async fn post_multipart(
        &self,
        url: &str,
        form: reqwest::multipart::Form,
    ) -> Result<reqwest::Response> {
        self.client
            .post(url)
            .header("apikey", &self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| crate::Error::Transport(TransportError::Http(e)))
    }

    /// Convert a response body into the crate's unified byte stream.
    pub fn byte_stream(response: reqwest::Response) -> BoxStream<'static, Bytes> {
        let stream = response
            .bytes_stream()
            .map_err(|e| crate::Error::Transport(TransportError::Http(e)));
        Box::pin(stream)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
