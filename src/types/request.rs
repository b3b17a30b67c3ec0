use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// How the backend delivers the query result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    /// One JSON document in a single response.
    Sync,
    /// A line-oriented event stream terminated by a done sentinel.
    Stream,
}

impl FromStr for ResponseMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sync" => Ok(ResponseMode::Sync),
            "stream" => Ok(ResponseMode::Stream),
            other => Err(crate::Error::UnsupportedResponseMode(other.to_string())),
        }
    }
}

impl fmt::Display for ResponseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseMode::Sync => f.write_str("sync"),
            ResponseMode::Stream => f.write_str("stream"),
        }
    }
}

/// Generation parameters, nested under `modelConfigs` on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelConfig {
    pub fulfillment_prompt: String,
    pub stop_sequences: Vec<String>,
    pub temperature: f64,
    pub top_p: f64,
    pub max_tokens: u32,
    pub presence_penalty: f64,
    pub frequency_penalty: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            fulfillment_prompt: String::new(),
            stop_sequences: Vec::new(),
            temperature: 0.7,
            top_p: 1.0,
            max_tokens: 0,
            presence_penalty: 0.0,
            frequency_penalty: 0.0,
        }
    }
}

/// One query submission. Immutable once built; construct with
/// [`QueryRequest::new`] and the chained setters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    pub endpoint_id: String,
    pub query: String,
    pub agent_ids: Vec<String>,
    /// Carried as the raw string the backend takes; resolved to a
    /// [`ResponseMode`] by the submitter before any network call.
    pub response_mode: String,
    pub reasoning_mode: String,
    #[serde(rename = "modelConfigs")]
    pub model_config: ModelConfig,
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            endpoint_id: "predefined-openai-gpt4.1".to_string(),
            query: query.into(),
            agent_ids: Vec::new(),
            response_mode: ResponseMode::Sync.to_string(),
            reasoning_mode: "grok-4-fast".to_string(),
            model_config: ModelConfig::default(),
        }
    }

    pub fn endpoint_id(mut self, endpoint_id: impl Into<String>) -> Self {
        self.endpoint_id = endpoint_id.into();
        self
    }

    pub fn agent_ids(mut self, agent_ids: Vec<String>) -> Self {
        self.agent_ids = agent_ids;
        self
    }

    pub fn response_mode(mut self, mode: ResponseMode) -> Self {
        self.response_mode = mode.to_string();
        self
    }

    /// Set the response mode from a raw string. Unknown values are rejected
    /// at submission time, not here.
    pub fn response_mode_raw(mut self, mode: impl Into<String>) -> Self {
        self.response_mode = mode.into();
        self
    }

    pub fn reasoning_mode(mut self, mode: impl Into<String>) -> Self {
        self.reasoning_mode = mode.into();
        self
    }

    pub fn model_config(mut self, model_config: ModelConfig) -> Self {
        self.model_config = model_config;
        self
    }
}
