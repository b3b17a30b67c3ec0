//! Stream event frames, tagged on `eventType`.

use serde::Deserialize;
use serde_json::{Map, Value};

/// One decoded frame of the line-oriented event feed.
///
/// Unknown `eventType` tags land on [`StreamEvent::Other`] and are ignored
/// by the aggregator; frames that fail to decode at all are dropped before
/// they reach this type.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "eventType")]
pub enum StreamEvent {
    /// An incremental fragment of the generated answer.
    #[serde(rename = "fulfillment")]
    Fulfillment {
        answer: Option<String>,
        #[serde(rename = "sessionId")]
        session_id: Option<String>,
        #[serde(rename = "messageId")]
        message_id: Option<String>,
    },

    /// Usage/performance metrics; a later event supersedes an earlier one.
    #[serde(rename = "metricsLog")]
    MetricsLog {
        #[serde(rename = "publicMetrics")]
        public_metrics: Option<Map<String, Value>>,
    },

    #[serde(other)]
    Other,
}
