use crate::types::session::ContextField;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Terminal status of an aggregated stream.
///
/// The aggregator never reports a failed terminal state; a stream that
/// produced no fulfillment events simply yields an empty answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionStatus {
    Completed,
}

/// The single consolidated result both response protocols converge to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    pub session_id: String,
    pub message_id: String,
    pub answer: String,
    pub metrics: Map<String, Value>,
    pub status: CompletionStatus,
    pub context_metadata: Vec<ContextField>,
}
