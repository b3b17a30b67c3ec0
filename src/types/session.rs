use serde::{Deserialize, Serialize};

/// One key/value pair of caller-supplied context, echoed back by the
/// backend in arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextField {
    pub key: String,
    pub value: String,
}

impl ContextField {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A backend-assigned conversation context that query submissions are
/// scoped to. Immutable once created; owned by the caller for the lifetime
/// of one query submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    #[serde(default)]
    pub context_metadata: Vec<ContextField>,
}

/// Envelope the session-creation endpoint wraps its payload in.
#[derive(Debug, Deserialize)]
pub(crate) struct SessionEnvelope {
    pub data: Session,
}
