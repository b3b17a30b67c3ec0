use thiserror::Error;

/// Unified error type for the OnDemand chat client.
///
/// Session creation and query submission each carry the raw status and body
/// the backend returned, so callers can log exactly what went wrong. None of
/// these are retried by the client; a failed call is fatal for that
/// submission.
#[derive(Debug, Error)]
pub enum Error {
    /// Session creation returned a non-201 status, or a body that does not
    /// decode into the expected envelope. Fatal for the run: no query is
    /// attempted against a session that failed to open.
    #[error("session creation failed: HTTP {status}: {body}")]
    SessionCreation { status: u16, body: String },

    /// Query submission returned a non-success status. In stream mode this
    /// is raised before any stream content is read.
    #[error("query submission failed: HTTP {status}: {body}")]
    QuerySubmission { status: u16, body: String },

    /// Media upload returned a non-success status, or a body without the
    /// expected media envelope.
    #[error("media upload failed: HTTP {status}: {body}")]
    MediaUpload { status: u16, body: String },

    /// `responseMode` was neither `sync` nor `stream`. Raised before any
    /// network call for the query step.
    #[error("unsupported response mode {0:?} (expected \"sync\" or \"stream\")")]
    UnsupportedResponseMode(String),

    /// Missing or invalid client configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("network transport error: {0}")]
    Transport(#[from] crate::transport::TransportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
