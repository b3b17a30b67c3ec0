use crate::aggregate;
use crate::config::ClientConfig;
use crate::transport::{HttpTransport, TransportError};
use crate::types::media::{MediaEnvelope, MediaFile};
use crate::types::request::{QueryRequest, ResponseMode};
use crate::types::session::{ContextField, Session, SessionEnvelope};
use crate::{Error, Result};
use serde_json::{json, Map, Value};
use std::path::Path;

/// Envelope message wrapped around a streamed aggregate.
pub(crate) const QUERY_SUBMITTED_MESSAGE: &str = "Chat query submitted successfully";

/// Client for the OnDemand chat API.
///
/// One logical task per submission: session opening, query submission and
/// stream aggregation run strictly sequentially, and no state is shared
/// across submissions. Multiple submissions may run concurrently against
/// the same backend without interference.
pub struct ChatClient {
    config: ClientConfig,
    transport: HttpTransport,
}

impl ChatClient {
    pub fn builder() -> crate::client::ChatClientBuilder {
        crate::client::ChatClientBuilder::new()
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self { config, transport })
    }

    /// Open a conversational session. A single attempt is the full
    /// contract: success is exactly 201, and anything else, or a body that
    /// does not decode into the session envelope, is fatal for the run.
    pub async fn create_session(
        &self,
        agent_ids: &[String],
        context_metadata: &[ContextField],
    ) -> Result<Session> {
        let body = json!({
            "agentIds": agent_ids,
            "externalUserId": self.config.external_user_id,
            "contextMetadata": context_metadata,
        });

        tracing::debug!(base_url = %self.config.base_url, "creating chat session");
        let response = self.transport.post_json("/sessions", &body).await?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(TransportError::Http)?;

        if status != 201 {
            return Err(Error::SessionCreation { status, body: text });
        }

        match serde_json::from_str::<SessionEnvelope>(&text) {
            Ok(envelope) => {
                tracing::debug!(session_id = %envelope.data.id, "chat session created");
                Ok(envelope.data)
            }
            Err(_) => Err(Error::SessionCreation { status, body: text }),
        }
    }

    /// Upload a media file into a session, between session creation and
    /// query submission, and return the backend's record for it.
    ///
    /// Success is 200 or 201 with a `{ "data": { "id" } }` envelope;
    /// anything else fails with [`Error::MediaUpload`]. `agent_ids` are the
    /// file agents that should index the upload.
    pub async fn upload_media(
        &self,
        session: &Session,
        file_path: impl AsRef<Path>,
        agent_ids: &[String],
    ) -> Result<MediaFile> {
        let path = file_path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("file")
            .to_string();
        let contents = tokio::fs::read(path).await?;

        let mut form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(contents).file_name(file_name.clone()),
            )
            .text("createdBy", session.id.clone())
            .text("updatedBy", "AIREV")
            .text("name", file_name)
            .text("responseMode", "sync");
        for agent in agent_ids {
            form = form.text("agents", agent.clone());
        }

        tracing::debug!(session_id = %session.id, "uploading media file");
        let response = self
            .transport
            .post_multipart(&self.media_upload_url(), form)
            .await?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(TransportError::Http)?;

        if status != 200 && status != 201 {
            return Err(Error::MediaUpload { status, body: text });
        }

        match serde_json::from_str::<MediaEnvelope>(&text) {
            Ok(envelope) => {
                tracing::debug!(media_id = %envelope.data.id, "media uploaded");
                Ok(envelope.data)
            }
            Err(_) => Err(Error::MediaUpload { status, body: text }),
        }
    }

    /// The media service hangs off the host root, not the chat base path.
    fn media_upload_url(&self) -> String {
        let host = self
            .config
            .base_url
            .trim_end_matches('/')
            .trim_end_matches("/chat/v1");
        format!("{host}/media/v1/public/file/raw")
    }

    /// Submit one query against a session and return the consolidated
    /// document, whichever way the backend delivered it.
    ///
    /// The response mode is resolved first: an unknown mode fails with
    /// [`Error::UnsupportedResponseMode`] before any network call, never a
    /// partial or undefined action.
    pub async fn submit_query(&self, session: &Session, request: &QueryRequest) -> Result<Value> {
        let mode: ResponseMode = request.response_mode.parse()?;

        let path = format!("/sessions/{}/query", session.id);
        let body = serde_json::to_value(request)?;
        tracing::debug!(session_id = %session.id, %mode, "submitting chat query");

        let response = self.transport.post_json(&path, &body).await?;
        let status = response.status().as_u16();
        if status != 200 {
            let text = response.text().await.map_err(TransportError::Http)?;
            return Err(Error::QuerySubmission { status, body: text });
        }

        match mode {
            ResponseMode::Sync => {
                let document: Value = response.json().await.map_err(TransportError::Http)?;
                Ok(merge_context_metadata(
                    document,
                    &session.context_metadata,
                ))
            }
            ResponseMode::Stream => {
                let stream = HttpTransport::byte_stream(response);
                let result =
                    aggregate::aggregate_stream(stream, session.context_metadata.clone()).await;
                Ok(json!({
                    "message": QUERY_SUBMITTED_MESSAGE,
                    "data": serde_json::to_value(&result)?,
                }))
            }
        }
    }
}

/// Structural merge for the sync path: inject `contextMetadata` into the
/// `data` sub-object, creating `data` when it is absent or not an object.
/// The rest of the document passes through unmodified.
fn merge_context_metadata(document: Value, context_metadata: &[ContextField]) -> Value {
    let context = serde_json::to_value(context_metadata).unwrap_or_else(|_| json!([]));

    let mut root = match document {
        Value::Object(map) => map,
        other => return other,
    };

    match root.get_mut("data") {
        Some(Value::Object(data)) => {
            data.insert("contextMetadata".to_string(), context);
        }
        _ => {
            let mut data = Map::new();
            data.insert("contextMetadata".to_string(), context);
            root.insert("data".to_string(), Value::Object(data));
        }
    }

    Value::Object(root)
}
