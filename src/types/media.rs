use serde::Deserialize;

/// Backend record for one uploaded media file, attached to a session
/// before the query that should see it.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaFile {
    pub id: String,
}

/// Envelope the media-upload endpoint wraps its payload in.
#[derive(Debug, Deserialize)]
pub(crate) struct MediaEnvelope {
    pub data: MediaFile,
}
