//! Core type definitions for the chat API.
//!
//! ## Key types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Session`] | Backend-assigned conversation context |
//! | [`ContextField`] | One key/value pair of caller context |
//! | [`QueryRequest`] | One query submission with generation parameters |
//! | [`MediaFile`] | Backend record for one uploaded media file |
//! | [`ResponseMode`] | Delivery strategy (`sync` or `stream`) |
//! | [`StreamEvent`] | One decoded frame of the event feed |
//! | [`AggregateResult`] | The consolidated result both protocols converge to |

pub mod events;
pub mod media;
pub mod request;
pub mod result;
pub mod session;

pub use events::StreamEvent;
pub use media::MediaFile;
pub use request::{ModelConfig, QueryRequest, ResponseMode};
pub use result::{AggregateResult, CompletionStatus};
pub use session::{ContextField, Session};
