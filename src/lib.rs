//! # ondemand-chat
//!
//! Rust client for the OnDemand conversational-AI chat API (`/chat/v1`).
//!
//! ## Overview
//!
//! The client opens a session, submits a query against that session, and
//! produces a single consolidated JSON document regardless of whether the
//! backend replies in one shot (`sync` mode) or as a line-oriented event
//! stream (`stream` mode). The two response protocols converge at the
//! submitter boundary: each branch is a pure function from raw transport
//! data to the same result shape.
//!
//! ## Key pieces
//!
//! - **Session opener**: [`ChatClient::create_session`] issues one
//!   session-creation call and decodes the backend envelope into a
//!   [`Session`]. A single attempt is the full contract.
//! - **Query submitter**: [`ChatClient::submit_query`] serializes a
//!   [`QueryRequest`], forks on the response mode, and returns the
//!   consolidated document.
//! - **Stream aggregator**: the [`aggregate`] module folds the event feed
//!   into one [`AggregateResult`], buffering partial lines and dropping
//!   undecodable frames instead of failing the stream.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use ondemand_chat::{ChatClient, ContextField, QueryRequest, ResponseMode};
//!
//! #[tokio::main]
//! async fn main() -> ondemand_chat::Result<()> {
//!     let client = ChatClient::builder()
//!         .api_key("your-api-key")
//!         .build()?;
//!
//!     let context = vec![ContextField::new("userId", "1")];
//!     let session = client.create_session(&[], &context).await?;
//!
//!     let request = QueryRequest::new("Hello, how are you?")
//!         .response_mode(ResponseMode::Stream);
//!     let document = client.submit_query(&session, &request).await?;
//!     println!("{document}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client surface: session opening and query submission |
//! | [`aggregate`] | Stream aggregation state machine |
//! | [`types`] | Core type definitions (session, request, events, result) |
//! | [`transport`] | HTTP transport over `reqwest` |
//! | [`config`] | Client configuration with environment defaults |

pub mod aggregate;
pub mod client;
pub mod config;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{ChatClient, ChatClientBuilder};
pub use config::ClientConfig;
pub use types::{
    events::StreamEvent,
    media::MediaFile,
    request::{ModelConfig, QueryRequest, ResponseMode},
    result::{AggregateResult, CompletionStatus},
    session::{ContextField, Session},
};

use futures::Stream;
use std::pin::Pin;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// A unified pinned, boxed stream that emits `Result<T>`
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = Result<T>> + Send + 'a>>;

/// Error type for the library
pub mod error;
pub use error::Error;
