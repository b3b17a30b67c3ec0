//! Basic usage example: open a session, submit one query, print the
//! consolidated document.
//!
//! Configuration via environment variables:
//! - ONDEMAND_API_KEY (required)
//! - ONDEMAND_EXTERNAL_USER_ID (optional; generated when absent)
//! - ONDEMAND_RESPONSE_MODE (optional; "sync" or "stream", default "stream")
//!
//! Usage:
//!   ONDEMAND_API_KEY="your_key" cargo run --example basic_usage

use ondemand_chat::{ChatClient, ContextField, QueryRequest};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let client = ChatClient::builder().build()?;

    let context = vec![
        ContextField::new("userId", "1"),
        ContextField::new("name", "John"),
    ];
    let session = client.create_session(&[], &context).await?;
    println!("Session created: {}", session.id);

    let mode = std::env::var("ONDEMAND_RESPONSE_MODE").unwrap_or_else(|_| "stream".to_string());
    let request = QueryRequest::new("Explain what this API does, briefly.").response_mode_raw(mode);

    let document = client.submit_query(&session, &request).await?;
    println!("{}", serde_json::to_string_pretty(&document)?);

    Ok(())
}
