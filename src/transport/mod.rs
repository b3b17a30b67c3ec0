//! HTTP transport layer.

pub mod http;

pub use http::{HttpTransport, TransportError};
