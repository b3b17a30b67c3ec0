//! Stream aggregation: folds the line-oriented event feed into one
//! [`AggregateResult`].
//!
//! Per-line processing, in order:
//!
//! 1. Lines not starting with `data:` are ignored (framing, comments,
//!    blank keep-alives).
//! 2. The marker and surrounding whitespace are stripped to obtain the
//!    payload.
//! 3. The literal `[DONE]` payload is the sole termination signal; reaching
//!    physical end-of-input without it finalizes identically.
//! 4. Payloads that fail to parse as JSON are dropped silently and the
//!    stream continues. This is a deliberate resilience policy: a torn or
//!    malformed frame must never abort the whole stream.
//! 5. `fulfillment` events append answer fragments in arrival order and
//!    overwrite the session/message ids last-write-wins; `metricsLog`
//!    events replace the metrics map wholesale; any other tag is ignored.

use crate::types::events::StreamEvent;
use crate::types::result::{AggregateResult, CompletionStatus};
use crate::types::session::ContextField;
use crate::BoxStream;
use bytes::Bytes;
use futures::StreamExt;
use serde_json::{Map, Value};

const DATA_PREFIX: &str = "data:";
const DONE_SIGNAL: &str = "[DONE]";

/// What the caller should do after feeding one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineDisposition {
    /// Keep feeding lines.
    Continue,
    /// The done sentinel arrived; stop consuming input.
    Done,
}

/// Single-pass accumulator state for one stream consumption.
///
/// Owned exclusively by one submission; never revisited once finished.
#[derive(Debug, Default)]
pub struct StreamAggregator {
    answer: String,
    session_id: String,
    message_id: String,
    metrics: Map<String, Value>,
}

impl StreamAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one complete line. Partial lines must never reach this method;
    /// the transport-facing [`aggregate_stream`] buffers until a line
    /// boundary before calling it.
    pub fn process_line(&mut self, line: &str) -> LineDisposition {
        let Some(payload) = line.strip_prefix(DATA_PREFIX) else {
            return LineDisposition::Continue;
        };
        let payload = payload.trim();

        if payload == DONE_SIGNAL {
            return LineDisposition::Done;
        }

        let event = match serde_json::from_str::<StreamEvent>(payload) {
            Ok(event) => event,
            Err(err) => {
                // Dropped, never fatal; see module docs.
                tracing::debug!(error = %err, "dropping undecodable stream frame");
                return LineDisposition::Continue;
            }
        };

        match event {
            StreamEvent::Fulfillment {
                answer,
                session_id,
                message_id,
            } => {
                if let Some(fragment) = answer {
                    self.answer.push_str(&fragment);
                }
                if let Some(id) = session_id {
                    self.session_id = id;
                }
                if let Some(id) = message_id {
                    self.message_id = id;
                }
            }
            StreamEvent::MetricsLog { public_metrics } => {
                if let Some(metrics) = public_metrics {
                    self.metrics = metrics;
                }
            }
            StreamEvent::Other => {}
        }

        LineDisposition::Continue
    }

    /// Finalize with whatever has accumulated. Reaching physical
    /// end-of-input without the done sentinel takes this same path.
    pub fn finish(self, context_metadata: Vec<ContextField>) -> AggregateResult {
        AggregateResult {
            session_id: self.session_id,
            message_id: self.message_id,
            answer: self.answer,
            metrics: self.metrics,
            status: CompletionStatus::Completed,
            context_metadata,
        }
    }
}

/// Consume a byte stream, splitting it on line boundaries so that no
/// partial line is ever parsed, and fold it into the terminal result.
///
/// A transport error mid-stream (connection closed, caller cancelled) is
/// treated as physical end-of-input: the aggregator finalizes with what it
/// has instead of failing.
pub async fn aggregate_stream(
    mut input: BoxStream<'static, Bytes>,
    context_metadata: Vec<ContextField>,
) -> AggregateResult {
    let mut aggregator = StreamAggregator::new();
    // Buffered raw: a multi-byte character may be torn across chunk
    // boundaries, so decoding happens per complete line, never per chunk.
    let mut buf: Vec<u8> = Vec::new();
    let mut done = false;

    'chunks: while let Some(chunk) = input.next().await {
        let chunk = match chunk {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::debug!(error = %err, "stream closed mid-flight; finalizing with accumulated state");
                break;
            }
        };
        buf.extend_from_slice(&chunk);

        while let Some(idx) = buf.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = buf.drain(..=idx).collect();
            let line = String::from_utf8_lossy(&line);
            if aggregator.process_line(line.trim_end_matches(['\r', '\n'])) == LineDisposition::Done
            {
                done = true;
                break 'chunks;
            }
        }
    }

    // Whatever remains in the buffer at end-of-input is one final complete
    // line, unless the done sentinel already stopped consumption.
    if !done && !buf.is_empty() {
        let tail = String::from_utf8_lossy(&buf);
        aggregator.process_line(tail.trim_end_matches('\r'));
    }

    aggregator.finish(context_metadata)
}
