//! Chat-completion text deltas over SSE.
//!
//! OpenAI-compatible completion endpoints stream one JSON chunk per event:
//!
//! ```text
//! data: {"choices":[{"delta":{"content":"Hel"},"finish_reason":null}]}
//!
//! data: {"choices":[{"delta":{},"finish_reason":"stop"}]}
//! ```
//!
//! This layer sits above the generic parser and knows nothing about SSE
//! framing; it only interprets event data.

use crate::error::{DeltaError, StreamError};
use crate::sse::SseEvent;
use futures::Stream;
use futures_util::stream;
use futures_util::StreamExt;
use serde::Deserialize;
use std::pin::Pin;

/// Data payload some servers send after the last chunk.
pub const DONE_SENTINEL: &str = "[DONE]";

/// Finish reason that ends the completion.
const FINISH_STOP: &str = "stop";

#[derive(Debug, Deserialize)]
struct CompletionChunk {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    #[serde(default)]
    delta: Option<CompletionDelta>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CompletionDelta {
    #[serde(default)]
    content: Option<String>,
}

/// What one event contributes to the completion text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeltaStep {
    /// Append this text
    Text(String),
    /// Nothing to append (no choices, or a delta without content)
    Skip,
    /// The completion is over
    Finished,
}

/// Interpret one event's data as a completion chunk.
///
/// Only the first choice is considered.
pub fn parse_chunk(data: &str) -> Result<DeltaStep, DeltaError> {
    if data.trim() == DONE_SENTINEL {
        return Ok(DeltaStep::Finished);
    }

    let chunk: CompletionChunk = serde_json::from_str(data)?;
    let Some(choice) = chunk.choices.into_iter().next() else {
        return Ok(DeltaStep::Skip);
    };

    if choice.finish_reason.as_deref() == Some(FINISH_STOP) {
        return Ok(DeltaStep::Finished);
    }

    Ok(match choice.delta.and_then(|delta| delta.content) {
        Some(text) => DeltaStep::Text(text),
        None => DeltaStep::Skip,
    })
}

/// Turn a stream of events into a stream of completion text deltas.
///
/// Ends at the first finished chunk, at the first error, or when the
/// events run out.
pub fn text_deltas<S>(events: S) -> impl Stream<Item = Result<String, DeltaError>> + Send
where
    S: Stream<Item = Result<SseEvent, StreamError>> + Send + 'static,
{
    let events: Pin<Box<S>> = Box::pin(events);

    stream::unfold(Some(events), |events| async move {
        let mut events = events?;
        loop {
            let event = match events.next().await? {
                Ok(event) => event,
                Err(err) => return Some((Err(err.into()), None)),
            };

            match parse_chunk(&event.data) {
                Ok(DeltaStep::Text(text)) => return Some((Ok(text), Some(events))),
                Ok(DeltaStep::Skip) => continue,
                Ok(DeltaStep::Finished) => {
                    tracing::debug!("completion finished");
                    return None;
                }
                Err(err) => {
                    tracing::debug!(error = %err, "undecodable completion chunk");
                    return Some((Err(err), None));
                }
            }
        }
    })
}
