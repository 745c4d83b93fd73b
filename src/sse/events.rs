//! SSE event types and definitions
//!
//! Contains the values the parser dispatches: complete events, reconnect
//! interval signals, and the tagged union that carries either one.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A fully assembled event, dispatched on a blank line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SseEvent {
    /// Last `id` field seen for this event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Last non-empty `event` field seen for this event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    /// Joined `data` lines, separated by `\n`
    pub data: String,
}

impl SseEvent {
    /// Create an event carrying only data.
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            id: None,
            event: None,
            data: data.into(),
        }
    }

    /// Set the event id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the event name.
    pub fn with_event(mut self, event: impl Into<String>) -> Self {
        self.event = Some(event.into());
        self
    }
}

/// Reconnection delay requested by the server through a `retry` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconnectInterval {
    /// Delay in milliseconds, exactly as sent
    pub value: i64,
}

impl ReconnectInterval {
    /// Create an interval of `value` milliseconds.
    pub fn new(value: i64) -> Self {
        Self { value }
    }

    /// The delay as a `Duration`, or `None` if the server sent a negative value.
    pub fn as_duration(&self) -> Option<Duration> {
        u64::try_from(self.value).ok().map(Duration::from_millis)
    }
}

/// A value dispatched by the parser, in emission order.
///
/// Serializes as `{"kind":"event",...}` or
/// `{"kind":"reconnect-interval","value":...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ParsedEvent {
    Event(SseEvent),
    ReconnectInterval(ReconnectInterval),
}

impl ParsedEvent {
    /// Returns the kind tag as a string for logging.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ParsedEvent::Event(_) => "event",
            ParsedEvent::ReconnectInterval(_) => "reconnect-interval",
        }
    }

    /// Borrow the event, if this is one.
    pub fn as_event(&self) -> Option<&SseEvent> {
        match self {
            ParsedEvent::Event(event) => Some(event),
            ParsedEvent::ReconnectInterval(_) => None,
        }
    }

    /// Take the event, if this is one.
    pub fn into_event(self) -> Option<SseEvent> {
        match self {
            ParsedEvent::Event(event) => Some(event),
            ParsedEvent::ReconnectInterval(_) => None,
        }
    }
}

impl From<SseEvent> for ParsedEvent {
    fn from(event: SseEvent) -> Self {
        ParsedEvent::Event(event)
    }
}

impl From<ReconnectInterval> for ParsedEvent {
    fn from(interval: ReconnectInterval) -> Self {
        ParsedEvent::ReconnectInterval(interval)
    }
}

/// One decoded line of the event stream, classified by field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SseLine<'a> {
    /// Blank line - dispatches the pending event
    Empty,
    /// `data` field value
    Data(&'a str),
    /// `event` field value
    Event(&'a str),
    /// `id` field value
    Id(&'a str),
    /// `retry` field value, not yet parsed
    Retry(&'a str),
    /// Any other field, including the empty name of a `:` comment line
    Other { field: &'a str, value: &'a str },
}
