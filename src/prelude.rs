//! Prelude module for convenient imports.
//!
//! ```ignore
//! use eventfeed::prelude::*;
//! ```
//!
//! This will import the parser, its dispatched value types, the parser
//! trait, the stream adapter entry points and the error types.

// Parser and values
pub use crate::sse::{ParsedEvent, ReconnectInterval, SseEvent, SseParser};

// Trait abstraction
pub use crate::traits::SseParserTrait;

// Stream adapter
pub use crate::stream::{from_reader, from_response, parse_stream, SseStream, StreamConfig};

// Payload layer
pub use crate::delta::{text_deltas, DeltaStep};

// Errors
pub use crate::error::{DeltaError, StreamError, StreamResult};
