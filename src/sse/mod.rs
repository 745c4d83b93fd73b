//! SSE (Server-Sent Events) stream parser
//!
//! Parses the SSE wire format incrementally from arbitrarily split chunks.
//! SSE format consists of:
//! - `field: value` lines terminated by `\n`, `\r` or `\r\n`
//! - `data:` lines, joined with `\n` into the event payload
//! - `event:` and `id:` lines, last value wins
//! - `retry:` lines, dispatched immediately as a reconnect interval
//! - Lines starting with `:` - comments (ignored)
//! - Empty line - signals end of event
//!
//! # Module structure
//! - `events` - Dispatched value types (SseEvent, ReconnectInterval, ParsedEvent, SseLine)
//! - `parser` - Parsing logic (SseParser, parse_sse_line, parse_retry)
//! - `utf8` - Byte chunk to text chunk decoding (Utf8ChunkDecoder)

mod events;
mod parser;
mod utf8;

// Re-export public types
pub use events::{ParsedEvent, ReconnectInterval, SseEvent, SseLine};
pub use parser::{classify_line, parse_retry, parse_sse_line, SseParser};
pub use utf8::{DecodedChunk, Utf8ChunkDecoder, Utf8Mode};
