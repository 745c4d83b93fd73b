//! eventfeed - incremental Server-Sent Events parsing
//!
//! The core is [`sse::SseParser`], which accepts arbitrarily split text
//! chunks and dispatches complete events. Around it:
//!
//! - [`stream`] adapts byte sources (HTTP bodies, readers) into event streams
//! - [`delta`] turns chat-completion events into text deltas
//! - [`cli`] backs the `eventfeed` binary

pub mod cli;
pub mod delta;
pub mod error;
pub mod prelude;
pub mod sse;
pub mod stream;
pub mod traits;
