//! Common test utilities for integration tests.
//!
//! Helpers for feeding the same input to a parser under different chunkings
//! and collecting what comes out.

#![allow(dead_code)]

use bytes::Bytes;
use eventfeed::sse::{ParsedEvent, SseEvent, SseParser};

/// Feed `chunks` to a fresh parser, returning every value in order.
pub fn feed_all(chunks: &[&str]) -> Vec<ParsedEvent> {
    let mut parser = SseParser::new();
    chunks.iter().flat_map(|chunk| parser.feed(chunk)).collect()
}

/// Feed `input` split in two at byte offset `at`.
pub fn feed_split(input: &str, at: usize) -> Vec<ParsedEvent> {
    let (head, tail) = input.split_at(at);
    feed_all(&[head, tail])
}

/// Feed `input` in pieces of at most `size` bytes, never splitting a code point.
pub fn feed_in_pieces(input: &str, size: usize) -> Vec<ParsedEvent> {
    feed_all(&pieces(input, size))
}

/// Split `input` into pieces of at most `size` bytes on char boundaries.
pub fn pieces(input: &str, size: usize) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    while start < input.len() {
        let mut end = (start + size).min(input.len());
        while !input.is_char_boundary(end) {
            end += 1;
        }
        out.push(&input[start..end]);
        start = end;
    }
    out
}

/// Keep only the events.
pub fn events_only(parsed: Vec<ParsedEvent>) -> Vec<SseEvent> {
    parsed
        .into_iter()
        .filter_map(ParsedEvent::into_event)
        .collect()
}

/// Byte chunks of at most `size` bytes, splitting anywhere (including
/// inside multi-byte code points).
pub fn byte_chunks(input: &[u8], size: usize) -> Vec<Result<Bytes, std::io::Error>> {
    input
        .chunks(size)
        .map(|chunk| Ok(Bytes::copy_from_slice(chunk)))
        .collect()
}

/// A chat-completion chunk carrying `content`.
pub fn completion_chunk(content: &str) -> String {
    serde_json::json!({
        "choices": [{"delta": {"content": content}, "finish_reason": null}]
    })
    .to_string()
}
