//! SSE (Server-Sent Events) parser trait abstraction.
//!
//! Provides a trait-based abstraction for SSE parsing, so the stream
//! adapter can be driven by any parser and mocked in tests.

use crate::sse::{ParsedEvent, SseParser};

/// Trait for incremental SSE parsing.
///
/// The parser is stateful - it buffers partial lines and partially
/// assembled events across calls until a blank line completes them.
///
/// # Example
///
/// ```
/// use eventfeed::sse::SseParser;
/// use eventfeed::traits::SseParserTrait;
///
/// fn count_events(parser: &mut dyn SseParserTrait, chunks: &[&str]) -> usize {
///     chunks.iter().map(|chunk| parser.feed(chunk).len()).sum()
/// }
///
/// let mut parser = SseParser::new();
/// assert_eq!(count_events(&mut parser, &["data: a\n", "\ndata: b\n\n"]), 2);
/// ```
pub trait SseParserTrait: Send {
    /// Feed a chunk of text, delivering each completed value to `sink`.
    ///
    /// # Arguments
    /// * `chunk` - Any fragment of the stream; boundaries carry no meaning
    /// * `sink` - Receives events and reconnect intervals in emission order
    fn feed_with(&mut self, chunk: &str, sink: &mut dyn FnMut(ParsedEvent));

    /// Feed a chunk of text and collect the completed values.
    fn feed(&mut self, chunk: &str) -> Vec<ParsedEvent> {
        let mut out = Vec::new();
        self.feed_with(chunk, &mut |parsed| out.push(parsed));
        out
    }

    /// Reset the parser state.
    ///
    /// This discards any buffered partial line and partially assembled
    /// event, useful when reconnecting to a fresh source.
    fn reset(&mut self);
}

impl SseParserTrait for SseParser {
    fn feed_with(&mut self, chunk: &str, sink: &mut dyn FnMut(ParsedEvent)) {
        SseParser::feed_with(self, chunk, sink)
    }

    fn feed(&mut self, chunk: &str) -> Vec<ParsedEvent> {
        SseParser::feed(self, chunk)
    }

    fn reset(&mut self) {
        SseParser::reset(self)
    }
}
