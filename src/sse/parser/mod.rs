//! SSE stream parsing logic
//!
//! Contains the stateful [`SseParser`], which accepts arbitrarily split text
//! chunks, splits them into lines and dispatches complete events.

mod line;

pub use line::{classify_line, parse_retry, parse_sse_line};

use crate::sse::events::{ParsedEvent, ReconnectInterval, SseEvent, SseLine};

/// Byte order mark, stripped only from the very start of the stream.
const BOM: char = '\u{FEFF}';

/// Stateful SSE parser that accumulates chunks and emits complete events.
///
/// Chunk boundaries carry no meaning: feeding `"data: hi\n\n"` in one call or
/// one byte at a time produces the same events. Malformed input never
/// errors; unknown fields, unparseable `retry` values and ids containing NUL
/// are skipped.
///
/// # Example
///
/// ```
/// use eventfeed::sse::{ParsedEvent, SseParser};
///
/// let mut parser = SseParser::new();
/// assert!(parser.feed("data: hel").is_empty());
///
/// let events = parser.feed("lo\n\n");
/// assert_eq!(events.len(), 1);
/// assert!(matches!(&events[0], ParsedEvent::Event(e) if e.data == "hello"));
/// ```
#[derive(Debug, Default)]
pub struct SseParser {
    /// Unterminated remainder of the input, starting at a line boundary
    buffer: String,
    /// Bytes of `buffer` already scanned without finding a terminator
    scan_cursor: usize,
    /// Colon offset found while scanning the parked line
    pending_field_len: Option<usize>,
    /// Previous line ended on CR; swallow one LF if it comes next
    pending_discard_lf: bool,
    /// Id of the event being assembled
    event_id: Option<String>,
    /// Name of the event being assembled
    event_name: Option<String>,
    /// Accumulated data lines, each followed by `\n`
    data: String,
    /// Whether the BOM check has already run
    saw_first_chunk: bool,
}

impl SseParser {
    /// Create a new SSE parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk, delivering every completed value to `sink` in order.
    pub fn feed_with<F>(&mut self, chunk: &str, mut sink: F)
    where
        F: FnMut(ParsedEvent),
    {
        let mut buffer = std::mem::take(&mut self.buffer);
        buffer.push_str(chunk);

        if !self.saw_first_chunk {
            self.saw_first_chunk = true;
            if buffer.starts_with(BOM) {
                buffer.drain(..BOM.len_utf8());
            }
        }

        let bytes = buffer.as_bytes();
        let mut position = 0;

        while position < bytes.len() {
            if self.pending_discard_lf {
                self.pending_discard_lf = false;
                if bytes[position] == b'\n' {
                    position += 1;
                    continue;
                }
            }

            let mut field_len = self.pending_field_len;
            let mut line_len = None;

            for (index, &byte) in bytes
                .iter()
                .enumerate()
                .skip(position + self.scan_cursor)
            {
                match byte {
                    b':' if field_len.is_none() => field_len = Some(index - position),
                    b'\r' => {
                        self.pending_discard_lf = true;
                        line_len = Some(index - position);
                        break;
                    }
                    b'\n' => {
                        line_len = Some(index - position);
                        break;
                    }
                    _ => {}
                }
            }

            let Some(line_len) = line_len else {
                // Park the scan; the next feed resumes after these bytes
                self.scan_cursor = bytes.len() - position;
                self.pending_field_len = field_len;
                break;
            };

            self.scan_cursor = 0;
            self.pending_field_len = None;

            let line = &buffer[position..position + line_len];
            self.process_line(classify_line(line, field_len), &mut sink);
            position += line_len + 1;
        }

        buffer.drain(..position);
        self.buffer = buffer;
    }

    /// Feed a chunk and collect the completed values.
    pub fn feed(&mut self, chunk: &str) -> Vec<ParsedEvent> {
        let mut out = Vec::new();
        self.feed_with(chunk, |parsed| out.push(parsed));
        out
    }

    /// Reset the parser state.
    ///
    /// Discards any buffered partial line and any partially assembled event,
    /// and re-arms the byte order mark check.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Length in bytes of the buffered, unterminated line.
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    fn process_line<F>(&mut self, line: SseLine<'_>, sink: &mut F)
    where
        F: FnMut(ParsedEvent),
    {
        match line {
            SseLine::Empty => self.dispatch(sink),
            SseLine::Data(value) => {
                self.data.push_str(value);
                self.data.push('\n');
            }
            SseLine::Event(value) => self.event_name = Some(value.to_string()),
            SseLine::Id(value) => {
                if value.contains('\0') {
                    tracing::trace!("ignoring id containing NUL");
                } else {
                    self.event_id = Some(value.to_string());
                }
            }
            SseLine::Retry(value) => match parse_retry(value) {
                Some(ms) => sink(ParsedEvent::ReconnectInterval(ReconnectInterval::new(ms))),
                None => tracing::trace!(value, "ignoring unparseable retry"),
            },
            SseLine::Other { field, .. } => {
                tracing::trace!(field, "ignoring unknown field");
            }
        }
    }

    fn dispatch<F>(&mut self, sink: &mut F)
    where
        F: FnMut(ParsedEvent),
    {
        // The name never carries over a blank line, even if nothing is sent
        let event_name = self.event_name.take().filter(|name| !name.is_empty());

        if self.data.is_empty() {
            return;
        }

        let mut data = std::mem::take(&mut self.data);
        data.pop();

        sink(ParsedEvent::Event(SseEvent {
            id: self.event_id.take(),
            event: event_name,
            data,
        }));
    }
}
