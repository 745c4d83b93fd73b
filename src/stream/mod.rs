//! Stream adapter: byte sources in, parsed SSE values out.
//!
//! Bridges anything that yields byte chunks (an HTTP response body, a file,
//! stdin) into repeated parser `feed` calls and exposes the result as a lazy
//! [`futures::Stream`]. The source is only polled when the consumer polls,
//! so a slow consumer naturally slows the reads. Dropping the stream drops
//! the source.
//!
//! An event whose terminating blank line never arrives before the source
//! ends is not emitted.

mod config;

pub use config::StreamConfig;

use crate::error::StreamError;
use crate::sse::{ParsedEvent, SseEvent, SseParser, Utf8ChunkDecoder};
use crate::traits::SseParserTrait;
use bytes::Bytes;
use futures::Stream;
use futures_util::future;
use futures_util::stream;
use futures_util::StreamExt;
use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::{AsyncRead, AsyncReadExt};

/// Read size used when adapting an `AsyncRead` without an explicit size.
pub const DEFAULT_READ_CHUNK_SIZE: usize = 8 * 1024;

type ByteSource = Pin<Box<dyn Stream<Item = Result<Bytes, StreamError>> + Send>>;

/// A lazy stream of parsed SSE values.
///
/// Finite until the source is exhausted and not restartable: replaying
/// requires a fresh source and a fresh (or reset) parser. A source error is
/// yielded once, after which the stream ends.
pub struct SseStream {
    inner: Pin<Box<dyn Stream<Item = Result<ParsedEvent, StreamError>> + Send>>,
}

impl SseStream {
    /// Narrow the stream to events, dropping reconnect intervals.
    pub fn events(self) -> impl Stream<Item = Result<SseEvent, StreamError>> + Send {
        self.filter_map(|item| {
            future::ready(match item {
                Ok(ParsedEvent::Event(event)) => Some(Ok(event)),
                Ok(ParsedEvent::ReconnectInterval(_)) => None,
                Err(err) => Some(Err(err)),
            })
        })
    }
}

impl Stream for SseStream {
    type Item = Result<ParsedEvent, StreamError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.poll_next_unpin(cx)
    }
}

impl std::fmt::Debug for SseStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SseStream").finish_non_exhaustive()
    }
}

/// Parse a stream of byte chunks with a fresh [`SseParser`].
///
/// # Example
///
/// ```ignore
/// let response = reqwest::get(url).await?.error_for_status()?;
/// let mut events = eventfeed::stream::parse_stream(response.bytes_stream(), StreamConfig::default());
/// while let Some(parsed) = events.next().await {
///     println!("{:?}", parsed?);
/// }
/// ```
pub fn parse_stream<S, E>(source: S, config: StreamConfig) -> SseStream
where
    S: Stream<Item = Result<Bytes, E>> + Send + 'static,
    E: std::error::Error + Send + Sync + 'static,
{
    parse_stream_with(source, Box::new(SseParser::new()), config)
}

/// Parse a stream of byte chunks with a caller-supplied parser.
pub fn parse_stream_with<S, E>(
    source: S,
    parser: Box<dyn SseParserTrait>,
    config: StreamConfig,
) -> SseStream
where
    S: Stream<Item = Result<Bytes, E>> + Send + 'static,
    E: std::error::Error + Send + Sync + 'static,
{
    let source = source.map(|chunk| chunk.map_err(StreamError::from_source));
    adapt(Box::pin(source), parser, config)
}

/// Parse the body of an HTTP response.
///
/// The caller is responsible for having checked the status code; the body
/// is parsed as-is.
pub fn from_response(response: reqwest::Response, config: StreamConfig) -> SseStream {
    tracing::debug!(
        status = %response.status(),
        url = %response.url(),
        "adapting response body"
    );
    parse_stream(response.bytes_stream(), config)
}

/// Parse an async reader, reading at most `chunk_size` bytes at a time.
pub fn from_reader<R>(reader: R, chunk_size: usize, config: StreamConfig) -> SseStream
where
    R: AsyncRead + Send + Unpin + 'static,
{
    let chunk_size = chunk_size.max(1);
    let source = stream::unfold(Some(reader), move |reader| async move {
        let mut reader = reader?;
        let mut buf = vec![0u8; chunk_size];
        match reader.read(&mut buf).await {
            Ok(0) => None,
            Ok(n) => {
                buf.truncate(n);
                Some((Ok(Bytes::from(buf)), Some(reader)))
            }
            Err(err) => Some((Err(StreamError::Io(err)), None)),
        }
    });
    adapt(Box::pin(source), Box::new(SseParser::new()), config)
}

/// Mutable state carried through the adapter loop.
struct AdapterState {
    source: ByteSource,
    parser: Box<dyn SseParserTrait>,
    decoder: Utf8ChunkDecoder,
    /// Values dispatched by the parser but not yet yielded
    pending: VecDeque<ParsedEvent>,
    config: StreamConfig,
    /// Error to yield once `pending` is drained
    failure: Option<StreamError>,
    finished: bool,
    chunks: u64,
}

impl AdapterState {
    fn feed(&mut self, text: &str) {
        // A chunk holding only part of a code point decodes to nothing, and
        // must not use up the parser's first-chunk BOM check
        if text.is_empty() {
            return;
        }

        let include_reconnect = self.config.include_reconnect_intervals;
        let pending = &mut self.pending;
        self.parser.feed_with(text, &mut |parsed| {
            if include_reconnect || matches!(parsed, ParsedEvent::Event(_)) {
                pending.push_back(parsed);
            } else {
                tracing::trace!(kind = parsed.kind_name(), "dropping parsed value");
            }
        });
    }
}

fn adapt(source: ByteSource, parser: Box<dyn SseParserTrait>, config: StreamConfig) -> SseStream {
    let state = AdapterState {
        source,
        parser,
        decoder: Utf8ChunkDecoder::new(config.utf8_mode),
        pending: VecDeque::new(),
        config,
        failure: None,
        finished: false,
        chunks: 0,
    };

    let inner = stream::unfold(state, |mut state| async move {
        loop {
            if let Some(parsed) = state.pending.pop_front() {
                tracing::trace!(kind = parsed.kind_name(), "yielding parsed value");
                return Some((Ok(parsed), state));
            }

            if let Some(err) = state.failure.take() {
                return Some((Err(err), state));
            }

            if state.finished {
                return None;
            }

            match state.source.next().await {
                Some(Ok(chunk)) => {
                    state.chunks += 1;
                    tracing::trace!(len = chunk.len(), chunk = state.chunks, "received chunk");
                    let decoded = state.decoder.decode(&chunk);
                    // Text before an invalid sequence is parsed before the error surfaces
                    state.feed(&decoded.text);
                    if let Some(err) = decoded.error {
                        tracing::debug!(error = %err, "stream is not valid UTF-8");
                        state.finished = true;
                        state.failure = Some(err);
                    }
                }
                Some(Err(err)) => {
                    tracing::debug!(error = %err, "byte source failed");
                    state.finished = true;
                    return Some((Err(err), state));
                }
                None => {
                    tracing::debug!(chunks = state.chunks, "byte source exhausted");
                    state.finished = true;
                    match state.decoder.finish() {
                        Ok(Some(text)) => state.feed(&text),
                        Ok(None) => {}
                        Err(err) => state.failure = Some(err),
                    }
                }
            }
        }
    });

    SseStream {
        inner: Box::pin(inner),
    }
}
