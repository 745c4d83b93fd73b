//! The default CLI command: parse a stream and print what it contains.

use super::args::{OutputMode, RunOptions};
use crate::delta::text_deltas;
use crate::sse::{ParsedEvent, Utf8Mode};
use crate::stream::{from_reader, StreamConfig, DEFAULT_READ_CHUNK_SIZE};
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use futures_util::StreamExt;
use std::io::Write;
use tokio::io::AsyncRead;

/// Counts reported after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Events printed (JSON mode only)
    pub events: usize,
    /// Reconnect intervals printed
    pub reconnect_intervals: usize,
    /// Text deltas printed
    pub deltas: usize,
}

impl RunOptions {
    /// Adapter configuration implied by these options.
    pub fn stream_config(&self) -> StreamConfig {
        let utf8_mode = if self.strict_utf8 {
            Utf8Mode::Strict
        } else {
            Utf8Mode::Lossy
        };
        StreamConfig::new()
            .with_reconnect_intervals(self.include_reconnect_intervals)
            .with_utf8_mode(utf8_mode)
    }
}

/// Open the configured input and write its parsed contents to `out`.
pub async fn run<W: Write>(options: &RunOptions, out: &mut W) -> Result<RunSummary> {
    let reader: Box<dyn AsyncRead + Send + Unpin> = match &options.input {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .wrap_err_with(|| format!("failed to open {}", path.display()))?;
            Box::new(file)
        }
        None => Box::new(tokio::io::stdin()),
    };

    run_reader(reader, options, out).await
}

/// Parse `reader` according to `options` and write the result to `out`.
pub async fn run_reader<R, W>(reader: R, options: &RunOptions, out: &mut W) -> Result<RunSummary>
where
    R: AsyncRead + Send + Unpin + 'static,
    W: Write,
{
    let chunk_size = options.chunk_size.unwrap_or(DEFAULT_READ_CHUNK_SIZE);
    let stream = from_reader(reader, chunk_size, options.stream_config());
    let mut summary = RunSummary::default();

    tracing::debug!(output = ?options.output, chunk_size, "parsing input");

    match options.output {
        OutputMode::Json => {
            let mut stream = stream;
            while let Some(parsed) = stream.next().await {
                let parsed = parsed.wrap_err("failed to read event stream")?;
                match &parsed {
                    ParsedEvent::Event(_) => summary.events += 1,
                    ParsedEvent::ReconnectInterval(_) => summary.reconnect_intervals += 1,
                }
                serde_json::to_writer(&mut *out, &parsed)?;
                writeln!(out)?;
            }
        }
        OutputMode::Deltas => {
            let mut deltas = Box::pin(text_deltas(stream.events()));
            while let Some(text) = deltas.next().await {
                let text = text.wrap_err("failed to decode completion stream")?;
                summary.deltas += 1;
                out.write_all(text.as_bytes())?;
                out.flush()?;
            }
            writeln!(out)?;
        }
    }

    out.flush()?;
    tracing::debug!(
        events = summary.events,
        reconnect_intervals = summary.reconnect_intervals,
        deltas = summary.deltas,
        "input exhausted"
    );
    Ok(summary)
}
