//! Incremental UTF-8 decoding for byte chunks.
//!
//! Transports deliver bytes, and a multi-byte code point may be split across
//! two chunks. The decoder holds back an incomplete trailing sequence until
//! the rest of it arrives.

use crate::error::StreamError;

/// How invalid UTF-8 is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Utf8Mode {
    /// Replace invalid sequences with U+FFFD
    #[default]
    Lossy,
    /// Fail on the first invalid sequence
    Strict,
}

/// Text decoded from one chunk.
#[derive(Debug)]
pub struct DecodedChunk {
    /// Everything that decoded cleanly, up to any error
    pub text: String,
    /// Strict-mode failure found after `text`
    pub error: Option<StreamError>,
}

impl DecodedChunk {
    /// The text, or the error if decoding stopped early.
    pub fn into_result(self) -> Result<String, StreamError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.text),
        }
    }
}

/// Turns a sequence of byte chunks into a sequence of text chunks.
#[derive(Debug, Default)]
pub struct Utf8ChunkDecoder {
    mode: Utf8Mode,
    /// Incomplete sequence held back from the previous chunk
    pending: Vec<u8>,
    /// Stream offset of the first byte of `pending`
    offset: usize,
}

impl Utf8ChunkDecoder {
    /// Create a decoder with the given invalid-input handling.
    pub fn new(mode: Utf8Mode) -> Self {
        Self {
            mode,
            pending: Vec::new(),
            offset: 0,
        }
    }

    /// Decode the next chunk, returning all text that is complete so far.
    ///
    /// In strict mode an invalid sequence stops decoding; the text before it
    /// is still returned alongside the error.
    pub fn decode(&mut self, chunk: &[u8]) -> DecodedChunk {
        let joined;
        let bytes: &[u8] = if self.pending.is_empty() {
            chunk
        } else {
            let mut buf = std::mem::take(&mut self.pending);
            buf.extend_from_slice(chunk);
            joined = buf;
            &joined
        };

        let mut out = String::with_capacity(bytes.len());
        let mut start = 0;

        while start < bytes.len() {
            match std::str::from_utf8(&bytes[start..]) {
                Ok(text) => {
                    out.push_str(text);
                    start = bytes.len();
                }
                Err(err) => {
                    let valid = start + err.valid_up_to();
                    out.push_str(std::str::from_utf8(&bytes[start..valid]).unwrap_or_default());

                    match err.error_len() {
                        None => {
                            // Incomplete sequence at the end; wait for more bytes
                            self.pending.extend_from_slice(&bytes[valid..]);
                            self.offset += valid;
                            return DecodedChunk {
                                text: out,
                                error: None,
                            };
                        }
                        Some(len) => match self.mode {
                            Utf8Mode::Lossy => {
                                tracing::warn!(
                                    offset = self.offset + valid,
                                    "replacing invalid UTF-8 in stream"
                                );
                                out.push(char::REPLACEMENT_CHARACTER);
                                start = valid + len;
                            }
                            Utf8Mode::Strict => {
                                let offset = self.offset + valid;
                                return DecodedChunk {
                                    text: out,
                                    error: Some(StreamError::InvalidUtf8 { offset }),
                                };
                            }
                        },
                    }
                }
            }
        }

        self.offset += bytes.len();
        DecodedChunk {
            text: out,
            error: None,
        }
    }

    /// Signal end of input.
    ///
    /// Returns replacement text for a dangling incomplete sequence in lossy
    /// mode, or an error in strict mode.
    pub fn finish(&mut self) -> Result<Option<String>, StreamError> {
        if self.pending.is_empty() {
            return Ok(None);
        }

        let len = self.pending.len();
        let offset = self.offset;
        self.pending.clear();
        self.offset += len;

        match self.mode {
            Utf8Mode::Lossy => Ok(Some(char::REPLACEMENT_CHARACTER.to_string())),
            Utf8Mode::Strict => Err(StreamError::TruncatedUtf8 { offset, len }),
        }
    }
}
