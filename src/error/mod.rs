//! Error handling for the stream adapter and payload layers.
//!
//! The SSE parser itself never fails; malformed framing is skipped. Errors
//! only arise where the parser meets the outside world:
//!
//! - **Stream errors**: the byte source failed, or its bytes were not UTF-8
//! - **Delta errors**: an event payload was not a valid completion chunk
//! - **Categories**: coarse classification used for retry decisions
//!
//! # Example
//!
//! ```ignore
//! use eventfeed::error::{StreamError, StreamResult};
//!
//! fn next_text(decoder: &mut Utf8ChunkDecoder, bytes: &[u8]) -> StreamResult<String> {
//!     decoder.decode(bytes).into_result()
//! }
//! ```
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Transport | Source or I/O failure | Yes |
//! | Encoding | Invalid or truncated UTF-8 | No |
//! | Payload | Event data could not be decoded | No |

mod category;
mod delta;
mod result;
mod stream;

pub use category::ErrorCategory;
pub use delta::DeltaError;
pub use result::StreamResult;
pub use stream::StreamError;
