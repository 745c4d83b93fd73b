//! Field-line classification
//!
//! Splits a single terminated line into field name and value and maps the
//! field name onto an [`SseLine`].

use crate::sse::events::SseLine;

/// Classify a line whose first colon offset is already known.
///
/// `field_len` is the byte offset of the first `:` in `line`, or `None` when
/// the line has no colon. The caller (the line splitter) records it while
/// scanning so the line is not searched twice.
pub fn classify_line(line: &str, field_len: Option<usize>) -> SseLine<'_> {
    if line.is_empty() {
        return SseLine::Empty;
    }

    let (field, value) = match field_len {
        None => (line, ""),
        Some(colon) => {
            let rest = &line[colon + 1..];
            // Exactly one leading space belongs to the separator
            (&line[..colon], rest.strip_prefix(' ').unwrap_or(rest))
        }
    };

    match field {
        "data" => SseLine::Data(value),
        "event" => SseLine::Event(value),
        "id" => SseLine::Id(value),
        "retry" => SseLine::Retry(value),
        _ => SseLine::Other { field, value },
    }
}

/// Parse a single SSE line (without its terminator) into its component type.
pub fn parse_sse_line(line: &str) -> SseLine<'_> {
    classify_line(line, line.find(':'))
}

/// Parse a `retry` value as a base-10 integer.
///
/// Accepts optional leading whitespace and sign followed by at least one
/// ASCII digit. Anything after the digit run is ignored, so `"3000ms"`
/// yields 3000. Returns `None` when there are no digits or the number does
/// not fit in an `i64`.
pub fn parse_retry(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let magnitude: i64 = unsigned[..digits].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
