//! Performance benchmarks for SSE parsing
//!
//! Tests parser throughput for different chunk sizes and event shapes.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use eventfeed::sse::{SseParser, Utf8ChunkDecoder, Utf8Mode};

/// Generate a completion-style stream with `events` single-line events
fn generate_stream(events: usize) -> String {
    (0..events)
        .map(|i| {
            format!(
                "id: {}\ndata: {{\"choices\":[{{\"delta\":{{\"content\":\"token {} héllo\"}}}}]}}\n\n",
                i, i
            )
        })
        .collect()
}

/// Generate one event whose data is `lines` lines long
fn generate_multiline_event(lines: usize) -> String {
    let mut out = String::from("event: log\r\n");
    for i in 0..lines {
        out.push_str(&format!("data: line {} of a long multi-line payload\r\n", i));
    }
    out.push_str("\r\n");
    out
}

/// Split `input` into pieces of at most `size` bytes on char boundaries
fn split_chunks(input: &str, size: usize) -> Vec<&str> {
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

/// Benchmark feeding the same stream at different chunk sizes
fn bench_parser_chunk_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_chunk_sizes");
    let input = generate_stream(500);
    group.throughput(Throughput::Bytes(input.len() as u64));

    for size in [1, 16, 256, 4096, 65536].iter() {
        let chunks = split_chunks(&input, *size);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_bytes", size)),
            &chunks,
            |b, chunks| {
                b.iter(|| {
                    let mut parser = SseParser::new();
                    let mut count = 0usize;
                    for chunk in chunks {
                        parser.feed_with(black_box(chunk), |_| count += 1);
                    }
                    black_box(count)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark a long multi-line event arriving in small chunks
fn bench_parser_long_event(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_long_event");

    for lines in [10, 100, 1000].iter() {
        let input = generate_multiline_event(*lines);
        let chunks = split_chunks(&input, 7);
        group.throughput(Throughput::Bytes(input.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_lines", lines)),
            &chunks,
            |b, chunks| {
                b.iter(|| {
                    let mut parser = SseParser::new();
                    let mut events = Vec::new();
                    for chunk in chunks {
                        events.extend(parser.feed(black_box(chunk)));
                    }
                    black_box(events)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark UTF-8 decoding plus parsing from raw byte chunks
fn bench_decode_and_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_and_parse");
    let input = generate_stream(500);
    group.throughput(Throughput::Bytes(input.len() as u64));

    for size in [3, 1024].iter() {
        let chunks: Vec<&[u8]> = input.as_bytes().chunks(*size).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_bytes", size)),
            &chunks,
            |b, chunks| {
                b.iter(|| {
                    let mut decoder = Utf8ChunkDecoder::new(Utf8Mode::Lossy);
                    let mut parser = SseParser::new();
                    let mut count = 0usize;
                    for chunk in chunks {
                        if let Ok(text) = decoder.decode(black_box(chunk)).into_result() {
                            parser.feed_with(&text, |_| count += 1);
                        }
                    }
                    black_box(count)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parser_chunk_sizes,
    bench_parser_long_event,
    bench_decode_and_parse
);
criterion_main!(benches);
