//! Criterion benchmarks for minlog

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use minlog::prelude::*;
use std::io;
use std::sync::Arc;

fn sink_logger(level: LogLevel) -> Logger {
    Logger::builder()
        .min_level(level)
        .output(Sink::new(io::sink()))
        .build()
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("new", |b| {
        b.iter(|| black_box(Logger::new()));
    });

    group.bench_function("with_options", |b| {
        b.iter(|| {
            black_box(Logger::with_options([
                with_level(LogLevel::Debug),
                with_output(Sink::new(io::sink())),
                with_formatter(JsonFormatter::new()),
            ]))
        });
    });

    group.finish();
}

// ============================================================================
// Level Gating Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger(LogLevel::Warn);

    group.bench_function("suppressed_plain", |b| {
        b.iter(|| logger.debug(&[&black_box("Filtered message")]));
    });

    group.bench_function("suppressed_template", |b| {
        b.iter(|| logger.infof("user {} id {}", &[&black_box("alice"), &black_box(42)]));
    });

    group.bench_function("written", |b| {
        b.iter(|| logger.error(&[&black_box("Passed message")]));
    });

    group.finish();
}

// ============================================================================
// Rendering Benchmarks
// ============================================================================

fn bench_formatters(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatters");
    group.throughput(Throughput::Elements(1));

    let text = sink_logger(LogLevel::Info);
    let json = Logger::with_options([
        with_output(Sink::new(io::sink())),
        with_formatter(JsonFormatter::new()),
    ]);
    let context = LogContext::new()
        .with_field("user_id", "12345")
        .with_field("attempts", 3);

    group.bench_function("text_template", |b| {
        b.iter(|| text.infof("request {} took {}ms", &[&black_box("/health"), &black_box(12)]));
    });

    group.bench_function("json_template", |b| {
        b.iter(|| json.infof("request {} took {}ms", &[&black_box("/health"), &black_box(12)]));
    });

    group.bench_function("json_with_context", |b| {
        b.iter(|| json.info_with_context(&context, &[&black_box("User logged in")]));
    });

    group.bench_function("text_direct", |b| {
        let formatter = TextFormatter::new();
        let entry = Entry::from_message(LogLevel::Info, "direct render");
        let mut buf = Vec::with_capacity(256);
        b.iter(|| {
            buf.clear();
            formatter.format(black_box(&entry), &mut buf);
            black_box(buf.len())
        });
    });

    group.bench_function("json_direct", |b| {
        let formatter = JsonFormatter::new();
        let entry = Entry::from_message(LogLevel::Info, "direct render");
        let mut buf = Vec::with_capacity(256);
        b.iter(|| {
            buf.clear();
            formatter.format(black_box(&entry), &mut buf);
            black_box(buf.len())
        });
    });

    group.finish();
}

// ============================================================================
// Concurrency Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    for threads in [2usize, 4, 8] {
        let calls = 1000usize;
        group.throughput(Throughput::Elements((threads * calls) as u64));
        group.bench_function(format!("{}_threads", threads), |b| {
            let logger = Arc::new(sink_logger(LogLevel::Info));
            b.iter(|| {
                let handles: Vec<_> = (0..threads)
                    .map(|t| {
                        let logger = Arc::clone(&logger);
                        std::thread::spawn(move || {
                            for i in 0..calls {
                                logger.infof("thread {} call {}", &[&t, &i]);
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    handle.join().expect("Thread panicked");
                }
            });
        });
    }

    group.finish();
}

// ============================================================================
// Reconfiguration Benchmarks
// ============================================================================

fn bench_set_options(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_options");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger(LogLevel::Info);

    group.bench_function("toggle_level", |b| {
        let mut debug = false;
        b.iter(|| {
            debug = !debug;
            let level = if debug { LogLevel::Debug } else { LogLevel::Info };
            logger.set_options([with_level(level)]);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_logger_creation,
    bench_level_filtering,
    bench_formatters,
    bench_concurrent_logging,
    bench_set_options,
);

criterion_main!(benches);
