//! Basic logger usage example
//!
//! Demonstrates the default logger, runtime reconfiguration, and a custom
//! JSON logger writing to a file.
//!
//! Run with: cargo run --example basic_usage

use minlog::prelude::*;
use minlog::{info, warn};
use std::fs::OpenOptions;
use std::io::Write;

fn main() -> Result<()> {
    // 1. The default logger: Info level, text to stderr.
    minlog::info(&[&"hello from the default logger"]);
    minlog::debug(&[&"not shown, Debug is below Info"]);

    // 2. Lower the threshold at runtime.
    minlog::set_options([with_level(LogLevel::Debug)]);
    minlog::debug(&[&"now debug messages are visible"]);
    minlog::infof("{} + {} = {}", &[&1, &2, &3]);

    // 3. A custom logger writing JSON to a file the caller opens.
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("test.log")?;

    let logger = Logger::with_options([
        with_level(LogLevel::Info),
        with_output(Sink::named("test.log", file)),
        with_formatter(JsonFormatter::new()),
        with_report_caller(true),
    ]);
    logger.info(&[&"custom log with json formatter"]);

    let context = LogContext::new()
        .with_field("user_id", "12345")
        .with_field("attempts", 3);
    logger.info_with_context(&context, &[&"user logged in"]);

    // 4. format!-style macros.
    info!(logger, "processed {} items in {}ms", 100, 42);
    warn!(logger, "cache hit ratio {:.1}%", 87.5);

    // 5. Any component that writes bytes can log through the logger.
    let mut out = logger.writer();
    writeln!(out, "line from a third-party component")?;

    logger.flush()?;

    let metrics = logger.metrics().snapshot();
    println!("metrics: {}", serde_json::to_string(&metrics).unwrap_or_default());
    Ok(())
}
