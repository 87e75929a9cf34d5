//! Tests for the process-wide default logger
//!
//! The default logger is shared by the whole test binary, so everything that
//! mutates it lives in a single test.

use std::io::Write;

use minlog::prelude::*;

#[test]
fn test_default_logger_forwarding_and_reconfiguration() {
    let memory = MemorySink::new();

    // Stock configuration before any options are applied.
    assert_eq!(minlog::default_logger().level(), LogLevel::Info);
    assert_eq!(minlog::default_logger().config().formatter.name(), "text");

    minlog::set_options([
        with_output(memory.clone()),
        with_formatter(TextFormatter::new().without_timestamp()),
    ]);

    minlog::debug(&[&"hidden"]);
    assert!(memory.is_empty());

    minlog::set_options([with_level(LogLevel::Debug)]);
    minlog::debug(&[&"x"]);
    minlog::infof("user {} logged in", &[&42]);
    minlog::warn(&[&"disk at ", &91, &"%"]);
    minlog::errorf("{} failed", &[&"backup"]);

    // The default writer logs at min_level when no std level is configured.
    writeln!(minlog::writer(), "from a component").unwrap();

    minlog::set_options([with_std_level(LogLevel::Error)]);
    minlog::writer().write_all(b"escalated\n").unwrap();

    assert_eq!(
        memory.lines(),
        vec![
            "[DEBUG] x",
            "[INFO] user 42 logged in",
            "[WARN] disk at 91%",
            "[ERROR] backup failed",
            "[DEBUG] from a component",
            "[ERROR] escalated",
        ]
    );

    let result = std::panic::catch_unwind(|| {
        minlog::panicf("bad {}", &[&"state"]);
    });
    assert!(result.is_err());
    assert_eq!(memory.lines().last().unwrap(), "[PANIC] bad state");

    assert!(std::ptr::eq(minlog::default_logger(), minlog::default_logger()));
}
