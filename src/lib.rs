//! # minlog
//!
//! A leveled, synchronous logging engine with swappable output shape and
//! destination.
//!
//! ## Features
//!
//! - **Level gating**: calls below the minimum level cost one atomic load
//! - **Pluggable formatters**: single-line text or one JSON object per call
//! - **Any sink**: anything implementing `std::io::Write`
//! - **Entry pooling**: per-call buffers are recycled instead of reallocated
//! - **Runtime reconfiguration**: `set_options` swaps configuration atomically
//! - **Default logger**: package-level functions backed by a lazy singleton
//!
//! Level names render in uppercase (`DEBUG`, `INFO`, `WARN`, `ERROR`, `PANIC`,
//! `FATAL`) in both text and JSON output. Parsing accepts any letter case and
//! the `WARNING` alias, so `"Info".parse::<LogLevel>()` yields `LogLevel::Info`.
//!
//! ```
//! use minlog::prelude::*;
//!
//! let memory = MemorySink::new();
//! let logger = Logger::with_options([
//!     with_level(LogLevel::Debug),
//!     with_output(memory.clone()),
//!     with_formatter(JsonFormatter::new()),
//! ]);
//!
//! logger.info(&[&"ready"]);
//!
//! let line: serde_json::Value = serde_json::from_str(&memory.lines()[0]).unwrap();
//! assert_eq!(line["level"], "INFO");
//! assert_eq!(line["message"], "ready");
//! ```

pub mod core;
pub mod formatters;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        with_formatter, with_level, with_output, with_report_caller, with_std_level, Entry,
        FieldValue, Formatter, LogContext, LogLevel, LogOption, LogWriter, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, LoggerMetrics, MetricsSnapshot, Result, TimestampFormat,
    };
    pub use crate::formatters::{JsonFormatter, TextFormatter};
    pub use crate::global::default_logger;
    pub use crate::sinks::{MemorySink, Sink};
}

pub use crate::core::{
    with_formatter, with_level, with_output, with_report_caller, with_std_level, Entry,
    EntryPool, FieldValue, Formatter, LogContext, LogLevel, LogOption, LogWriter, Logger,
    LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, MetricsSnapshot, PooledEntry, Result,
    TimestampFormat, DEFAULT_POOL_CAPACITY,
};
pub use formatters::{JsonFormatter, TextFormatter};
pub use global::{
    debug, debugf, default_logger, error, errorf, fatal, fatalf, info, infof, panic, panicf,
    set_options, warn, warnf, writer,
};
pub use sinks::{MemorySink, Sink};
