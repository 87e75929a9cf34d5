//! Core logger types and traits

pub mod config;
pub mod entry_pool;
pub mod error;
pub mod formatter;
pub mod log_context;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod timestamp;

pub use config::{
    with_formatter, with_level, with_output, with_report_caller, with_std_level, LogOption,
    LoggerConfig,
};
pub use entry_pool::{EntryPool, PooledEntry, DEFAULT_POOL_CAPACITY};
pub use error::{LoggerError, Result};
pub use formatter::Formatter;
pub use log_context::{FieldValue, LogContext};
pub use log_entry::Entry;
pub use log_level::LogLevel;
pub use logger::{LogWriter, Logger, LoggerBuilder};
pub use metrics::{LoggerMetrics, MetricsSnapshot};
pub use timestamp::TimestampFormat;
