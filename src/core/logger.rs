//! Main logger implementation

use super::{
    config::{LogOption, LoggerConfig},
    entry_pool::{EntryPool, DEFAULT_POOL_CAPACITY},
    error::{LoggerError, Result},
    formatter::Formatter,
    log_context::LogContext,
    log_entry::Entry,
    log_level::LogLevel,
    metrics::LoggerMetrics,
};
use crate::sinks::Sink;
use parking_lot::RwLock;
use std::fmt;
use std::io;
use std::panic::Location;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Leveled logger: gates calls by severity, renders them through the
/// configured formatter, and writes the result to the configured sink.
///
/// Loggers are independent of each other and safe to share between threads.
/// The configuration is published as an immutable snapshot; [`set_options`]
/// swaps in a new one, so every call sees a consistent formatter/sink pair.
///
/// [`set_options`]: Logger::set_options
///
/// # Example
///
/// ```
/// use minlog::prelude::*;
///
/// let memory = MemorySink::new();
/// let logger = Logger::with_options([with_output(memory.clone())]);
///
/// logger.debug(&[&"hidden"]);
/// logger.infof("listening on port {}", &[&8080]);
///
/// assert_eq!(memory.lines().len(), 1);
/// assert!(memory.contents().contains("[INFO] listening on port 8080"));
/// ```
pub struct Logger {
    /// Mirror of `config.min_level` for the allocation-free gate
    min_level: AtomicU8,
    config: RwLock<Arc<LoggerConfig>>,
    pool: EntryPool,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Logger with the defaults: `Info`, text formatter, stderr
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(LoggerConfig::default(), DEFAULT_POOL_CAPACITY)
    }

    /// Logger with the defaults overridden by `options`, applied in order
    #[must_use]
    pub fn with_options<I>(options: I) -> Self
    where
        I: IntoIterator<Item = LogOption>,
    {
        let mut config = LoggerConfig::default();
        config.apply(options);
        Self::from_config(config, DEFAULT_POOL_CAPACITY)
    }

    fn from_config(config: LoggerConfig, pool_capacity: usize) -> Self {
        Self {
            min_level: AtomicU8::new(config.min_level.as_u8()),
            config: RwLock::new(Arc::new(config)),
            pool: EntryPool::new(pool_capacity),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Apply a batch of options under one lock acquisition.
    ///
    /// Later options override earlier ones touching the same field. In-flight
    /// calls on other threads keep the snapshot they already took.
    pub fn set_options<I>(&self, options: I)
    where
        I: IntoIterator<Item = LogOption>,
    {
        let mut current = self.config.write();
        let mut next = (**current).clone();
        next.apply(options);
        self.min_level.store(next.min_level.as_u8(), Ordering::Release);
        *current = Arc::new(next);
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> Arc<LoggerConfig> {
        self.config.read().clone()
    }

    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.min_level.load(Ordering::Acquire))
    }

    /// Whether a call at `level` would be rendered
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn pool(&self) -> &EntryPool {
        &self.pool
    }

    pub fn flush(&self) -> Result<()> {
        self.config().output.flush()
    }

    /// The logger as a generic byte destination (see [`LogWriter`])
    pub fn writer(&self) -> LogWriter<'_> {
        LogWriter { logger: self }
    }

    /// Single rendering path behind every call-site helper.
    fn dispatch<F>(&self, level: LogLevel, caller: Option<&'static Location<'static>>, populate: F)
    where
        F: FnOnce(&mut Entry),
    {
        if !self.enabled(level) {
            self.metrics.record_suppressed();
            return;
        }

        let mut entry = self.pool.acquire();
        if !entry.was_reused() {
            self.metrics.record_pool_miss();
        }
        populate(&mut *entry);

        let config = self.config();
        // The threshold may have moved since the atomic check.
        if level < config.min_level {
            self.metrics.record_suppressed();
            return;
        }
        if config.report_caller {
            entry.set_caller(caller);
        }

        let mut buffer = std::mem::take(&mut entry.buffer);
        config.formatter.format(&entry, &mut buffer);
        match config.output.write_all(&buffer) {
            Ok(()) => {
                self.metrics.record_logged();
            }
            Err(e) => self.report_write_failure(&e),
        }
        entry.buffer = buffer;
    }

    /// Sink failures never reach the caller; they are counted and reported on
    /// stderr on the first occurrence and every 1000th after that.
    fn report_write_failure(&self, err: &LoggerError) {
        let previous = self.metrics.record_write_failure();
        if previous == 0 || (previous + 1) % 1000 == 0 {
            eprintln!(
                "[LOGGER ERROR] {} ({} failed writes so far)",
                err,
                previous + 1
            );
        }
    }

    /// Log `args` concatenated with no separator
    #[track_caller]
    pub fn log(&self, level: LogLevel, args: &[&dyn fmt::Display]) {
        self.dispatch(level, Some(Location::caller()), |entry| {
            entry.record(level, None, args)
        });
    }

    /// Log `template` with each `{}` replaced by the next argument
    #[track_caller]
    pub fn logf(&self, level: LogLevel, template: &str, args: &[&dyn fmt::Display]) {
        self.dispatch(level, Some(Location::caller()), |entry| {
            entry.record(level, Some(template), args)
        });
    }

    /// Log pre-captured format arguments (used by the logging macros)
    #[track_caller]
    pub fn log_args(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        self.dispatch(level, Some(Location::caller()), |entry| {
            entry.record_fmt(level, args)
        });
    }

    /// Log with structured context fields
    #[track_caller]
    pub fn log_with_context(
        &self,
        level: LogLevel,
        context: &LogContext,
        args: &[&dyn fmt::Display],
    ) {
        self.dispatch(level, Some(Location::caller()), |entry| {
            entry.record(level, None, args);
            entry.set_context(context);
        });
    }

    #[inline]
    #[track_caller]
    pub fn info_with_context(&self, context: &LogContext, args: &[&dyn fmt::Display]) {
        self.log_with_context(LogLevel::Info, context, args);
    }

    #[inline]
    #[track_caller]
    pub fn error_with_context(&self, context: &LogContext, args: &[&dyn fmt::Display]) {
        self.log_with_context(LogLevel::Error, context, args);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, args: &[&dyn fmt::Display]) {
        self.log(LogLevel::Debug, args);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, args: &[&dyn fmt::Display]) {
        self.log(LogLevel::Info, args);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, args: &[&dyn fmt::Display]) {
        self.log(LogLevel::Warn, args);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, args: &[&dyn fmt::Display]) {
        self.log(LogLevel::Error, args);
    }

    /// Log at `Panic`, then unwind with the rendered message.
    ///
    /// The unwind happens even when the level is suppressed.
    #[track_caller]
    pub fn panic(&self, args: &[&dyn fmt::Display]) -> ! {
        self.log(LogLevel::Panic, args);
        panic!("{}", render_message(None, args));
    }

    /// Log at `Fatal`, flush the sink, and exit the process with status 1.
    #[track_caller]
    pub fn fatal(&self, args: &[&dyn fmt::Display]) -> ! {
        self.log(LogLevel::Fatal, args);
        self.exit()
    }

    #[inline]
    #[track_caller]
    pub fn debugf(&self, template: &str, args: &[&dyn fmt::Display]) {
        self.logf(LogLevel::Debug, template, args);
    }

    #[inline]
    #[track_caller]
    pub fn infof(&self, template: &str, args: &[&dyn fmt::Display]) {
        self.logf(LogLevel::Info, template, args);
    }

    #[inline]
    #[track_caller]
    pub fn warnf(&self, template: &str, args: &[&dyn fmt::Display]) {
        self.logf(LogLevel::Warn, template, args);
    }

    #[inline]
    #[track_caller]
    pub fn errorf(&self, template: &str, args: &[&dyn fmt::Display]) {
        self.logf(LogLevel::Error, template, args);
    }

    #[track_caller]
    pub fn panicf(&self, template: &str, args: &[&dyn fmt::Display]) -> ! {
        self.logf(LogLevel::Panic, template, args);
        panic!("{}", render_message(Some(template), args));
    }

    #[track_caller]
    pub fn fatalf(&self, template: &str, args: &[&dyn fmt::Display]) -> ! {
        self.logf(LogLevel::Fatal, template, args);
        self.exit()
    }

    /// `Panic` counterpart of [`log_args`](Logger::log_args)
    #[track_caller]
    pub fn panic_args(&self, args: fmt::Arguments<'_>) -> ! {
        self.log_args(LogLevel::Panic, args);
        panic!("{}", args);
    }

    /// `Fatal` counterpart of [`log_args`](Logger::log_args)
    #[track_caller]
    pub fn fatal_args(&self, args: fmt::Arguments<'_>) -> ! {
        self.log_args(LogLevel::Fatal, args);
        self.exit()
    }

    fn exit(&self) -> ! {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush before exit: {}", e);
        }
        std::process::exit(1)
    }

    /// Log raw bytes at the configured std level (the `Write` adapter path).
    fn write_bytes(&self, buf: &[u8]) {
        let level = self.config().effective_std_level();
        if !self.enabled(level) {
            self.metrics.record_suppressed();
            return;
        }
        // Borrowed view when the bytes are valid UTF-8.
        let text = String::from_utf8_lossy(buf);
        let text: &str = &text;
        let line = text
            .strip_suffix('\n')
            .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
            .unwrap_or(text);
        self.dispatch(level, None, |entry| entry.record(level, None, &[&line]));
    }
}

fn render_message(template: Option<&str>, args: &[&dyn fmt::Display]) -> String {
    let mut entry = Entry::new();
    entry.record(LogLevel::Panic, template, args);
    entry.message()
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config())
            .field("pool", &self.pool)
            .finish()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

/// A logger viewed as a generic byte destination.
///
/// Every `write` logs the bytes (minus one trailing newline) at the logger's
/// std level and reports the whole buffer as written. This is a best-effort
/// sink: it reports success even when the logger's own sink is failing, so
/// components logging through it are never broken by logging.
#[derive(Debug, Clone, Copy)]
pub struct LogWriter<'a> {
    logger: &'a Logger,
}

impl io::Write for LogWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.logger.write_bytes(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let _ = self.logger.flush();
        Ok(())
    }
}

impl io::Write for &Logger {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer().flush()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use minlog::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .formatter(JsonFormatter::new())
///     .output(MemorySink::new())
///     .pool_capacity(16)
///     .build();
///
/// assert_eq!(logger.level(), LogLevel::Debug);
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    pool_capacity: usize,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            pool_capacity: DEFAULT_POOL_CAPACITY,
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.config.min_level = level;
        self
    }

    /// Set the level used by the `Write` adapter
    #[must_use = "builder methods return a new value"]
    pub fn std_level(mut self, level: LogLevel) -> Self {
        self.config.std_level = Some(level);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.config.formatter = Arc::new(formatter);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn output(mut self, sink: impl Into<Sink>) -> Self {
        self.config.output = sink.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn report_caller(mut self, enabled: bool) -> Self {
        self.config.report_caller = enabled;
        self
    }

    /// Maximum number of idle entries kept for reuse (minimum 1)
    #[must_use = "builder methods return a new value"]
    pub fn pool_capacity(mut self, capacity: usize) -> Self {
        self.pool_capacity = capacity;
        self
    }

    /// Apply an arbitrary option
    #[must_use = "builder methods return a new value"]
    pub fn option(mut self, option: LogOption) -> Self {
        option.apply(&mut self.config);
        self
    }

    pub fn build(self) -> Logger {
        Logger::from_config(self.config, self.pool_capacity)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
