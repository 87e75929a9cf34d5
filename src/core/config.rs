//! Logger configuration and the options that mutate it

use super::formatter::Formatter;
use super::log_level::LogLevel;
use crate::formatters::TextFormatter;
use crate::sinks::Sink;
use std::fmt;
use std::sync::Arc;

/// The mutable state governing a logger: threshold, rendering, destination.
///
/// A configuration always holds a formatter and a sink. Loggers publish it
/// as an immutable snapshot, so a log call sees either every field of an
/// update or none of them.
#[derive(Clone)]
pub struct LoggerConfig {
    pub min_level: LogLevel,
    /// Level used for bytes written through the logger's `Write` adapter;
    /// `None` means `min_level`.
    pub std_level: Option<LogLevel>,
    pub formatter: Arc<dyn Formatter>,
    pub output: Sink,
    pub report_caller: bool,
}

impl LoggerConfig {
    /// Level applied to bytes written through the `Write` adapter
    pub fn effective_std_level(&self) -> LogLevel {
        self.std_level.unwrap_or(self.min_level)
    }

    /// Apply `options` in order; later options win on the same field.
    pub fn apply<I>(&mut self, options: I)
    where
        I: IntoIterator<Item = LogOption>,
    {
        for option in options {
            option.apply(self);
        }
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            std_level: None,
            formatter: Arc::new(TextFormatter::new()),
            output: Sink::stderr(),
            report_caller: false,
        }
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("min_level", &self.min_level)
            .field("std_level", &self.std_level)
            .field("formatter", &self.formatter.name())
            .field("output", &self.output)
            .field("report_caller", &self.report_caller)
            .finish()
    }
}

/// A single configuration mutator.
///
/// Every variant replaces one field with a valid value, so no sequence of
/// options can leave a configuration without a formatter or sink.
#[derive(Clone)]
pub enum LogOption {
    Level(LogLevel),
    StdLevel(LogLevel),
    Output(Sink),
    Formatter(Arc<dyn Formatter>),
    ReportCaller(bool),
}

impl LogOption {
    pub fn apply(self, config: &mut LoggerConfig) {
        match self {
            LogOption::Level(level) => config.min_level = level,
            LogOption::StdLevel(level) => config.std_level = Some(level),
            LogOption::Output(sink) => config.output = sink,
            LogOption::Formatter(formatter) => config.formatter = formatter,
            LogOption::ReportCaller(enabled) => config.report_caller = enabled,
        }
    }
}

impl fmt::Debug for LogOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogOption::Level(level) => f.debug_tuple("Level").field(level).finish(),
            LogOption::StdLevel(level) => f.debug_tuple("StdLevel").field(level).finish(),
            LogOption::Output(sink) => f.debug_tuple("Output").field(sink).finish(),
            LogOption::Formatter(formatter) => {
                f.debug_tuple("Formatter").field(&formatter.name()).finish()
            }
            LogOption::ReportCaller(enabled) => f.debug_tuple("ReportCaller").field(enabled).finish(),
        }
    }
}

/// Set the minimum severity that gets rendered
pub fn with_level(level: LogLevel) -> LogOption {
    LogOption::Level(level)
}

/// Set the level used by the logger's `Write` adapter
pub fn with_std_level(level: LogLevel) -> LogOption {
    LogOption::StdLevel(level)
}

/// Replace the destination
pub fn with_output(sink: impl Into<Sink>) -> LogOption {
    LogOption::Output(sink.into())
}

/// Replace the rendering strategy
pub fn with_formatter<F: Formatter + 'static>(formatter: F) -> LogOption {
    LogOption::Formatter(Arc::new(formatter))
}

/// Record the call site (`file:line`) of every log call
pub fn with_report_caller(enabled: bool) -> LogOption {
    LogOption::ReportCaller(enabled)
}
