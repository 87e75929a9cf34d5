//! Logging macros with `format!`-style arguments.
//!
//! The level is checked before the arguments are evaluated, so a suppressed
//! call costs one atomic load.
//!
//! # Examples
//!
//! ```
//! use minlog::prelude::*;
//! use minlog::info;
//!
//! let memory = MemorySink::new();
//! let logger = Logger::with_options([with_output(memory.clone())]);
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! assert!(memory.contents().contains("Server listening on port 8080"));
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use minlog::prelude::*;
/// # let logger = Logger::with_options([with_output(MemorySink::new())]);
/// use minlog::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        let level = $level;
        if logger.enabled(level) {
            logger.log_args(level, format_args!($($arg)+));
        }
    }};
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use minlog::prelude::*;
/// # let logger = Logger::with_options([with_output(MemorySink::new())]);
/// use minlog::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log at panic level, then unwind with the message.
///
/// # Examples
///
/// ```should_panic
/// # use minlog::prelude::*;
/// # let logger = Logger::with_options([with_output(MemorySink::new())]);
/// use minlog::log_panic;
/// log_panic!(logger, "index {} out of range", 7);
/// ```
#[macro_export]
macro_rules! log_panic {
    ($logger:expr, $($arg:tt)+) => {
        (&$logger).panic_args(format_args!($($arg)+))
    };
}

/// Log at fatal level, then exit the process with status 1.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        (&$logger).fatal_args(format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, Logger};
    use crate::formatters::TextFormatter;
    use crate::sinks::MemorySink;

    fn capture(level: LogLevel) -> (Logger, MemorySink) {
        let memory = MemorySink::new();
        let logger = Logger::builder()
            .min_level(level)
            .formatter(TextFormatter::new().without_timestamp())
            .output(memory.clone())
            .build();
        (logger, memory)
    }

    #[test]
    fn test_level_macros() {
        let (logger, memory) = capture(LogLevel::Debug);
        debug!(logger, "Count: {}", 5);
        info!(logger, "Items: {}", 100);
        warn!(logger, "Retry {} of {}", 1, 3);
        error!(logger, "Code: {}", 500);
        log!(logger, LogLevel::Info, "plain");

        assert_eq!(
            memory.lines(),
            vec![
                "[DEBUG] Count: 5",
                "[INFO] Items: 100",
                "[WARN] Retry 1 of 3",
                "[ERROR] Code: 500",
                "[INFO] plain",
            ]
        );
    }

    #[test]
    fn test_suppressed_macro_skips_argument_evaluation() {
        let (logger, memory) = capture(LogLevel::Warn);
        let mut evaluated = false;
        debug!(logger, "{}", {
            evaluated = true;
            "expensive"
        });

        assert!(!evaluated);
        assert!(memory.is_empty());
    }

    #[test]
    fn test_macro_accepts_reference() {
        let (logger, memory) = capture(LogLevel::Info);
        let shared = &logger;
        info!(shared, "via reference");
        assert_eq!(memory.lines(), vec!["[INFO] via reference"]);
    }

    #[test]
    fn test_log_panic_macro() {
        let (logger, memory) = capture(LogLevel::Info);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            log_panic!(logger, "bad state {}", 9);
        }));

        assert!(result.is_err());
        assert_eq!(memory.lines(), vec!["[PANIC] bad state 9"]);
    }
}
