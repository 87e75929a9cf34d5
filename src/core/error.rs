//! Error types for the logging engine
//!
//! Logging calls themselves never return errors. These surface from sink
//! management (`Sink::write_all`, `Logger::flush`) and from parsing level names.

use std::io;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A sink rejected a write or flush
    #[error("{action} sink '{sink}' failed: {source}")]
    Sink {
        sink: String,
        action: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Level name that does not map to any severity
    #[error("unknown log level '{0}' (expected DEBUG, INFO, WARN, ERROR, PANIC or FATAL)")]
    InvalidLevel(String),
}

impl LoggerError {
    pub(crate) fn sink_write(sink: &str, source: io::Error) -> Self {
        LoggerError::Sink {
            sink: sink.to_string(),
            action: "writing to",
            source,
        }
    }

    pub(crate) fn sink_flush(sink: &str, source: io::Error) -> Self {
        LoggerError::Sink {
            sink: sink.to_string(),
            action: "flushing",
            source,
        }
    }

    pub(crate) fn invalid_level(name: &str) -> Self {
        LoggerError::InvalidLevel(name.to_string())
    }

    /// The underlying IO error kind, when there is one
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            LoggerError::Sink { source, .. } | LoggerError::Io(source) => Some(source.kind()),
            LoggerError::InvalidLevel(_) => None,
        }
    }
}
