//! Timestamp rendering used by the formatters

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// How a formatter renders an entry's timestamp
///
/// # Examples
///
/// ```
/// use minlog::TimestampFormat;
/// use chrono::Utc;
///
/// let stamp = TimestampFormat::Rfc3339Millis.format(&Utc::now());
/// assert!(stamp.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `2025-01-08T10:30:45Z`
    Rfc3339,

    /// `2025-01-08T10:30:45.123Z`
    #[default]
    Rfc3339Millis,

    /// `2025-01-08T10:30:45.123456Z`
    Rfc3339Micros,

    /// Milliseconds since the Unix epoch: `1736332245123`
    UnixMillis,

    /// Any strftime-compatible pattern, e.g. `%d/%b/%Y:%H:%M:%S %z`.
    ///
    /// A pattern chrono cannot render falls back to [`Rfc3339Millis`](Self::Rfc3339Millis).
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Rfc3339 => datetime.to_rfc3339_opts(SecondsFormat::Secs, true),
            TimestampFormat::Rfc3339Millis => datetime.to_rfc3339_opts(SecondsFormat::Millis, true),
            TimestampFormat::Rfc3339Micros => datetime.to_rfc3339_opts(SecondsFormat::Micros, true),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(pattern) => {
                let mut out = String::new();
                if write!(out, "{}", datetime.format(pattern)).is_err() {
                    return datetime.to_rfc3339_opts(SecondsFormat::Millis, true);
                }
                out
            }
        }
    }

    /// Timestamp as a JSON value: numeric formats become numbers
    #[must_use]
    pub fn to_json_value(&self, datetime: &DateTime<Utc>) -> serde_json::Value {
        match self {
            TimestampFormat::UnixMillis => {
                serde_json::Value::Number(datetime.timestamp_millis().into())
            }
            _ => serde_json::Value::String(self.format(datetime)),
        }
    }

    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, TimestampFormat::UnixMillis)
    }
}
