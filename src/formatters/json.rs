//! JSON formatter for structured logging

use crate::core::{Entry, Formatter, TimestampFormat};
use serde_json::{Map, Value};

pub const TIME_KEY: &str = "time";
pub const LEVEL_KEY: &str = "level";
pub const MESSAGE_KEY: &str = "message";
pub const CALLER_KEY: &str = "caller";

const BASIC_KEYS: [&str; 4] = [TIME_KEY, LEVEL_KEY, MESSAGE_KEY, CALLER_KEY];

/// Writes each entry as a single-line JSON object followed by `\n` (JSONL).
///
/// The basic fields are `time`, `level` and `message`, plus `caller` when
/// caller reporting is enabled; context fields are merged into the same
/// object. Context fields named like a basic key are dropped unless
/// `ignore_basic_fields` is set. With `ignore_basic_fields` only the context fields are emitted,
/// which lets the output nest inside a larger document without duplicating
/// metadata.
///
/// # Example
///
/// ```
/// use minlog::{Entry, Formatter, JsonFormatter, LogLevel};
///
/// let mut buf = Vec::new();
/// JsonFormatter::new().format(&Entry::from_message(LogLevel::Info, "ready"), &mut buf);
///
/// let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
/// assert_eq!(parsed["message"], "ready");
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    pub ignore_basic_fields: bool,
    pub timestamp_format: TimestampFormat,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit only caller-supplied context fields
    #[must_use]
    pub fn ignore_basic_fields(mut self, ignore: bool) -> Self {
        self.ignore_basic_fields = ignore;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    fn to_object(&self, entry: &Entry) -> Map<String, Value> {
        let mut object = Map::new();

        for (key, value) in entry.context().fields() {
            // Basic keys belong to the entry's own metadata.
            if !self.ignore_basic_fields && BASIC_KEYS.contains(&key) {
                continue;
            }
            object.insert(key.to_string(), value.to_json_value());
        }

        if !self.ignore_basic_fields {
            object.insert(
                TIME_KEY.to_string(),
                self.timestamp_format.to_json_value(entry.timestamp()),
            );
            object.insert(
                LEVEL_KEY.to_string(),
                Value::String(entry.level().to_str().to_string()),
            );
            object.insert(MESSAGE_KEY.to_string(), Value::String(entry.message()));
            if let Some(caller) = entry.caller() {
                object.insert(
                    CALLER_KEY.to_string(),
                    Value::String(format!("{}:{}", caller.file(), caller.line())),
                );
            }
        }

        object
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, entry: &Entry, buf: &mut Vec<u8>) {
        let start = buf.len();
        let object = Value::Object(self.to_object(entry));
        if serde_json::to_writer(&mut *buf, &object).is_err() {
            // Serializing a Value into memory does not fail in practice; keep
            // the output a valid object regardless.
            buf.truncate(start);
            buf.extend_from_slice(b"{}");
        }
        buf.push(b'\n');
    }

    fn name(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogContext, LogLevel};

    fn render(formatter: &JsonFormatter, entry: &Entry) -> (String, Value) {
        let mut buf = Vec::new();
        formatter.format(entry, &mut buf);
        let text = String::from_utf8(buf).expect("JSON output is UTF-8");
        let parsed = serde_json::from_str(text.trim_end()).expect("valid JSON object");
        (text, parsed)
    }

    #[test]
    fn test_basic_fields() {
        let entry = Entry::from_message(LogLevel::Info, "ready");
        let (text, parsed) = render(&JsonFormatter::new(), &entry);

        assert!(text.ends_with('\n'));
        assert_eq!(text.matches('\n').count(), 1);
        assert_eq!(parsed[LEVEL_KEY], "INFO");
        assert_eq!(parsed[MESSAGE_KEY], "ready");
        assert!(parsed[TIME_KEY].is_string());
        assert!(parsed.get(CALLER_KEY).is_none());
    }

    #[test]
    fn test_context_fields_merged() {
        let context = LogContext::new()
            .with_field("request_id", "abc-123")
            .with_field("latency_ms", 42);
        let entry = Entry::from_message(LogLevel::Info, "Request completed").with_context(context);
        let (_, parsed) = render(&JsonFormatter::new(), &entry);

        assert_eq!(parsed["request_id"], "abc-123");
        assert_eq!(parsed["latency_ms"], 42);
        assert_eq!(parsed[MESSAGE_KEY], "Request completed");
    }

    #[test]
    fn test_basic_fields_win_over_colliding_context() {
        let context = LogContext::new()
            .with_field("level", "DEBUG")
            .with_field("message", "forged")
            .with_field("time", 0)
            .with_field("caller", "forged.rs:1")
            .with_field("request_id", "abc-123");
        let entry = Entry::from_message(LogLevel::Error, "real").with_context(context);
        let (_, parsed) = render(&JsonFormatter::new(), &entry);

        assert_eq!(parsed[LEVEL_KEY], "ERROR");
        assert_eq!(parsed[MESSAGE_KEY], "real");
        assert!(parsed[TIME_KEY].is_string());
        assert!(parsed.get(CALLER_KEY).is_none());
        assert_eq!(parsed["request_id"], "abc-123");
    }

    #[test]
    fn test_colliding_context_kept_when_basic_fields_ignored() {
        let context = LogContext::new().with_field("level", "custom");
        let entry = Entry::from_message(LogLevel::Error, "hidden").with_context(context);
        let (_, parsed) = render(&JsonFormatter::new().ignore_basic_fields(true), &entry);

        assert_eq!(parsed, serde_json::json!({ "level": "custom" }));
    }

    #[test]
    fn test_ignore_basic_fields() {
        let context = LogContext::new().with_field("user", "alice");
        let entry = Entry::from_message(LogLevel::Error, "hidden").with_context(context);
        let (_, parsed) = render(&JsonFormatter::new().ignore_basic_fields(true), &entry);

        assert_eq!(parsed, serde_json::json!({ "user": "alice" }));
    }

    #[test]
    fn test_ignore_basic_fields_without_context_is_empty_object() {
        let entry = Entry::from_message(LogLevel::Info, "nothing structured");
        let (text, parsed) = render(&JsonFormatter::new().ignore_basic_fields(true), &entry);

        assert_eq!(text, "{}\n");
        assert_eq!(parsed, serde_json::json!({}));
    }

    #[test]
    fn test_message_is_escaped() {
        let entry = Entry::from_message(LogLevel::Warn, "quote \" newline \n backslash \\");
        let (text, parsed) = render(&JsonFormatter::new(), &entry);

        assert_eq!(text.lines().count(), 1);
        assert_eq!(parsed[MESSAGE_KEY], "quote \" newline \n backslash \\");
    }

    #[test]
    fn test_numeric_timestamp() {
        let entry = Entry::from_message(LogLevel::Debug, "tick");
        let formatter = JsonFormatter::new().with_timestamp_format(TimestampFormat::UnixMillis);
        let (_, parsed) = render(&formatter, &entry);

        assert!(parsed[TIME_KEY].is_i64());
    }
}
