//! Human-readable single-line formatter

use crate::core::{Entry, Formatter, TimestampFormat};
use std::io::Write;

/// Renders `<timestamp> [<LEVEL>] [<file:line> ]<message>[ key=value...]\n`.
///
/// Newlines, carriage returns and tabs inside the message are escaped, so every
/// call produces exactly one line and cannot forge additional entries.
#[derive(Debug, Clone)]
pub struct TextFormatter {
    timestamp_format: Option<TimestampFormat>,
    #[cfg_attr(not(feature = "color"), allow(dead_code))]
    use_colors: bool,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self {
            timestamp_format: Some(TimestampFormat::default()),
            use_colors: false,
        }
    }

    /// Set the timestamp format
    ///
    /// # Examples
    ///
    /// ```
    /// use minlog::{TextFormatter, TimestampFormat};
    ///
    /// let formatter = TextFormatter::new()
    ///     .with_timestamp_format(TimestampFormat::Rfc3339);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = Some(format);
        self
    }

    /// Omit the timestamp, leaving `[LEVEL] message`
    #[must_use]
    pub fn without_timestamp(mut self) -> Self {
        self.timestamp_format = None;
        self
    }

    /// Colour the level tag with ANSI escapes (for terminals).
    ///
    /// Has no effect when the `color` feature is disabled.
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }
}

impl TextFormatter {
    #[cfg(feature = "color")]
    fn push_level(&self, line: &mut String, entry: &Entry) {
        use colored::Colorize;

        let level = entry.level();
        if self.use_colors {
            line.push_str(&level.to_str().color(level.color_code()).to_string());
        } else {
            line.push_str(level.to_str());
        }
    }

    #[cfg(not(feature = "color"))]
    fn push_level(&self, line: &mut String, entry: &Entry) {
        line.push_str(entry.level().to_str());
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for TextFormatter {
    fn format(&self, entry: &Entry, buf: &mut Vec<u8>) {
        let mut line = String::with_capacity(64);

        if let Some(ref format) = self.timestamp_format {
            line.push_str(&format.format(entry.timestamp()));
            line.push(' ');
        }

        line.push('[');
        self.push_level(&mut line, entry);
        line.push_str("] ");

        if let Some(caller) = entry.caller() {
            line.push_str(&format!("{}:{} ", caller.file(), caller.line()));
        }

        let mut message = String::new();
        entry.write_message(&mut message);
        push_escaped(&mut line, &message);

        let context = entry.context();
        if !context.is_empty() {
            line.push(' ');
            push_escaped(&mut line, &context.to_string());
        }

        line.push('\n');
        // Writing into a Vec cannot fail.
        let _ = buf.write_all(line.as_bytes());
    }

    fn name(&self) -> &str {
        "text"
    }
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogContext, LogLevel};
    use chrono::{TimeZone, Utc};

    fn render(formatter: &TextFormatter, entry: &Entry) -> String {
        let mut buf = Vec::new();
        formatter.format(entry, &mut buf);
        String::from_utf8(buf).expect("text output is UTF-8")
    }

    #[test]
    fn test_layout() {
        let timestamp = Utc
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime");
        let entry = Entry::from_message(LogLevel::Info, "ready").with_timestamp(timestamp);

        assert_eq!(
            render(&TextFormatter::new(), &entry),
            "2025-01-08T10:30:45.000Z [INFO] ready\n"
        );
        assert_eq!(
            render(&TextFormatter::new().without_timestamp(), &entry),
            "[INFO] ready\n"
        );
    }

    #[test]
    fn test_unrenderable_timestamp_pattern_still_logs() {
        let timestamp = Utc
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime");
        let entry = Entry::from_message(LogLevel::Info, "hello").with_timestamp(timestamp);
        let formatter =
            TextFormatter::new().with_timestamp_format(TimestampFormat::Custom("%Q".into()));

        assert_eq!(
            render(&formatter, &entry),
            "2025-01-08T10:30:45.000Z [INFO] hello\n"
        );
    }

    #[test]
    fn test_empty_message_keeps_metadata() {
        let entry = Entry::from_message(LogLevel::Warn, "");
        let line = render(&TextFormatter::new(), &entry);
        assert!(line.ends_with("[WARN] \n"));
    }

    #[test]
    fn test_injection_is_escaped() {
        let entry = Entry::from_message(LogLevel::Info, "login ok\nERROR fake entry\ttab");
        let line = render(&TextFormatter::new().without_timestamp(), &entry);

        assert_eq!(line, "[INFO] login ok\\nERROR fake entry\\ttab\n");
        assert_eq!(line.lines().count(), 1);
    }

    #[test]
    fn test_context_fields_appended() {
        let context = LogContext::new()
            .with_field("user_id", 123)
            .with_field("action", "login");
        let entry = Entry::from_message(LogLevel::Info, "User logged in").with_context(context);

        assert_eq!(
            render(&TextFormatter::new().without_timestamp(), &entry),
            "[INFO] User logged in user_id=123 action=login\n"
        );
    }

    #[cfg(feature = "color")]
    #[test]
    fn test_colors_wrap_level() {
        colored::control::set_override(true);
        let entry = Entry::from_message(LogLevel::Error, "boom");
        let line = render(&TextFormatter::new().without_timestamp().with_colors(true), &entry);
        colored::control::unset_override();

        assert!(line.contains("\u{1b}["));
        assert!(line.contains("ERROR"));
        assert!(line.ends_with("boom\n"));
    }
}
