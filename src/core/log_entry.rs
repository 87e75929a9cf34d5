//! Log entry: the reusable unit of work behind one log call

use super::log_context::LogContext;
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use std::fmt::{self, Write as _};
use std::panic::Location;

/// Render buffers and argument strings larger than this are released on reset
/// instead of being kept in the pool.
const MAX_RETAINED_BUFFER: usize = 64 * 1024;

/// Argument slots kept across reuse; slots past this are freed on reset.
const MAX_RETAINED_ARGS: usize = 32;

/// How the message is built from the captured arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MessageStyle {
    /// Arguments concatenated with no separator
    Concat,
    /// `{}` placeholders in the template replaced positionally
    Template,
}

/// One log call's data.
///
/// Entries are handed out by an [`EntryPool`](super::entry_pool::EntryPool),
/// populated, rendered by a [`Formatter`](super::formatter::Formatter), and
/// reset before going back to the pool. Argument strings and the render buffer
/// keep their allocations across reuse; their contents never do.
#[derive(Debug)]
pub struct Entry {
    level: LogLevel,
    style: MessageStyle,
    template: String,
    args: Vec<String>,
    arg_count: usize,
    timestamp: DateTime<Utc>,
    caller: Option<&'static Location<'static>>,
    context: LogContext,
    pub(crate) buffer: Vec<u8>,
}

impl Entry {
    pub fn new() -> Self {
        Self {
            level: LogLevel::Info,
            style: MessageStyle::Concat,
            template: String::new(),
            args: Vec::new(),
            arg_count: 0,
            timestamp: Utc::now(),
            caller: None,
            context: LogContext::new(),
            buffer: Vec::new(),
        }
    }

    /// Standalone entry holding a single pre-rendered message.
    ///
    /// Mostly useful for exercising a [`Formatter`](super::formatter::Formatter)
    /// directly.
    pub fn from_message(level: LogLevel, message: impl fmt::Display) -> Self {
        let mut entry = Self::new();
        entry.record(level, None, &[&message]);
        entry
    }

    #[must_use]
    pub fn with_context(mut self, context: LogContext) -> Self {
        self.context = context;
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Populate from a plain (`template == None`) or templated call.
    pub(crate) fn record(
        &mut self,
        level: LogLevel,
        template: Option<&str>,
        args: &[&dyn fmt::Display],
    ) {
        self.level = level;
        self.timestamp = Utc::now();
        self.arg_count = 0;
        self.template.clear();
        match template {
            Some(template) => {
                self.style = MessageStyle::Template;
                self.template.push_str(template);
            }
            None => self.style = MessageStyle::Concat,
        }
        for arg in args {
            self.push_arg(|slot| write!(slot, "{}", arg));
        }
    }

    /// Populate from already-captured format arguments (the macro path).
    pub(crate) fn record_fmt(&mut self, level: LogLevel, args: fmt::Arguments<'_>) {
        self.level = level;
        self.timestamp = Utc::now();
        self.style = MessageStyle::Concat;
        self.arg_count = 0;
        self.template.clear();
        self.push_arg(|slot| slot.write_fmt(args));
    }

    pub(crate) fn set_caller(&mut self, caller: Option<&'static Location<'static>>) {
        self.caller = caller;
    }

    pub(crate) fn set_context(&mut self, context: &LogContext) {
        self.context.clone_from(context);
    }

    fn push_arg<F>(&mut self, render: F)
    where
        F: FnOnce(&mut String) -> fmt::Result,
    {
        if self.arg_count == self.args.len() {
            self.args.push(String::new());
        }
        let slot = &mut self.args[self.arg_count];
        slot.clear();
        // A failing Display impl degrades to a marker instead of an error.
        if render(slot).is_err() {
            slot.clear();
            slot.push_str("<unformattable>");
        }
        self.arg_count += 1;
    }

    /// Clear every captured value, keeping allocations for reuse.
    pub fn reset(&mut self) {
        self.level = LogLevel::Info;
        self.style = MessageStyle::Concat;
        clear_bounded(&mut self.template);
        if self.args.len() > MAX_RETAINED_ARGS {
            self.args.truncate(MAX_RETAINED_ARGS);
            self.args.shrink_to(MAX_RETAINED_ARGS);
        }
        for slot in &mut self.args {
            clear_bounded(slot);
        }
        self.arg_count = 0;
        self.caller = None;
        self.context.clear();
        if self.buffer.capacity() > MAX_RETAINED_BUFFER {
            self.buffer = Vec::new();
        } else {
            self.buffer.clear();
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn timestamp(&self) -> &DateTime<Utc> {
        &self.timestamp
    }

    /// Template of a formatted call, `None` for plain calls.
    pub fn template(&self) -> Option<&str> {
        match self.style {
            MessageStyle::Template => Some(&self.template),
            MessageStyle::Concat => None,
        }
    }

    /// Arguments rendered to text, in call order.
    pub fn args(&self) -> &[String] {
        &self.args[..self.arg_count]
    }

    pub fn caller(&self) -> Option<&'static Location<'static>> {
        self.caller
    }

    pub fn context(&self) -> &LogContext {
        &self.context
    }

    /// Append the rendered message to `out`.
    ///
    /// Plain calls concatenate their arguments. Templated calls replace each
    /// `{}` with the next argument, treat `{{` and `}}` as literal braces,
    /// render a placeholder without a matching argument as `{?}`, and append
    /// surplus arguments separated by single spaces.
    pub fn write_message(&self, out: &mut String) {
        match self.style {
            MessageStyle::Concat => {
                for arg in self.args() {
                    out.push_str(arg);
                }
            }
            MessageStyle::Template => self.write_template(out),
        }
    }

    pub fn message(&self) -> String {
        let mut out = String::new();
        self.write_message(&mut out);
        out
    }

    fn write_template(&self, out: &mut String) {
        let mut args = self.args().iter();
        let mut rest = self.template.as_str();

        while let Some(pos) = rest.find(|c: char| c == '{' || c == '}') {
            out.push_str(&rest[..pos]);
            let tail = &rest[pos..];
            if tail.starts_with("{{") {
                out.push('{');
                rest = &tail[2..];
            } else if tail.starts_with("}}") {
                out.push('}');
                rest = &tail[2..];
            } else if tail.starts_with("{}") {
                out.push_str(args.next().map_or("{?}", String::as_str));
                rest = &tail[2..];
            } else {
                out.push_str(&tail[..1]);
                rest = &tail[1..];
            }
        }
        out.push_str(rest);

        for extra in args {
            out.push(' ');
            out.push_str(extra);
        }
    }
}

fn clear_bounded(text: &mut String) {
    if text.capacity() > MAX_RETAINED_BUFFER {
        *text = String::new();
    } else {
        text.clear();
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self::new()
    }
}
