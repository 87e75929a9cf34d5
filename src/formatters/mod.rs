//! Formatter implementations

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

// Re-export the trait next to its implementations
pub use crate::core::Formatter;
