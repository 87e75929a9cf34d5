//! Formatter trait: the rendering strategy between an entry and its sink

use super::log_entry::Entry;

/// Renders one entry into one self-contained unit of bytes.
///
/// Implementations append to `buf` and must not fail: values that cannot be
/// represented in the target format degrade to a best-effort string form.
pub trait Formatter: Send + Sync {
    fn format(&self, entry: &Entry, buf: &mut Vec<u8>);
    fn name(&self) -> &str;
}
