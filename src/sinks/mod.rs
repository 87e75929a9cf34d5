//! Output sinks: the destinations that receive rendered bytes
//!
//! A [`Sink`] is a cheap, cloneable handle around anything implementing
//! [`std::io::Write`]. The engine never opens or closes files; callers open
//! them and hand them over with [`Sink::new`].

pub mod console;
pub mod memory;

pub use memory::MemorySink;

use crate::core::{LoggerError, Result};
use parking_lot::Mutex;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

/// Shared byte destination.
///
/// Each rendered unit is written with a single `write_all` under the sink's
/// lock, so concurrent log calls never interleave within one unit.
#[derive(Clone)]
pub struct Sink {
    name: Arc<str>,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Sink {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self::named("writer", writer)
    }

    /// Wrap `writer`, labelling it `name` in debug output
    pub fn named<W: Write + Send + 'static>(name: &str, writer: W) -> Self {
        Self {
            name: Arc::from(name),
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Write one rendered unit
    pub fn write_all(&self, bytes: &[u8]) -> Result<()> {
        let mut writer = self.writer.lock();
        writer
            .write_all(bytes)
            .map_err(|e| LoggerError::sink_write(&self.name, e))
    }

    pub fn flush(&self) -> Result<()> {
        let mut writer = self.writer.lock();
        writer
            .flush()
            .map_err(|e| LoggerError::sink_flush(&self.name, e))
    }

    /// Whether both handles point at the same underlying writer
    pub fn same_as(&self, other: &Sink) -> bool {
        Arc::ptr_eq(&self.writer, &other.writer)
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").field("name", &self.name).finish()
    }
}

impl From<MemorySink> for Sink {
    fn from(memory: MemorySink) -> Self {
        memory.sink()
    }
}
