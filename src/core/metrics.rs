//! Per-logger counters
//!
//! What a logger did with the calls it received: rendered, suppressed by
//! level, lost to sink failures, or served by a freshly built entry because
//! the pool was empty.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Live counters owned by one [`Logger`](crate::Logger).
///
/// ```
/// use minlog::prelude::*;
///
/// let logger = Logger::with_options([with_output(MemorySink::new())]);
/// logger.info(&[&"kept"]);
/// logger.debug(&[&"dropped"]);
///
/// let snapshot = logger.metrics().snapshot();
/// assert_eq!(snapshot.logged, 1);
/// assert_eq!(snapshot.suppressed, 1);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    logged: AtomicU64,
    suppressed: AtomicU64,
    write_failures: AtomicU64,
    pool_misses: AtomicU64,
}

/// Point-in-time copy of [`LoggerMetrics`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    /// Units rendered and accepted by the sink
    pub logged: u64,
    /// Calls below the minimum level
    pub suppressed: u64,
    /// Units the sink refused
    pub write_failures: u64,
    /// Calls that found the entry pool empty
    pub pool_misses: u64,
}

impl MetricsSnapshot {
    /// Sink failures as a percentage of attempted writes (0.0 - 100.0)
    pub fn failure_rate(&self) -> f64 {
        let attempted = self.logged + self.write_failures;
        if attempted == 0 {
            return 0.0;
        }
        self.write_failures as f64 * 100.0 / attempted as f64
    }
}

fn bump(counter: &AtomicU64) -> u64 {
    counter.fetch_add(1, Ordering::Relaxed)
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            logged: AtomicU64::new(0),
            suppressed: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            pool_misses: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn total_logged(&self) -> u64 {
        self.logged.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn suppressed_count(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn pool_misses(&self) -> u64 {
        self.pool_misses.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            logged: self.total_logged(),
            suppressed: self.suppressed_count(),
            write_failures: self.write_failures(),
            pool_misses: self.pool_misses(),
        }
    }

    /// Zero every counter
    pub fn reset(&self) {
        for counter in [
            &self.logged,
            &self.suppressed,
            &self.write_failures,
            &self.pool_misses,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }

    pub(crate) fn record_logged(&self) -> u64 {
        bump(&self.logged)
    }

    pub(crate) fn record_suppressed(&self) -> u64 {
        bump(&self.suppressed)
    }

    /// Returns the count before this failure.
    pub(crate) fn record_write_failure(&self) -> u64 {
        bump(&self.write_failures)
    }

    pub(crate) fn record_pool_miss(&self) -> u64 {
        bump(&self.pool_misses)
    }
}
