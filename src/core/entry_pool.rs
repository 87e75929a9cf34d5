//! Bounded pool of reusable entries
//!
//! The free list is a bounded `crossbeam-channel`: acquiring is a `try_recv`,
//! releasing is a `try_send`. Both ends are lock-free and an entry lives in
//! exactly one place at a time, so two threads can never hold the same entry.

use super::log_entry::Entry;
use crossbeam_channel::{bounded, Receiver, Sender};
use std::ops::{Deref, DerefMut};

/// Default number of idle entries a pool retains
pub const DEFAULT_POOL_CAPACITY: usize = 64;

pub struct EntryPool {
    capacity: usize,
    sender: Sender<Entry>,
    receiver: Receiver<Entry>,
}

impl EntryPool {
    /// Create a pool retaining at most `capacity` idle entries (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (sender, receiver) = bounded(capacity);
        Self {
            capacity,
            sender,
            receiver,
        }
    }

    /// Take an idle entry, constructing a fresh one when the pool is empty.
    ///
    /// The returned guard gives the entry back on drop, including during a
    /// panic unwind.
    pub fn acquire(&self) -> PooledEntry<'_> {
        let (entry, reused) = match self.receiver.try_recv() {
            Ok(entry) => (entry, true),
            Err(_) => (Entry::new(), false),
        };
        PooledEntry {
            entry: Some(entry),
            pool: self,
            reused,
        }
    }

    /// Reset `entry` and keep it for reuse; dropped if the pool is full.
    pub fn release(&self, mut entry: Entry) {
        entry.reset();
        let _ = self.sender.try_send(entry);
    }

    /// Number of idle entries currently held
    pub fn idle(&self) -> usize {
        self.receiver.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for EntryPool {
    fn default() -> Self {
        Self::new(DEFAULT_POOL_CAPACITY)
    }
}

impl std::fmt::Debug for EntryPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntryPool")
            .field("capacity", &self.capacity)
            .field("idle", &self.idle())
            .finish()
    }
}

/// Exclusive handle to a pooled entry
pub struct PooledEntry<'a> {
    entry: Option<Entry>,
    pool: &'a EntryPool,
    reused: bool,
}

impl PooledEntry<'_> {
    /// Whether the entry came from the pool rather than being freshly built
    pub fn was_reused(&self) -> bool {
        self.reused
    }
}

impl Deref for PooledEntry<'_> {
    type Target = Entry;

    fn deref(&self) -> &Entry {
        self.entry.as_ref().expect("entry is only taken on drop")
    }
}

impl DerefMut for PooledEntry<'_> {
    fn deref_mut(&mut self) -> &mut Entry {
        self.entry.as_mut().expect("entry is only taken on drop")
    }
}

impl Drop for PooledEntry<'_> {
    fn drop(&mut self) {
        if let Some(entry) = self.entry.take() {
            self.pool.release(entry);
        }
    }
}
