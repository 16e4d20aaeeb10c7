//! Attempt Counter: total validation calls across the application's life
use std::sync::atomic::{AtomicU64, Ordering};

/// Counts every validation attempt.
///
/// One counter is usually shared (through `Arc`) by every validator in the
/// process. It only moves forward; `reset` is the single way back to zero.
#[derive(Debug, Default)]
pub struct AttemptCounter {
    total: AtomicU64,
}

impl AttemptCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a previously observed total
    pub fn starting_at(total: u64) -> Self {
        Self {
            total: AtomicU64::new(total),
        }
    }

    /// Record one attempt and return the new total
    pub fn increment(&self) -> u64 {
        self.total.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn get(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }

    /// Explicit external reset
    pub fn reset(&self) {
        self.total.store(0, Ordering::Relaxed);
    }
}
