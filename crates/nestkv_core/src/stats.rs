//! Store statistics.
//!
//! Counters for the operations a store has served, readable at any time.
//!
//! # Usage
//!
//! ```rust
//! use nestkv_core::Store;
//!
//! let mut store = Store::new();
//! store.set("a", "1");
//! let _ = store.get("a");
//!
//! let stats = store.stats().snapshot();
//! assert_eq!(stats.writes, 1);
//! assert_eq!(stats.reads, 1);
//! ```

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Store statistics.
///
/// Counters are atomic so they can be bumped from `&self` reads. Values only
/// grow, except `peak_depth` which tracks a maximum.
#[derive(Debug, Default)]
pub struct StoreStats {
    // Operation counters
    /// Total number of `get` calls.
    reads: AtomicU64,
    /// Total number of `set` calls.
    writes: AtomicU64,
    /// Total number of `unset` calls.
    unsets: AtomicU64,
    /// Total number of `num_equal_to` calls.
    count_queries: AtomicU64,

    // Transaction counters
    /// Total number of scopes opened.
    begins: AtomicU64,
    /// Total number of successful commits.
    commits: AtomicU64,
    /// Total number of successful rollbacks.
    rollbacks: AtomicU64,
    /// Commit/rollback calls made with no open transaction.
    no_transaction: AtomicU64,
    /// Deepest nesting observed.
    peak_depth: AtomicU64,
}

impl StoreStats {
    /// Creates a new stats instance.
    pub fn new() -> Self {
        Self::default()
    }

    // === Increment methods (internal use) ===

    pub(crate) fn record_read(&self) {
        self.reads.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_unset(&self) {
        self.unsets.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_count_query(&self) {
        self.count_queries.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a begin that reached `depth` open scopes.
    pub(crate) fn record_begin(&self, depth: usize) {
        self.begins.fetch_add(1, Ordering::Relaxed);
        self.peak_depth.fetch_max(depth as u64, Ordering::Relaxed);
    }

    pub(crate) fn record_commit(&self) {
        self.commits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_rollback(&self) {
        self.rollbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_no_transaction(&self) {
        self.no_transaction.fetch_add(1, Ordering::Relaxed);
    }

    // === Getter methods (public API) ===

    /// Returns the total number of `get` calls.
    pub fn reads(&self) -> u64 {
        self.reads.load(Ordering::Relaxed)
    }

    /// Returns the total number of `set` calls.
    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }

    /// Returns the total number of `unset` calls.
    pub fn unsets(&self) -> u64 {
        self.unsets.load(Ordering::Relaxed)
    }

    /// Returns the total number of `num_equal_to` calls.
    pub fn count_queries(&self) -> u64 {
        self.count_queries.load(Ordering::Relaxed)
    }

    /// Returns the total number of scopes opened.
    pub fn begins(&self) -> u64 {
        self.begins.load(Ordering::Relaxed)
    }

    /// Returns the total number of successful commits.
    pub fn commits(&self) -> u64 {
        self.commits.load(Ordering::Relaxed)
    }

    /// Returns the total number of successful rollbacks.
    pub fn rollbacks(&self) -> u64 {
        self.rollbacks.load(Ordering::Relaxed)
    }

    /// Returns how often commit or rollback found no open transaction.
    pub fn no_transaction(&self) -> u64 {
        self.no_transaction.load(Ordering::Relaxed)
    }

    /// Returns the deepest nesting observed.
    pub fn peak_depth(&self) -> u64 {
        self.peak_depth.load(Ordering::Relaxed)
    }

    /// Returns a snapshot of all stats.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            reads: self.reads(),
            writes: self.writes(),
            unsets: self.unsets(),
            count_queries: self.count_queries(),
            begins: self.begins(),
            commits: self.commits(),
            rollbacks: self.rollbacks(),
            no_transaction: self.no_transaction(),
            peak_depth: self.peak_depth(),
        }
    }
}

/// A point-in-time snapshot of store statistics.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StatsSnapshot {
    /// Total number of `get` calls.
    pub reads: u64,
    /// Total number of `set` calls.
    pub writes: u64,
    /// Total number of `unset` calls.
    pub unsets: u64,
    /// Total number of `num_equal_to` calls.
    pub count_queries: u64,
    /// Total number of scopes opened.
    pub begins: u64,
    /// Total number of successful commits.
    pub commits: u64,
    /// Total number of successful rollbacks.
    pub rollbacks: u64,
    /// Commit/rollback calls made with no open transaction.
    pub no_transaction: u64,
    /// Deepest nesting observed.
    pub peak_depth: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stats_are_zero() {
        let stats = StoreStats::new();
        assert_eq!(stats.reads(), 0);
        assert_eq!(stats.writes(), 0);
        assert_eq!(stats.commits(), 0);
        assert_eq!(stats.peak_depth(), 0);
    }

    #[test]
    fn record_operations() {
        let stats = StoreStats::new();

        stats.record_read();
        stats.record_read();
        stats.record_write();
        stats.record_unset();
        stats.record_count_query();

        assert_eq!(stats.reads(), 2);
        assert_eq!(stats.writes(), 1);
        assert_eq!(stats.unsets(), 1);
        assert_eq!(stats.count_queries(), 1);
    }

    #[test]
    fn peak_depth_keeps_maximum() {
        let stats = StoreStats::new();

        stats.record_begin(1);
        stats.record_begin(3);
        stats.record_begin(2);

        assert_eq!(stats.begins(), 3);
        assert_eq!(stats.peak_depth(), 3);
    }

    #[test]
    fn snapshot() {
        let stats = StoreStats::new();
        stats.record_begin(1);
        stats.record_commit();
        stats.record_rollback();
        stats.record_no_transaction();

        let snap = stats.snapshot();
        assert_eq!(snap.begins, 1);
        assert_eq!(snap.commits, 1);
        assert_eq!(snap.rollbacks, 1);
        assert_eq!(snap.no_transaction, 1);
        assert_eq!(snap.peak_depth, 1);
    }
}
