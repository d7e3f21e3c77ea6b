//! Top-level store.

use crate::config::Config;
use crate::error::{CoreError, CoreResult};
use crate::scope::Scope;
use crate::stats::StoreStats;
use crate::transaction::TransactionChain;
use crate::types::Value;
use tracing::{debug, trace};

/// An in-memory key-value store with nested transactions.
///
/// The store holds the committed base scope and a chain of open transaction
/// scopes. Every read and write goes to the innermost open scope, or to the
/// base when no transaction is open.
///
/// # Example
///
/// ```rust
/// use nestkv_core::Store;
///
/// let mut store = Store::new();
/// store.begin().unwrap();
/// store.set("a", "A");
/// store.begin().unwrap();
/// store.set("a", "B");
/// store.commit().unwrap();
///
/// assert!(!store.in_transaction());
/// assert_eq!(store.get("a").unwrap().as_str(), "B");
/// ```
#[derive(Debug, Default)]
pub struct Store {
    /// Committed state.
    base: Scope,
    /// Open transaction scopes.
    chain: TransactionChain,
    /// Operation counters.
    stats: StoreStats,
    /// Configuration.
    config: Config,
}

impl Store {
    /// Creates an empty store with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty store with the given configuration.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            base: Scope::with_capacity(config.initial_capacity),
            chain: TransactionChain::new(),
            stats: StoreStats::new(),
            config,
        }
    }

    // === Data operations ===

    /// Binds `name` to `value` in the current scope.
    ///
    /// Binding an empty value is the same as [`unset`](Self::unset).
    pub fn set(&mut self, name: &str, value: impl Into<Value>) {
        let value = value.into();
        trace!(name, value = %value, depth = self.depth(), "set");
        if self.config.track_stats {
            self.stats.record_write();
        }
        self.current_mut().set(name, value);
    }

    /// Returns the value bound to `name` in the current scope.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        trace!(name, depth = self.depth(), "get");
        if self.config.track_stats {
            self.stats.record_read();
        }
        self.current().get(name)
    }

    /// Removes any binding for `name` in the current scope.
    ///
    /// Returns the value that was bound, if any.
    pub fn unset(&mut self, name: &str) -> Option<Value> {
        trace!(name, depth = self.depth(), "unset");
        if self.config.track_stats {
            self.stats.record_unset();
        }
        self.current_mut().unset(name)
    }

    /// Returns how many keys are bound to `value` in the current scope.
    #[must_use]
    pub fn num_equal_to(&self, value: &str) -> usize {
        if self.config.track_stats {
            self.stats.record_count_query();
        }
        self.current().num_equal_to(value)
    }

    // === Transactions ===

    /// Opens a new nested transaction.
    ///
    /// The new scope is a full copy of the currently visible state; nothing
    /// written inside it is seen by outer scopes until commit.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DepthLimitExceeded`] only when a maximum depth is
    /// configured and already reached.
    pub fn begin(&mut self) -> CoreResult<()> {
        if let Some(limit) = self.config.max_depth {
            if self.chain.depth() >= limit {
                debug!(limit, "begin refused at depth limit");
                return Err(CoreError::depth_limit(limit));
            }
        }

        let snapshot = self.current().clone();
        self.chain.push(snapshot);

        let depth = self.chain.depth();
        if self.config.track_stats {
            self.stats.record_begin(depth);
        }
        debug!(depth, "transaction begun");
        Ok(())
    }

    /// Discards the innermost transaction.
    ///
    /// Its parent scope, or the committed base, becomes current again with
    /// both mapping and index exactly as they were before it began.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NoActiveTransaction`] if no transaction is open;
    /// the store is not modified.
    pub fn rollback(&mut self) -> CoreResult<()> {
        if self.chain.pop().is_none() {
            return Err(self.no_transaction("rollback"));
        }

        if self.config.track_stats {
            self.stats.record_rollback();
        }
        debug!(depth = self.chain.depth(), "transaction rolled back");
        Ok(())
    }

    /// Commits every open transaction.
    ///
    /// The innermost scope becomes the new committed state and the whole
    /// chain is closed.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NoActiveTransaction`] if no transaction is open;
    /// the store is not modified.
    pub fn commit(&mut self) -> CoreResult<()> {
        let closed = self.chain.depth();
        let Some(tail) = self.chain.collapse() else {
            return Err(self.no_transaction("commit"));
        };
        self.base = tail;

        if self.config.track_stats {
            self.stats.record_commit();
        }
        debug!(closed, keys = self.base.len(), "transactions committed");
        Ok(())
    }

    // === Inspection ===

    /// Returns the number of open transactions.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.chain.depth()
    }

    /// Returns true if at least one transaction is open.
    #[must_use]
    pub fn in_transaction(&self) -> bool {
        !self.chain.is_empty()
    }

    /// Returns the committed state.
    #[must_use]
    pub fn base(&self) -> &Scope {
        &self.base
    }

    /// Returns the scope reads and writes currently go to.
    #[must_use]
    pub fn current(&self) -> &Scope {
        self.chain.tail().unwrap_or(&self.base)
    }

    /// Returns the open transaction scopes.
    #[must_use]
    pub fn chain(&self) -> &TransactionChain {
        &self.chain
    }

    /// Returns the operation counters.
    #[must_use]
    pub fn stats(&self) -> &StoreStats {
        &self.stats
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Verifies index consistency of the base and every open scope.
    pub fn check_consistency(&self) -> CoreResult<()> {
        self.base.check_consistency()?;
        for scope in self.chain.iter() {
            scope.check_consistency()?;
        }
        Ok(())
    }

    fn current_mut(&mut self) -> &mut Scope {
        match self.chain.tail_mut() {
            Some(tail) => tail,
            None => &mut self.base,
        }
    }

    fn no_transaction(&self, op: &'static str) -> CoreError {
        if self.config.track_stats {
            self.stats.record_no_transaction();
        }
        debug!(op, "no active transaction");
        CoreError::NoActiveTransaction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of(store: &Store, name: &str) -> Option<String> {
        store.get(name).map(|v| v.as_str().to_owned())
    }

    #[test]
    fn set_get_without_transaction() {
        let mut store = Store::new();
        store.set("a", "10");

        assert_eq!(value_of(&store, "a").as_deref(), Some("10"));
        assert_eq!(store.num_equal_to("10"), 1);
        assert!(!store.in_transaction());
    }

    #[test]
    fn unset_updates_count() {
        let mut store = Store::new();
        store.set("a", "10");
        store.set("b", "10");

        store.unset("a");

        assert!(store.get("a").is_none());
        assert_eq!(store.num_equal_to("10"), 1);

        store.unset("b");
        assert_eq!(store.num_equal_to("10"), 0);
        assert!(store.base().index().is_empty());
    }

    #[test]
    fn unknown_key_and_value_are_total() {
        let mut store = Store::new();
        assert!(store.get("ghost").is_none());
        assert!(store.unset("ghost").is_none());
        assert_eq!(store.num_equal_to("nothing"), 0);
    }

    #[test]
    fn nested_rollback_keeps_outer() {
        let mut store = Store::new();
        store.begin().unwrap();
        store.set("k", "A");
        store.begin().unwrap();
        store.set("k", "B");

        store.rollback().unwrap();

        assert_eq!(value_of(&store, "k").as_deref(), Some("A"));
        assert_eq!(store.num_equal_to("A"), 1);
        assert_eq!(store.num_equal_to("B"), 0);
        assert_eq!(store.depth(), 1);
    }

    #[test]
    fn commit_collapses_whole_stack() {
        let mut store = Store::new();
        store.begin().unwrap();
        store.set("k", "A");
        store.begin().unwrap();
        store.set("k", "B");

        store.commit().unwrap();

        assert!(!store.in_transaction());
        assert_eq!(value_of(&store, "k").as_deref(), Some("B"));
        assert_eq!(store.num_equal_to("B"), 1);
        assert_eq!(store.num_equal_to("A"), 0);
        assert!(matches!(store.rollback(), Err(CoreError::NoActiveTransaction)));
    }

    #[test]
    fn depth_one_rollback_restores_index() {
        let mut store = Store::new();
        store.set("a", "10");

        store.begin().unwrap();
        store.set("a", "20");
        store.set("b", "10");
        store.rollback().unwrap();

        assert!(!store.in_transaction());
        assert_eq!(store.num_equal_to("10"), 1);
        assert_eq!(store.num_equal_to("20"), 0);
        store.check_consistency().unwrap();
    }

    #[test]
    fn writes_invisible_to_parent_until_commit() {
        let mut store = Store::new();
        store.set("a", "1");
        store.begin().unwrap();
        store.unset("a");

        assert!(store.get("a").is_none());
        assert_eq!(store.base().get("a"), Some(&Value::from("1")));

        store.commit().unwrap();
        assert!(store.get("a").is_none());
    }

    #[test]
    fn commit_and_rollback_without_transaction() {
        let mut store = Store::new();
        store.set("a", "1");
        let before = store.base().clone();

        assert_eq!(store.commit(), Err(CoreError::NoActiveTransaction));
        assert_eq!(store.rollback(), Err(CoreError::NoActiveTransaction));

        assert_eq!(store.base(), &before);
        assert_eq!(store.stats().no_transaction(), 2);
    }

    #[test]
    fn depth_limit_refuses_begin() {
        let mut store = Store::with_config(Config::new().max_depth(2));
        store.begin().unwrap();
        store.begin().unwrap();

        assert_eq!(store.begin(), Err(CoreError::depth_limit(2)));
        assert_eq!(store.depth(), 2);
    }

    #[test]
    fn deep_nesting_unwinds_exactly() {
        let mut store = Store::new();
        store.set("a", "base");
        let before = store.base().clone();

        for i in 0..50 {
            store.begin().unwrap();
            store.set("a", format!("v{i}"));
            store.set(&format!("k{i}"), "x");
        }
        assert_eq!(store.num_equal_to("x"), 50);

        for _ in 0..50 {
            store.rollback().unwrap();
        }

        assert!(!store.in_transaction());
        assert_eq!(store.current(), &before);
    }

    #[test]
    fn stats_track_operations() {
        let mut store = Store::new();
        store.set("a", "1");
        let _ = store.get("a");
        let _ = store.num_equal_to("1");
        store.begin().unwrap();
        store.begin().unwrap();
        store.rollback().unwrap();
        store.commit().unwrap();

        let snap = store.stats().snapshot();
        assert_eq!(snap.writes, 1);
        assert_eq!(snap.reads, 1);
        assert_eq!(snap.count_queries, 1);
        assert_eq!(snap.begins, 2);
        assert_eq!(snap.rollbacks, 1);
        assert_eq!(snap.commits, 1);
        assert_eq!(snap.peak_depth, 2);
    }

    #[test]
    fn stats_can_be_disabled() {
        let mut store = Store::with_config(Config::new().track_stats(false));
        store.set("a", "1");
        store.begin().unwrap();

        assert_eq!(store.stats().snapshot(), Default::default());
    }
}
