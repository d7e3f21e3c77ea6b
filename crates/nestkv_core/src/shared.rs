//! Shared store handle.

use crate::config::Config;
use crate::error::CoreResult;
use crate::stats::StatsSnapshot;
use crate::store::Store;
use crate::types::Value;
use parking_lot::Mutex;
use std::sync::Arc;

/// A cloneable handle to one [`Store`] behind a single lock.
///
/// Every operation takes the lock for its whole duration, so callers on
/// different threads see the store as one sequential writer would. Open
/// transactions are store-wide: a `begin` on one handle is visible to all.
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<Store>>,
}

impl SharedStore {
    /// Creates a shared handle to an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::from_store(Store::new())
    }

    /// Creates a shared handle to an empty store with `config`.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self::from_store(Store::with_config(config))
    }

    /// Wraps an existing store.
    #[must_use]
    pub fn from_store(store: Store) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Binds `name` to `value` in the current scope.
    pub fn set(&self, name: &str, value: impl Into<Value>) {
        self.inner.lock().set(name, value);
    }

    /// Returns a copy of the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.inner.lock().get(name).cloned()
    }

    /// Removes any binding for `name`.
    pub fn unset(&self, name: &str) -> Option<Value> {
        self.inner.lock().unset(name)
    }

    /// Returns how many keys are bound to `value`.
    #[must_use]
    pub fn num_equal_to(&self, value: &str) -> usize {
        self.inner.lock().num_equal_to(value)
    }

    /// Opens a nested transaction.
    pub fn begin(&self) -> CoreResult<()> {
        self.inner.lock().begin()
    }

    /// Commits every open transaction.
    pub fn commit(&self) -> CoreResult<()> {
        self.inner.lock().commit()
    }

    /// Discards the innermost transaction.
    pub fn rollback(&self) -> CoreResult<()> {
        self.inner.lock().rollback()
    }

    /// Returns the number of open transactions.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.inner.lock().depth()
    }

    /// Returns a snapshot of the operation counters.
    #[must_use]
    pub fn stats(&self) -> StatsSnapshot {
        self.inner.lock().stats().snapshot()
    }

    /// Runs `f` with exclusive access to the store.
    ///
    /// Use this to apply several operations with no other caller
    /// interleaving.
    pub fn with<R>(&self, f: impl FnOnce(&mut Store) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
