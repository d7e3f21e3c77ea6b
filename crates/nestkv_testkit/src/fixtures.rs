//! Store fixtures and state fingerprints.

use nestkv_core::{Scope, Store};

/// Exact, comparable description of a scope's mapping and index.
///
/// Two fingerprints are equal only if both the bindings and every index
/// bucket match, so they can be used to assert "unchanged" after an
/// operation that must not touch state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint {
    /// Bindings ordered by key.
    pub entries: Vec<(String, String)>,
    /// Every index bucket ordered by value, each with its sorted key names.
    pub buckets: Vec<(String, Vec<String>)>,
}

impl Fingerprint {
    /// Captures the state of `scope`.
    pub fn of(scope: &Scope) -> Self {
        let entries: Vec<(String, String)> = scope
            .entries()
            .into_iter()
            .map(|(name, value)| (name.to_owned(), value.as_str().to_owned()))
            .collect();

        let mut buckets: Vec<(String, Vec<String>)> = scope
            .index()
            .buckets()
            .map(|(value, keys)| {
                let mut keys: Vec<String> = keys.iter().cloned().collect();
                keys.sort_unstable();
                (value.as_str().to_owned(), keys)
            })
            .collect();
        buckets.sort_unstable();

        Self { entries, buckets }
    }

    /// Captures the scope a store currently reads from.
    pub fn of_current(store: &Store) -> Self {
        Self::of(store.current())
    }

    /// Captures the committed base of a store.
    pub fn of_base(store: &Store) -> Self {
        Self::of(store.base())
    }
}

/// Creates a store with `pairs` committed.
pub fn store_with(pairs: &[(&str, &str)]) -> Store {
    let mut store = Store::new();
    for (name, value) in pairs {
        store.set(name, *value);
    }
    store
}

/// Creates a store with `depth` open transactions.
///
/// Scope `i` (1-based) binds `level` to `i` and `only{i}` to `x`.
pub fn nested_store(depth: usize) -> Store {
    let mut store = store_with(&[("level", "0")]);
    for i in 1..=depth {
        store.begin().expect("unlimited depth");
        store.set("level", i.to_string());
        store.set(&format!("only{i}"), "x");
    }
    store
}
