//! A single transaction layer.

use crate::error::CoreResult;
use crate::index::ReverseIndex;
use crate::types::Value;
use std::collections::HashMap;

/// One layer of state: a full key-value mapping plus its reverse index.
///
/// The committed base of a [`Store`](crate::Store) is a `Scope`, and so is
/// every open transaction. A new transaction scope is a deep copy
/// ([`Clone`]) of the scope below it, so writes never leak downwards until
/// commit replaces the base outright.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    /// Key to value bindings. Unset keys are absent.
    mapping: HashMap<String, Value>,
    /// Value to key names, kept in step with `mapping`.
    index: ReverseIndex,
}

impl Scope {
    /// Creates an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty scope with room for `capacity` keys.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            mapping: HashMap::with_capacity(capacity),
            index: ReverseIndex::new(),
        }
    }

    /// Binds `name` to `value`.
    ///
    /// Any previous binding is first removed from the index. An empty value
    /// behaves exactly like [`unset`](Self::unset).
    pub fn set(&mut self, name: &str, value: Value) {
        if value.is_empty() {
            self.unset(name);
            return;
        }

        if let Some(previous) = self.mapping.get(name) {
            if *previous == value {
                return;
            }
            self.index.clear(name, previous);
        }
        self.index.record(name, &value);
        self.mapping.insert(name.to_owned(), value);
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.mapping.get(name)
    }

    /// Removes any binding for `name`, returning the previous value.
    pub fn unset(&mut self, name: &str) -> Option<Value> {
        let previous = self.mapping.remove(name)?;
        self.index.clear(name, &previous);
        Some(previous)
    }

    /// Returns the number of keys bound to `value`.
    #[must_use]
    pub fn num_equal_to(&self, value: &str) -> usize {
        self.index.count(value)
    }

    /// Returns the number of bound keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    /// Returns true if no key is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// Returns the bindings ordered by key.
    #[must_use]
    pub fn entries(&self) -> Vec<(&str, &Value)> {
        let mut entries: Vec<_> = self
            .mapping
            .iter()
            .map(|(name, value)| (name.as_str(), value))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Returns the reverse index of this scope.
    #[must_use]
    pub fn index(&self) -> &ReverseIndex {
        &self.index
    }

    /// Verifies that the index matches the mapping exactly.
    pub fn check_consistency(&self) -> CoreResult<()> {
        self.index.verify_against(&self.mapping)
    }
}
