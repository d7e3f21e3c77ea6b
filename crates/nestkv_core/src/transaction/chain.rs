//! Stack of open transaction scopes.

use crate::scope::Scope;

/// The linear sequence of open transaction scopes.
///
/// Scopes are kept in begin order; the last one is the tail, the only scope
/// that reads and writes reach. Nothing branches: `push` always extends the
/// tail, `pop` always removes it.
#[derive(Debug, Clone, Default)]
pub struct TransactionChain {
    scopes: Vec<Scope>,
}

impl TransactionChain {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of open scopes.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Returns true if no transaction is open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Returns the innermost scope.
    #[must_use]
    pub fn tail(&self) -> Option<&Scope> {
        self.scopes.last()
    }

    /// Returns the innermost scope mutably.
    pub fn tail_mut(&mut self) -> Option<&mut Scope> {
        self.scopes.last_mut()
    }

    /// Appends a new innermost scope.
    pub fn push(&mut self, scope: Scope) {
        self.scopes.push(scope);
    }

    /// Detaches the innermost scope, exposing its parent as the new tail.
    pub fn pop(&mut self) -> Option<Scope> {
        self.scopes.pop()
    }

    /// Discards the whole chain, returning the innermost scope.
    ///
    /// The tail already reflects every ancestor, since each scope began as a
    /// full copy of its parent; the ancestors are dropped.
    pub fn collapse(&mut self) -> Option<Scope> {
        let tail = self.scopes.pop();
        self.scopes.clear();
        tail
    }

    /// Iterates over open scopes from outermost to innermost.
    pub fn iter(&self) -> impl Iterator<Item = &Scope> {
        self.scopes.iter()
    }
}
