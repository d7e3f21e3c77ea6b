//! Error types for NestKV core.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in NestKV core operations.
///
/// None of these are fatal: the store is left unchanged whenever an
/// operation reports one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// `commit` or `rollback` was called with no open transaction.
    #[error("no active transaction")]
    NoActiveTransaction,

    /// `begin` would open more nested scopes than the configured limit.
    #[error("transaction depth limit of {limit} reached")]
    DepthLimitExceeded {
        /// The configured maximum depth.
        limit: usize,
    },

    /// A scope's reverse index disagrees with its mapping.
    #[error("index inconsistent for key {key:?}: {reason}")]
    IndexInconsistent {
        /// Key (or value, for orphaned buckets) where the divergence was found.
        key: String,
        /// Description of the divergence.
        reason: String,
    },
}

impl CoreError {
    /// Creates a depth limit error.
    pub fn depth_limit(limit: usize) -> Self {
        Self::DepthLimitExceeded { limit }
    }

    /// Creates an index inconsistency error.
    pub fn index_inconsistent(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::IndexInconsistent {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if this is the no-transaction report.
    #[must_use]
    pub fn is_no_transaction(&self) -> bool {
        matches!(self, Self::NoActiveTransaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            CoreError::NoActiveTransaction.to_string(),
            "no active transaction"
        );
        assert_eq!(
            CoreError::depth_limit(4).to_string(),
            "transaction depth limit of 4 reached"
        );
        assert_eq!(
            CoreError::index_inconsistent("a", "missing from bucket").to_string(),
            "index inconsistent for key \"a\": missing from bucket"
        );
    }

    #[test]
    fn no_transaction_predicate() {
        assert!(CoreError::NoActiveTransaction.is_no_transaction());
        assert!(!CoreError::depth_limit(1).is_no_transaction());
    }
}
