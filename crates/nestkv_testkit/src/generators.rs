//! Property-based test generators using proptest.
//!
//! Keys and values are drawn from small alphabets so that random sequences
//! overwrite keys and share values often enough to exercise the index.

use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use serde::{Deserialize, Serialize};

/// One store operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreOp {
    /// Bind a key.
    Set {
        /// Key name.
        name: String,
        /// Value, possibly empty.
        value: String,
    },
    /// Read a key.
    Get {
        /// Key name.
        name: String,
    },
    /// Remove a key.
    Unset {
        /// Key name.
        name: String,
    },
    /// Count keys holding a value.
    NumEqualTo {
        /// Value to count.
        value: String,
    },
    /// Open a transaction.
    Begin,
    /// Commit all transactions.
    Commit,
    /// Discard the innermost transaction.
    Rollback,
}

impl StoreOp {
    /// Renders the operation as an interpreter command line.
    ///
    /// Empty values have no command form and render as `unset`.
    #[must_use]
    pub fn to_command_line(&self) -> String {
        match self {
            Self::Set { name, value } if value.is_empty() => format!("unset {name}"),
            Self::Set { name, value } => format!("set {name} {value}"),
            Self::Get { name } => format!("get {name}"),
            Self::Unset { name } => format!("unset {name}"),
            Self::NumEqualTo { value } => format!("numequalto {value}"),
            Self::Begin => "begin".into(),
            Self::Commit => "commit".into(),
            Self::Rollback => "rollback".into(),
        }
    }
}

/// Strategy for key names drawn from a small pool.
pub fn key_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["a", "b", "c", "d", "e", "f"]).prop_map(str::to_owned)
}

/// Strategy for values drawn from a small pool, including the empty value.
pub fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        9 => prop::sample::select(vec!["10", "20", "30", "40"]).prop_map(str::to_owned),
        1 => Just(String::new()),
    ]
}

/// Strategy for non-empty values only.
pub fn nonempty_value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9]{1,6}").expect("Invalid regex")
}

/// Strategy for a single operation, weighted towards data operations.
pub fn op_strategy() -> impl Strategy<Value = StoreOp> {
    prop_oneof![
        6 => (key_strategy(), value_strategy())
            .prop_map(|(name, value)| StoreOp::Set { name, value }),
        3 => key_strategy().prop_map(|name| StoreOp::Get { name }),
        2 => key_strategy().prop_map(|name| StoreOp::Unset { name }),
        3 => value_strategy().prop_map(|value| StoreOp::NumEqualTo { value }),
        2 => Just(StoreOp::Begin),
        1 => Just(StoreOp::Commit),
        1 => Just(StoreOp::Rollback),
    ]
}

/// Strategy for operation sequences of up to `max_len` operations.
pub fn op_sequence_strategy(max_len: usize) -> impl Strategy<Value = Vec<StoreOp>> {
    prop::collection::vec(op_strategy(), 0..=max_len)
}

/// Strategy for operation sequences with no commit or rollback.
pub fn data_op_sequence_strategy(max_len: usize) -> impl Strategy<Value = Vec<StoreOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => (key_strategy(), value_strategy())
                .prop_map(|(name, value)| StoreOp::Set { name, value }),
            1 => key_strategy().prop_map(|name| StoreOp::Unset { name }),
        ],
        0..=max_len,
    )
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}
