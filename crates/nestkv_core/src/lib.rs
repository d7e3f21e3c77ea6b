//! # NestKV Core
//!
//! In-memory key-value store with nested transactions.
//!
//! This crate provides:
//! - A reverse value index answering "how many keys hold value V" in O(1)
//! - Transaction scopes that each own an isolated snapshot of the store
//! - A linear transaction chain with whole-stack commit and tail rollback
//! - The [`Store`] facade routing every operation to the innermost scope
//! - [`SharedStore`], a single-lock handle for callers sharing a store
//!
//! ## Example
//!
//! ```rust
//! use nestkv_core::{CoreError, Store};
//!
//! let mut store = Store::new();
//! store.set("a", "10");
//! store.begin().unwrap();
//! store.set("a", "20");
//! assert_eq!(store.num_equal_to("20"), 1);
//! store.rollback().unwrap();
//! assert_eq!(store.get("a").map(|v| v.as_str()), Some("10"));
//! assert!(matches!(store.commit(), Err(CoreError::NoActiveTransaction)));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
pub mod index;
mod scope;
mod shared;
mod stats;
mod store;
pub mod transaction;
mod types;

pub use config::Config;
pub use error::{CoreError, CoreResult};
pub use index::ReverseIndex;
pub use scope::Scope;
pub use shared::SharedStore;
pub use stats::{StatsSnapshot, StoreStats};
pub use store::Store;
pub use transaction::TransactionChain;
pub use types::Value;

/// Crate version, for diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
