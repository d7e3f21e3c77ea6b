//! Nested transactions.
//!
//! NestKV transactions are layered snapshots:
//! - **begin** copies the currently visible scope and pushes the copy
//! - **rollback** pops only the innermost scope
//! - **commit** promotes the innermost scope to the committed base and
//!   closes every open scope at once
//!
//! There is no isolation between callers; a store has a single writer.

mod chain;

pub use chain::TransactionChain;
