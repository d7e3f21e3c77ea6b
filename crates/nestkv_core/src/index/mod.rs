//! Reverse value index.
//!
//! Every scope keeps a [`ReverseIndex`] next to its mapping so that
//! `num_equal_to` never scans keys. The index is maintained on every write
//! and copied together with the mapping when a transaction begins.

mod reverse;

pub use reverse::ReverseIndex;
