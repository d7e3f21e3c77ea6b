//! # NestKV Testkit
//!
//! Test utilities for NestKV.
//!
//! This crate provides:
//! - Store fixtures and exact state fingerprints
//! - A naive reference model of the store for differential testing
//! - Property-based test generators using proptest
//! - Fuzz testing harnesses
//! - Stress testing utilities
//! - Interpreter script vectors
//!
//! ## Usage
//!
//! ```rust,ignore
//! use nestkv_testkit::prelude::*;
//!
//! proptest! {
//!     #[test]
//!     fn store_matches_model(ops in op_sequence_strategy(64)) {
//!         check_against_model(&ops).unwrap();
//!     }
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod fuzz;
pub mod generators;
pub mod model;
pub mod stress;
pub mod vectors;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::fuzz::*;
    pub use crate::generators::*;
    pub use crate::model::*;
    pub use crate::stress::*;
    pub use crate::vectors::*;
    pub use proptest::prelude::*;
}

pub use fixtures::*;
pub use fuzz::*;
pub use generators::*;
pub use model::*;
pub use stress::*;
pub use vectors::*;
