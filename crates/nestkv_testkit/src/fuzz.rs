//! Fuzz testing harnesses for NestKV.
//!
//! These targets can be driven by cargo-fuzz or any byte-oriented fuzzer.

use crate::generators::StoreOp;
use crate::model::check_against_model;
use nestkv_core::Store;

const KEYS: [&str; 8] = ["a", "b", "c", "d", "e", "f", "g", "h"];
const VALUES: [&str; 5] = ["", "1", "2", "3", "4"];

/// Decodes fuzzer input into store operations.
///
/// Each operation takes one byte: the low three bits pick the operation,
/// the high bits pick a key and value from small pools. Every byte string
/// decodes to some sequence, so no input is wasted.
pub fn parse_sequence(data: &[u8]) -> Vec<StoreOp> {
    data.iter()
        .map(|&byte| {
            let key = KEYS[(byte >> 3) as usize % KEYS.len()].to_owned();
            let value = VALUES[(byte >> 5) as usize % VALUES.len()].to_owned();
            match byte & 0x07 {
                0 | 1 => StoreOp::Set { name: key, value },
                2 => StoreOp::Get { name: key },
                3 => StoreOp::Unset { name: key },
                4 => StoreOp::NumEqualTo { value },
                5 => StoreOp::Begin,
                6 => StoreOp::Commit,
                _ => StoreOp::Rollback,
            }
        })
        .collect()
}

/// Fuzz target for store operations.
///
/// Arbitrary operation sequences must never panic and must leave every
/// scope's index consistent with its mapping.
pub fn fuzz_store_operations(data: &[u8]) {
    let mut store = Store::new();
    for op in parse_sequence(data) {
        crate::model::apply_to_store(&mut store, &op);
    }
    assert!(
        store.check_consistency().is_ok(),
        "index diverged from mapping"
    );
}

/// Fuzz target comparing the store with the reference model.
pub fn fuzz_differential(data: &[u8]) {
    if let Err(divergence) = check_against_model(&parse_sequence(data)) {
        panic!("store diverged from model: {divergence}");
    }
}
