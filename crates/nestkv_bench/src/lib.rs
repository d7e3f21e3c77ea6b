//! Benchmark utilities.

use nestkv_core::Store;
use rand::Rng;

/// Generate `count` random key-value pairs over `distinct_values` values.
pub fn random_pairs(count: usize, distinct_values: usize) -> Vec<(String, String)> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|i| {
            let value = rng.gen_range(0..distinct_values.max(1));
            (format!("key{i}"), format!("value{value}"))
        })
        .collect()
}

/// Build a store with `count` committed keys.
pub fn populated_store(count: usize, distinct_values: usize) -> Store {
    let mut store = Store::new();
    for (name, value) in random_pairs(count, distinct_values) {
        store.set(&name, value);
    }
    store
}
