//! Stress tests for NestKV.
//!
//! These helpers drive a store through deep nesting and large states and
//! report throughput. Each also checks that the store ends where it should.

use crate::fixtures::Fingerprint;
use nestkv_core::Store;
use std::time::{Duration, Instant};

/// Result of a stress test run.
#[derive(Debug, Clone)]
pub struct StressTestResult {
    /// Total operations performed.
    pub total_ops: usize,
    /// Whether the final state matched expectations.
    pub state_ok: bool,
    /// Total duration.
    pub duration: Duration,
    /// Operations per second.
    pub ops_per_second: f64,
}

impl StressTestResult {
    /// Creates a new result.
    pub fn new(total_ops: usize, state_ok: bool, duration: Duration) -> Self {
        let ops_per_second = if duration.as_secs_f64() > 0.0 {
            total_ops as f64 / duration.as_secs_f64()
        } else {
            0.0
        };

        Self {
            total_ops,
            state_ok,
            duration,
            ops_per_second,
        }
    }
}

/// Configuration for stress tests.
#[derive(Debug, Clone)]
pub struct StressConfig {
    /// Number of nested transactions to open.
    pub depth: usize,
    /// Number of keys committed before the run.
    pub base_keys: usize,
    /// Number of writes performed inside each scope.
    pub writes_per_scope: usize,
    /// Number of distinct values written.
    pub distinct_values: usize,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            depth: 64,
            base_keys: 1_000,
            writes_per_scope: 16,
            distinct_values: 8,
        }
    }
}

fn populate(store: &mut Store, config: &StressConfig) {
    for i in 0..config.base_keys {
        store.set(&format!("base{i}"), format!("v{}", i % config.distinct_values.max(1)));
    }
}

fn write_scope(store: &mut Store, config: &StressConfig, level: usize) {
    for w in 0..config.writes_per_scope {
        let key = format!("base{}", (level * 31 + w) % config.base_keys.max(1));
        store.set(&key, format!("v{}", (level + w) % config.distinct_values.max(1)));
        store.set(&format!("s{level}-{w}"), "scoped");
    }
}

/// Opens `depth` scopes with writes in each, then rolls every one back.
///
/// The committed state must come back exactly.
pub fn stress_nested_rollback(config: &StressConfig) -> StressTestResult {
    let mut store = Store::new();
    populate(&mut store, config);
    let before = Fingerprint::of_current(&store);

    let start = Instant::now();
    let mut ops = 0usize;
    for level in 0..config.depth {
        let _ = store.begin();
        write_scope(&mut store, config, level);
        ops += 1 + 2 * config.writes_per_scope;
    }
    for _ in 0..config.depth {
        let _ = store.rollback();
        ops += 1;
    }
    let duration = start.elapsed();

    let state_ok = !store.in_transaction()
        && Fingerprint::of_current(&store) == before
        && store.check_consistency().is_ok();
    StressTestResult::new(ops, state_ok, duration)
}

/// Opens `depth` scopes with writes in each, then commits once.
///
/// Every scoped key must survive and the chain must be closed.
pub fn stress_nested_commit(config: &StressConfig) -> StressTestResult {
    let mut store = Store::new();
    populate(&mut store, config);

    let start = Instant::now();
    let mut ops = 0usize;
    for level in 0..config.depth {
        let _ = store.begin();
        write_scope(&mut store, config, level);
        ops += 1 + 2 * config.writes_per_scope;
    }
    let tail = Fingerprint::of_current(&store);
    let _ = store.commit();
    ops += 1;
    let duration = start.elapsed();

    let state_ok = !store.in_transaction()
        && Fingerprint::of_base(&store) == tail
        && store.num_equal_to("scoped") == config.depth * config.writes_per_scope
        && store.check_consistency().is_ok();
    StressTestResult::new(ops, state_ok, duration)
}

/// Runs a long single-scope workload of sets, unsets and counts.
pub fn stress_mixed_operations(operations: usize, config: &StressConfig) -> StressTestResult {
    let mut store = Store::new();
    populate(&mut store, config);
    let keys = config.base_keys.max(1);
    let values = config.distinct_values.max(1);

    let start = Instant::now();
    for i in 0..operations {
        let key = format!("base{}", i % keys);
        match i % 3 {
            0 => store.set(&key, format!("v{}", i % values)),
            1 => {
                store.unset(&key);
            }
            _ => {
                let _ = store.num_equal_to(&format!("v{}", i % values));
            }
        }
    }
    let duration = start.elapsed();

    StressTestResult::new(operations, store.check_consistency().is_ok(), duration)
}
