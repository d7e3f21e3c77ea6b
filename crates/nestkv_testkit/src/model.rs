//! Naive reference model for differential testing.
//!
//! The model keeps a plain stack of maps and answers counts by scanning, so
//! it shares no code with the real index or chain.

use crate::generators::StoreOp;
use nestkv_core::{CoreError, Store};
use std::collections::BTreeMap;

/// Observable result of one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation {
    /// The operation produces no output.
    Nothing,
    /// Result of a `get`.
    Value(Option<String>),
    /// Result of a `num_equal_to`.
    Count(usize),
    /// Commit or rollback found no open transaction.
    NoTransaction,
}

/// Reference store: committed map plus a stack of full copies.
#[derive(Debug, Clone, Default)]
pub struct ModelStore {
    committed: BTreeMap<String, String>,
    open: Vec<BTreeMap<String, String>>,
}

impl ModelStore {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of open transactions.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Returns the visible bindings.
    pub fn visible(&self) -> &BTreeMap<String, String> {
        self.open.last().unwrap_or(&self.committed)
    }

    fn visible_mut(&mut self) -> &mut BTreeMap<String, String> {
        match self.open.last_mut() {
            Some(top) => top,
            None => &mut self.committed,
        }
    }

    /// Applies one operation.
    pub fn apply(&mut self, op: &StoreOp) -> Observation {
        match op {
            StoreOp::Set { name, value } => {
                if value.is_empty() {
                    self.visible_mut().remove(name);
                } else {
                    self.visible_mut().insert(name.clone(), value.clone());
                }
                Observation::Nothing
            }
            StoreOp::Get { name } => Observation::Value(self.visible().get(name).cloned()),
            StoreOp::Unset { name } => {
                self.visible_mut().remove(name);
                Observation::Nothing
            }
            StoreOp::NumEqualTo { value } => {
                Observation::Count(self.visible().values().filter(|v| *v == value).count())
            }
            StoreOp::Begin => {
                let copy = self.visible().clone();
                self.open.push(copy);
                Observation::Nothing
            }
            StoreOp::Commit => match self.open.pop() {
                Some(top) => {
                    self.committed = top;
                    self.open.clear();
                    Observation::Nothing
                }
                None => Observation::NoTransaction,
            },
            StoreOp::Rollback => match self.open.pop() {
                Some(_) => Observation::Nothing,
                None => Observation::NoTransaction,
            },
        }
    }
}

/// Applies one operation to a real store.
pub fn apply_to_store(store: &mut Store, op: &StoreOp) -> Observation {
    let no_txn = |result: Result<(), CoreError>| match result {
        Ok(()) => Observation::Nothing,
        Err(_) => Observation::NoTransaction,
    };

    match op {
        StoreOp::Set { name, value } => {
            store.set(name, value.as_str());
            Observation::Nothing
        }
        StoreOp::Get { name } => {
            Observation::Value(store.get(name).map(|v| v.as_str().to_owned()))
        }
        StoreOp::Unset { name } => {
            store.unset(name);
            Observation::Nothing
        }
        StoreOp::NumEqualTo { value } => Observation::Count(store.num_equal_to(value)),
        StoreOp::Begin => no_txn(store.begin()),
        StoreOp::Commit => no_txn(store.commit()),
        StoreOp::Rollback => no_txn(store.rollback()),
    }
}

/// Runs `ops` against a fresh store and the model, step by step.
///
/// Returns a description of the first divergence: a differing observation,
/// differing visible bindings or depth, or an inconsistent index.
pub fn check_against_model(ops: &[StoreOp]) -> Result<(), String> {
    let mut store = Store::new();
    let mut model = ModelStore::new();

    for (step, op) in ops.iter().enumerate() {
        let got = apply_to_store(&mut store, op);
        let want = model.apply(op);
        if got != want {
            return Err(format!("step {step} {op:?}: store {got:?}, model {want:?}"));
        }

        if store.depth() != model.depth() {
            return Err(format!(
                "step {step} {op:?}: depth {} vs model {}",
                store.depth(),
                model.depth()
            ));
        }

        let visible: BTreeMap<String, String> = store
            .current()
            .entries()
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.as_str().to_owned()))
            .collect();
        if &visible != model.visible() {
            return Err(format!("step {step} {op:?}: bindings diverged"));
        }

        store
            .check_consistency()
            .map_err(|e| format!("step {step} {op:?}: {e}"))?;
    }
    Ok(())
}
