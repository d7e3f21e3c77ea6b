//! Replays script vectors and generated scripts through the interpreter.

use nestkv_cli::Session;
use nestkv_core::Store;
use nestkv_testkit::prelude::*;

fn run_quiet(script: &str) -> String {
    let mut session = Session::new(Store::new(), Vec::new()).quiet(true);
    session.run(script.as_bytes()).expect("in-memory I/O");
    let (_, out) = session.into_parts();
    String::from_utf8(out).expect("utf-8 output")
}

#[test]
fn script_vectors_pass() {
    for vector in script_vectors() {
        assert_eq!(
            run_quiet(&vector.script_text()),
            vector.expected_text(),
            "vector {} ({})",
            vector.id,
            vector.description
        );
    }
}

fn expected_output(ops: &[StoreOp]) -> String {
    let mut model = ModelStore::new();
    let mut out = String::new();
    for op in ops {
        match model.apply(op) {
            Observation::Nothing => {}
            Observation::Value(Some(v)) => out.push_str(&format!("{v}\n")),
            Observation::Value(None) => out.push_str("NULL\n"),
            Observation::Count(n) => out.push_str(&format!("{n}\n")),
            Observation::NoTransaction => out.push_str("NO TRANSACTION\n"),
        }
    }
    out
}

proptest! {
    #![proptest_config(PropTestConfig::quick().to_proptest_config())]

    #[test]
    fn interpreter_matches_model(ops in op_sequence_strategy(60)) {
        // An empty count value has no command form.
        let ops: Vec<StoreOp> = ops
            .into_iter()
            .filter(|op| !matches!(op, StoreOp::NumEqualTo { value } if value.is_empty()))
            .collect();

        let script: String = ops
            .iter()
            .map(|op| format!("{}\n", op.to_command_line()))
            .collect();

        prop_assert_eq!(run_quiet(&script), expected_output(&ops));
    }
}
