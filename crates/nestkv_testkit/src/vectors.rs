//! Interpreter script vectors.
//!
//! Each vector is a command script and the exact output the interpreter
//! must print for it (quiet mode: no banner, prompt or farewell). They are
//! serializable so other front ends can replay the same cases.

use serde::{Deserialize, Serialize};

/// A script and its expected output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptVector {
    /// Unique identifier for this vector.
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// Input lines.
    pub script: Vec<String>,
    /// Expected output lines.
    pub expected: Vec<String>,
}

impl ScriptVector {
    fn new(id: &str, description: &str, script: &[&str], expected: &[&str]) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            script: script.iter().map(|s| (*s).to_owned()).collect(),
            expected: expected.iter().map(|s| (*s).to_owned()).collect(),
        }
    }

    /// Returns the script as one newline-terminated string.
    pub fn script_text(&self) -> String {
        self.script.iter().map(|line| format!("{line}\n")).collect()
    }

    /// Returns the expected output as one newline-terminated string.
    pub fn expected_text(&self) -> String {
        self.expected.iter().map(|line| format!("{line}\n")).collect()
    }
}

/// Script vectors covering data commands and nested transactions.
pub fn script_vectors() -> Vec<ScriptVector> {
    vec![
        ScriptVector::new(
            "data_basic",
            "set, get, unset, get",
            &["SET ex 10", "GET ex", "UNSET ex", "GET ex", "END"],
            &["10", "NULL"],
        ),
        ScriptVector::new(
            "count_basic",
            "counts follow re-binding and unset",
            &[
                "SET a 10",
                "SET b 10",
                "NUMEQUALTO 10",
                "NUMEQUALTO 20",
                "SET b 30",
                "NUMEQUALTO 10",
                "UNSET a",
                "NUMEQUALTO 10",
                "END",
            ],
            &["2", "0", "1", "0"],
        ),
        ScriptVector::new(
            "txn_nested_rollback",
            "each rollback discards only the innermost scope",
            &[
                "BEGIN", "SET a 10", "GET a", "BEGIN", "SET a 20", "GET a", "ROLLBACK", "GET a",
                "ROLLBACK", "GET a", "END",
            ],
            &["10", "20", "10", "NULL"],
        ),
        ScriptVector::new(
            "txn_commit_all",
            "commit closes every open scope",
            &[
                "BEGIN", "SET a 30", "BEGIN", "SET a 40", "COMMIT", "GET a", "ROLLBACK", "END",
            ],
            &["40", "NO TRANSACTION"],
        ),
        ScriptVector::new(
            "txn_unset_rollback",
            "unset inside a scope is undone by rollback",
            &[
                "SET a 50", "BEGIN", "GET a", "SET a 60", "BEGIN", "UNSET a", "GET a", "ROLLBACK",
                "GET a", "COMMIT", "GET a", "END",
            ],
            &["50", "NULL", "60", "60"],
        ),
        ScriptVector::new(
            "txn_counts",
            "counts see only the current scope",
            &[
                "SET a 10",
                "BEGIN",
                "NUMEQUALTO 10",
                "BEGIN",
                "UNSET a",
                "NUMEQUALTO 10",
                "ROLLBACK",
                "NUMEQUALTO 10",
                "COMMIT",
                "END",
            ],
            &["1", "0", "1"],
        ),
        ScriptVector::new(
            "no_transaction",
            "commit and rollback with nothing open",
            &["COMMIT", "ROLLBACK", "END"],
            &["NO TRANSACTION", "NO TRANSACTION"],
        ),
        ScriptVector::new(
            "invalid_input",
            "bad lines are reported and skipped",
            &["FLY away", "SET a", "GET a b", "SET a 1", "GET a", "END"],
            &[
                "Invalid command: fly",
                "set: missing value",
                "get: unexpected argument \"b\"",
                "1",
            ],
        ),
    ]
}

/// Returns all script vectors as pretty JSON.
pub fn script_vectors_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&script_vectors())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_ids_are_unique() {
        let vectors = script_vectors();
        let mut ids: Vec<_> = vectors.iter().map(|v| v.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), vectors.len());
    }

    #[test]
    fn json_round_trip() {
        let json = script_vectors_json().unwrap();
        let decoded: Vec<ScriptVector> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, script_vectors());
    }

    #[test]
    fn text_forms() {
        let v = &script_vectors()[0];
        assert!(v.script_text().starts_with("SET ex 10\n"));
        assert_eq!(v.expected_text(), "10\nNULL\n");
    }
}
