//! End-to-end tests running the `nestkv` binary on script files.

use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn run_script(script: &str, extra_args: &[&str]) -> Output {
    let mut file = NamedTempFile::new().expect("create script");
    file.write_all(script.as_bytes()).expect("write script");

    Command::new(env!("CARGO_BIN_EXE_nestkv"))
        .arg("--script")
        .arg(file.path())
        .args(extra_args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run nestkv")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn script_prints_results() {
    let output = run_script(
        "SET ex 10\nGET ex\nUNSET ex\nGET ex\nEND\n",
        &[],
    );
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "10\nNULL\n");
}

#[test]
fn script_transactions() {
    let output = run_script(
        "SET a 50\nBEGIN\nGET a\nSET a 60\nBEGIN\nUNSET a\nGET a\nROLLBACK\nGET a\nCOMMIT\nGET a\nEND\n",
        &[],
    );
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "50\nNULL\n60\n60\n");
}

#[test]
fn script_without_end_stops_at_eof() {
    let output = run_script("set a 1\nnumequalto 1\n", &[]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "1\n");
}

#[test]
fn stats_json_on_stderr() {
    let output = run_script("set a 1\nbegin\ncommit\nrollback\n", &["--stats-json"]);
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    let stats: serde_json::Value = serde_json::from_str(&stderr).expect("stats json");
    assert_eq!(stats["writes"], 1);
    assert_eq!(stats["commits"], 1);
    assert_eq!(stats["no_transaction"], 1);
}

#[test]
fn max_depth_flag() {
    let output = run_script("begin\nbegin\nbegin\n", &["--max-depth", "2"]);
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "transaction depth limit of 2 reached\n"
    );
}

#[test]
fn missing_script_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_nestkv"))
        .args(["--script", "/nonexistent/nestkv-script.txt"])
        .output()
        .expect("run nestkv");
    assert!(!output.status.success());
}
