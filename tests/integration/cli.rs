//! Running the compiled binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use crate::common::{write_corpus, FIXTURES_DIR, PYTHON_CREATOR_SENTENCE};

fn askdocs() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_askdocs"));
    cmd.env("NO_COLOR", "1").env_remove("ASKDOCS_LOG");
    cmd
}

fn run(args: &[&str]) -> Output {
    askdocs().args(args).output().expect("Failed to run askdocs")
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = askdocs()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn askdocs");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_query_flag_prints_answer() {
    let output = run(&[FIXTURES_DIR, "--query", "Who created Python?"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end(), PYTHON_CREATOR_SENTENCE);
}

#[test]
fn test_query_from_prompt() {
    let output = run_with_stdin(&[FIXTURES_DIR], "Who created Python?\n");
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("Query: "));
    assert!(out.contains(PYTHON_CREATOR_SENTENCE));
}

#[test]
fn test_closed_stdin_fails() {
    let output = run_with_stdin(&[FIXTURES_DIR], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("no query given"));
}

#[test]
fn test_counts_control_output_lines() {
    let output = run(&[FIXTURES_DIR, "-q", "programming language", "-f", "2", "-s", "2"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).lines().count(), 2);
}

#[test]
fn test_stop_word_query_prints_nothing() {
    let output = run(&[FIXTURES_DIR, "-q", "what is the"]);
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("no searchable words"));
}

#[test]
fn test_json_output() {
    let output = run(&[FIXTURES_DIR, "-q", "Who created Python?", "--json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["query"], serde_json::json!(["created", "python"]));
    assert_eq!(value["files"][0]["id"], "python");
    assert_eq!(value["sentences"][0]["text"], PYTHON_CREATOR_SENTENCE);
}

#[test]
fn test_explain_output() {
    let output = run(&[FIXTURES_DIR, "-q", "Who created Python?", "--explain"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("FILES"));
    assert!(out.contains("SENTENCES"));
    assert!(out.contains("python"));
    // Plain output: no escape codes under NO_COLOR.
    assert!(!out.contains('\x1b'));
}

#[test]
fn test_explain_conflicts_with_json() {
    let output = run(&[FIXTURES_DIR, "-q", "python", "--explain", "--json"]);
    assert!(!output.status.success());
}

// ============================================================================
// USAGE AND LOAD ERRORS
// ============================================================================

#[test]
fn test_missing_argument_is_usage_error() {
    let output = run(&[]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_extra_argument_is_usage_error() {
    let output = run(&[FIXTURES_DIR, "extra", "-q", "python"]);
    assert!(!output.status.success());
}

#[test]
fn test_missing_corpus_directory() {
    let output = run(&["does/not/exist", "-q", "python"]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("failed to load corpus from does/not/exist"));
    assert!(err.contains("not a directory"));
}

#[test]
fn test_invalid_utf8_corpus() {
    let dir = write_corpus(&[("good.txt", "Fine.")]);
    std::fs::write(dir.path().join("bad.txt"), [0xff, 0xfe]).unwrap();
    let output = run(&[dir.path().to_str().unwrap(), "-q", "fine"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("is not valid UTF-8"));
}
