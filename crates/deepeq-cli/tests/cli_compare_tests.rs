//! CLI compare integration tests
//!
//! These tests run the built `deepeq` binary against documents written to a
//! temporary directory and check the verdict, exit code and mismatch trace.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn deepeq(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_deepeq"))
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn compare(left: &PathBuf, right: &PathBuf, extra: &[&str]) -> Output {
    let mut args = vec![
        "compare",
        left.to_str().unwrap(),
        right.to_str().unwrap(),
        "--log-format",
        "json",
    ];
    args.extend_from_slice(extra);
    deepeq(&args)
}

#[test]
fn test_equal_documents_exit_zero() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.json", r#"{"id": 1, "tags": ["x", "y"]}"#);
    let b = write(&dir, "b.json", r#"{"tags": ["x", "y"], "id": 1.0}"#);

    let output = compare(&a, &b, &[]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "equal");
}

#[test]
fn test_different_documents_exit_one_with_trace() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.json", r#"{"name": "ada", "city": "Paris"}"#);
    let b = write(&dir, "b.json", r#"{"name": "bob", "city": "Paris"}"#);

    let output = compare(&a, &b, &[]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "not equal");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(r#""path":"$.name""#), "stderr: {}", stderr);
    assert!(!stderr.contains(r#""path":"$.city""#), "stderr: {}", stderr);
}

#[test]
fn test_ignore_flag_suppresses_fields() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.json", r#"{"id": 1, "updated": "t1", "body": "x"}"#);
    let b = write(&dir, "b.json", r#"{"id": 2, "updated": "t2", "body": "x"}"#);

    assert_eq!(compare(&a, &b, &[]).status.code(), Some(1));
    let output = compare(&a, &b, &["--ignore", "id", "-i", "updated"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_mixed_formats() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.yaml", "name: svc\nports:\n  - 80\n  - 443\n");
    let b = write(&dir, "b.toml", "name = \"svc\"\nports = [80, 443]\n");

    let output = compare(&a, &b, &[]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_config_file_supplies_ignore_list() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.json", r#"{"id": 1, "v": [1, 2]}"#);
    let b = write(&dir, "b.json", r#"{"id": 9, "v": [1, 2]}"#);
    let config = write(&dir, "opts.toml", "ignore_fields = [\"id\"]\n");

    let output = compare(&a, &b, &["--config", config.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_depth_limit_is_an_error() {
    let dir = TempDir::new().unwrap();
    let doc = r#"{"a": {"b": {"c": {"d": 1}}}}"#;
    let a = write(&dir, "a.json", doc);
    let b = write(&dir, "b.json", doc);

    let output = compare(&a, &b, &["--max-depth", "2"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_DEPTH_LIMIT"), "stderr: {}", stderr);
}

#[test]
fn test_unparseable_document_is_an_error() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.json", "{broken");
    let b = write(&dir, "b.json", "{}");

    let output = compare(&a, &b, &[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_PARSE"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.json", "{}");
    let missing = dir.path().join("missing.json");

    let output = compare(&a, &missing, &[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_IO"));
}

#[test]
fn test_unsupported_extension_is_an_error() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.txt", "{}");
    let b = write(&dir, "b.json", "{}");

    let output = compare(&a, &b, &[]);
    assert_eq!(output.status.code(), Some(2));
}
