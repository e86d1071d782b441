//! Command-line behavior that needs no database server.

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use std::process::Command;

fn db2struct() -> Command {
    Command::new(env!("CARGO_BIN_EXE_db2struct"))
}

#[test]
fn test_missing_arguments_print_usage_and_succeed() {
    let output = db2struct().output().expect("run db2struct");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains(r#""root:123456@(127.0.0.1:3306)/test" ./models "user,address""#));
}

#[test]
fn test_single_argument_prints_usage() {
    let output = db2struct()
        .arg("root:123456@(127.0.0.1:3306)/test")
        .output()
        .expect("run db2struct");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage:"));
}

#[test]
fn test_missing_output_directory_exits_before_connecting() {
    let base = tempfile::tempdir().expect("tempdir");

    // Nothing listens on port 9; the directory check must fail first.
    let output = db2struct()
        .current_dir(base.path())
        .args(["root@tcp(127.0.0.1:9)/test", "missing"])
        .output()
        .expect("run db2struct");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.starts_with("Invalid path(missing): "));
}

#[test]
fn test_file_as_output_directory_is_rejected() {
    let base = tempfile::tempdir().expect("tempdir");
    std::fs::write(base.path().join("models"), "").expect("write");

    let output = db2struct()
        .current_dir(base.path())
        .args(["root@tcp(127.0.0.1:9)/test", "models"])
        .output()
        .expect("run db2struct");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim_end(),
        "Invalid path(models): not a directory"
    );
}

#[test]
fn test_unreachable_server_fails() {
    let dir = tempfile::tempdir().expect("tempdir");

    let output = db2struct()
        .args([
            "mysql://root@127.0.0.1:9/test?connect_timeout=1",
            &dir.path().to_string_lossy(),
        ])
        .output()
        .expect("run db2struct");

    assert!(!output.status.success());
    assert!(std::fs::read_dir(dir.path()).expect("read dir").next().is_none());
}
