//! Runs the `embedding-viz` binary in a scratch working directory.
//!
//! Run: cargo test --test binary_test
#![allow(clippy::unwrap_used)]

use std::fs;
use std::process::{Command, Output};

fn run_in(dir: &std::path::Path, rust_log: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_embedding-viz"))
        .current_dir(dir)
        .env("RUST_LOG", rust_log)
        .output()
        .unwrap()
}

#[test]
fn binary_writes_png_to_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), "info");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let bytes = fs::read(dir.path().join("embedding_example.png")).unwrap();
    assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    // Color type 2: RGB.
    assert_eq!(bytes[25], 2);

    // Captured stdout is not a terminal, so no preview is printed.
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("saved figure"));
    assert!(!stderr.contains("display coordinates"));
}

#[test]
fn binary_debug_logging_follows_rust_log() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), "debug");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("display coordinates").count(), 5);
    assert!(stderr.contains("Mouse"));
}

#[test]
fn binary_overwrites_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("embedding_example.png");
    fs::write(&path, b"stale").unwrap();

    assert!(run_in(dir.path(), "warn").status.success());
    assert_eq!(&fs::read(&path).unwrap()[1..4], b"PNG");
}
