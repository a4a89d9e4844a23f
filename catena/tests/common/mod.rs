//! Shared helpers for integration tests

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Path of the compiled `catena` binary
pub fn binary() -> &'static str {
    env!("CARGO_BIN_EXE_catena")
}

/// Create a file under `dir` and return its path
pub fn create_file(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write test file");
    path
}

/// Deterministic bytes covering every byte value
pub fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 % 256) as u8).collect()
}

/// Run the binary with `args` and no stdin
pub fn run<P: AsRef<Path>>(args: &[P]) -> Output {
    Command::new(binary())
        .args(args.iter().map(|a| <P as AsRef<Path>>::as_ref(a)))
        .stdin(Stdio::null())
        .output()
        .expect("Failed to run catena")
}

/// Run the binary with `args`, feeding `input` on stdin
pub fn run_with_stdin<P: AsRef<Path>>(args: &[P], input: &[u8]) -> Output {
    let mut child = Command::new(binary())
        .args(args.iter().map(|a| <P as AsRef<Path>>::as_ref(a)))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn catena");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input)
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for catena")
}

/// Stderr split into lines
pub fn stderr_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stderr)
        .lines()
        .map(str::to_string)
        .collect()
}
