//! Assertions over captured shell output.

use std::process::Output;

/// Lossy UTF-8 view of a captured stream.
fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

pub fn stdout(output: &Output) -> String {
    text(&output.stdout)
}

pub fn stderr(output: &Output) -> String {
    text(&output.stderr)
}

/// The shell exits 0 unless reading input or writing output failed.
pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "vaultkeep exited with {}:\n{}",
        output.status,
        stderr(output)
    );
}

pub fn assert_stdout_contains(output: &Output, expected: &str) {
    let out = stdout(output);
    assert!(out.contains(expected), "expected {expected:?} on stdout:\n{out}");
}

pub fn assert_stderr_contains(output: &Output, expected: &str) {
    let err = stderr(output);
    assert!(err.contains(expected), "expected {expected:?} on stderr:\n{err}");
}

pub fn assert_stdout_excludes(output: &Output, excluded: &str) {
    let out = stdout(output);
    assert!(!out.contains(excluded), "unexpected {excluded:?} on stdout:\n{out}");
}
