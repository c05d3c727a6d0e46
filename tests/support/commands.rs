//! Command helpers.

use assert_cmd::Command;
use std::process::Output;

/// Create a vaultkeep command with a clean environment.
///
/// Color and log overrides from the caller's environment are removed so
/// output is stable.
pub fn cmd() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("vaultkeep").expect("failed to find vaultkeep binary");
    cmd.env_remove("VAULTKEEP_LOG");
    cmd.env_remove("VAULTKEEP_PROMPT");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Run `vaultkeep shell` with the given lines on stdin.
pub fn shell(lines: &[&str]) -> Output {
    let mut input = lines.join("\n");
    input.push('\n');

    cmd()
        .arg("shell")
        .write_stdin(input)
        .output()
        .expect("failed to run vaultkeep shell")
}
