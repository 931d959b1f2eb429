//! Shared helpers for integration tests.

use assert_cmd::Command;

/// Terminal width used by every CLI test.
pub const COLUMNS: &str = "80";

/// A `techo` command with a fixed terminal width and logging off.
pub fn techo() -> Command {
    let mut cmd = Command::cargo_bin("techo").expect("techo binary should be built");
    cmd.env("COLUMNS", COLUMNS).env_remove("TECHO_LOG");
    cmd
}

/// Run techo with `args` and `stdin`, returning (stdout, stderr, exit code).
pub fn run_techo(args: &[&str], stdin: &str) -> (String, String, i32) {
    let output = techo()
        .args(args)
        .write_stdin(stdin)
        .output()
        .expect("Failed to execute techo");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Remove SGR escape sequences, leaving only the printed text.
pub fn strip_sgr(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_escape = false;
    for c in text.chars() {
        match (in_escape, c) {
            (false, '\x1b') => in_escape = true,
            (true, 'm') => in_escape = false,
            (true, _) => {}
            (false, c) => result.push(c),
        }
    }
    result
}

/// Printed characters other than whitespace.
pub fn visible(text: &str) -> String {
    strip_sgr(text).chars().filter(|c| !c.is_whitespace()).collect()
}
