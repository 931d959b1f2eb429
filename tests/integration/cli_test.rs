//! Integration tests for the techo CLI

use std::io::Write;

use predicates::prelude::*;
use tempfile::NamedTempFile;

use crate::helpers::{run_techo, strip_sgr, techo, visible};

// ============================================================================
// Message Sources
// ============================================================================

#[test]
fn args_are_printed_beside_the_face() {
    let (stdout, stderr, exit_code) = run_techo(&["hello", "world"], "");

    assert_eq!(exit_code, 0);
    assert!(stderr.is_empty());
    assert_eq!(visible(&stdout), "helloworld");
    assert!(stdout.contains("\x1b[48;2;255;0;38m"), "face should be drawn");
    assert!(stdout.ends_with("\x1b[0m"));
}

#[test]
fn stdin_is_read_when_no_args() {
    let (stdout, _stderr, exit_code) = run_techo(&[], "hello\nworld\n");

    assert_eq!(exit_code, 0);
    assert_eq!(visible(&stdout), "helloworld");
}

#[test]
fn args_and_file_render_identically() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "hello world").unwrap();
    let path = file.path().to_str().unwrap();

    let (from_args, _, _) = run_techo(&["hello", "world"], "");
    let (from_file, _, exit_code) = run_techo(&["-f", path], "");

    assert_eq!(exit_code, 0);
    assert_eq!(from_args, from_file);
}

#[test]
fn file_wins_over_args() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "from file").unwrap();
    let path = file.path().to_str().unwrap();

    let (stdout, _, _) = run_techo(&["-f", path, "from", "args"], "");
    assert_eq!(visible(&stdout), "fromfile");
}

#[test]
fn quiet_prints_face_only() {
    let (stdout, _stderr, exit_code) = run_techo(&["-q", "secret"], "also secret\n");

    assert_eq!(exit_code, 0);
    assert_eq!(visible(&stdout), "");
    assert!(stdout.contains("\x1b[48;2;"));
}

#[test]
fn double_dash_allows_dash_message() {
    let (stdout, _stderr, exit_code) = run_techo(&["--", "-q"], "");

    assert_eq!(exit_code, 0);
    assert_eq!(visible(&stdout), "-q");
}

// ============================================================================
// Layout Options
// ============================================================================

#[test]
fn whole_face_has_28_rows() {
    let (stdout, _, _) = run_techo(&["hi"], "");
    assert_eq!(stdout.matches('\n').count(), 28);
}

#[test]
fn reduce_flag_shrinks_face() {
    let (stdout, _, _) = run_techo(&["-d", "hi"], "");
    assert_eq!(stdout.matches('\n').count(), 6);
}

#[test]
fn reduce_flag_grows_window_with_message() {
    let message: String = (1..=20).map(|n| format!("line {}\n", n)).collect();
    let (stdout, _, _) = run_techo(&["-d"], &message);
    assert_eq!(stdout.matches('\n').count(), 21);
}

#[test]
fn face_flags_select_different_faces() {
    let (default_face, _, _) = run_techo(&["-q"], "");
    let (face0, _, _) = run_techo(&["-q", "-0"], "");
    let (face1, _, _) = run_techo(&["-q", "-1"], "");

    assert_eq!(default_face, face0);
    assert_ne!(face0, face1);
}

#[test]
fn left_alignment_puts_message_after_face() {
    let (stdout, _, exit_code) = run_techo(&["-l", "hi"], "");
    assert_eq!(exit_code, 0);

    let text = strip_sgr(&stdout);
    let line = text
        .lines()
        .find(|line| line.contains("hi"))
        .expect("message line");
    // 25 pixels of face come first
    assert!(line.starts_with(&" ".repeat(50)));
    assert_eq!(line.trim_end(), format!("{}hi", " ".repeat(50)));
}

#[test]
fn form_feed_and_unicode_separators_split_lines() {
    for separator in ["\x0b", "\x0c", "\x1c", "\u{85}", "\u{2028}", "\u{2029}"] {
        let (stdout, _, exit_code) = run_techo(&["-l"], &format!("a{}b", separator));
        assert_eq!(exit_code, 0);

        let text = strip_sgr(&stdout);
        let rows: Vec<&str> = text.lines().map(str::trim).collect();
        let a = rows.iter().position(|row| *row == "a");
        let b = rows.iter().position(|row| *row == "b");
        assert!(a.is_some(), "separator {:?}: {:?}", separator, rows);
        assert_eq!(b, a.map(|row| row + 1), "separator {:?}", separator);
    }
}

#[test]
fn left_alignment_works_on_narrow_terminal() {
    let output = techo().env("COLUMNS", "30").args(["-l", "hi"]).output().unwrap();
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn narrow_screen_prints_only_warning() {
    techo()
        .env("COLUMNS", "40")
        .arg("hello")
        .assert()
        .success()
        .stdout("")
        .stderr("warning: too narrow screen\n");
}

#[test]
fn face_needs_more_than_twice_its_width() {
    techo()
        .env("COLUMNS", "50")
        .arg("-q")
        .assert()
        .stdout("")
        .stderr(predicate::str::contains("too narrow"));

    techo()
        .env("COLUMNS", "51")
        .arg("-q")
        .assert()
        .success()
        .stderr("");
}

#[test]
fn unknown_flag_shows_usage() {
    let (stdout, stderr, exit_code) = run_techo(&["-x"], "");

    assert_eq!(exit_code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Usage"));
}

#[test]
fn missing_file_is_an_error() {
    let (stdout, stderr, exit_code) = run_techo(&["-f", "/nonexistent/techo.txt"], "");

    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("/nonexistent/techo.txt"));
}

// ============================================================================
// Help Output
// ============================================================================

#[test]
fn help_lists_options() {
    techo()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Teto's echo"))
        .stdout(predicate::str::contains("-f <TEXT_FILE>"))
        .stdout(predicate::str::contains("[MESSAGE]..."));
}

#[test]
fn version_is_printed() {
    techo()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("techo "));
}
