//! End-to-end tests driving the gq binary with piped stdin.
//!
//! Argument mode needs an interactive stdin and is covered in `commands_test.rs`.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Run gq with `args`, feeding `stdin`; HOME points at `home` so no user config leaks in.
fn gq(home: &Path, args: &[&str], stdin: &str) -> Output {
    gq_bytes(home, args, stdin.as_bytes())
}

fn gq_bytes(home: &Path, args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_gq"))
        .args(args)
        .env("HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("GQ_CONFIG")
        .env_remove("GQ_QUESTION")
        .env_remove("GQ_ECHO_QUESTION")
        .env_remove("GQ_VERBOSE")
        .env_remove("GQ_DEBUG")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn gq");

    // gq may exit before reading (e.g. missing question), so a broken pipe is fine
    let mut pipe = child.stdin.take().expect("stdin handle");
    let _ = pipe.write_all(stdin);
    drop(pipe);

    child.wait_with_output().expect("wait for gq")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("utf8 stderr")
}

#[test]
fn given_piped_lines_when_running_then_echo_and_uppercase_answers() {
    let home = TempDir::new().unwrap();

    let output = gq(home.path(), &["-q", "x"], "a\nb\n");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "x\nXA\nXB\n");
}

#[test]
fn given_empty_pipe_when_running_then_only_echo() {
    let home = TempDir::new().unwrap();

    let output = gq(home.path(), &["--question", "Color?"], "");

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Color?\n");
}

#[test]
fn given_empty_question_when_running_then_fails_without_output() {
    let home = TempDir::new().unwrap();

    let output = gq(home.path(), &["-q", ""], "a\nb\n");

    assert_eq!(output.status.code(), Some(64));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("no question provided"));
}

#[test]
fn given_no_question_when_running_then_fails() {
    let home = TempDir::new().unwrap();

    let output = gq(home.path(), &[], "a\n");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn given_question_in_default_config_when_piping_then_used() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join(".gq.yaml"), "question: cfg\n").unwrap();

    let output = gq(home.path(), &[], "z\n");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "cfg\nCFGZ\n");
}

#[test]
fn given_explicit_config_disabling_echo_when_piping_then_answers_only() {
    let home = TempDir::new().unwrap();
    let cfg = home.path().join("gq.toml");
    std::fs::write(&cfg, "echo_question = false\n").unwrap();

    let output = gq(
        home.path(),
        &["-q", "x", "-c", cfg.to_str().unwrap()],
        "a\n",
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "XA\n");
}

#[test]
fn given_missing_explicit_config_when_running_then_config_exit_code() {
    let home = TempDir::new().unwrap();

    let output = gq(home.path(), &["-q", "x", "-c", "/nonexistent/gq.yaml"], "a\n");

    assert_eq!(output.status.code(), Some(78));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("config error"));
}

#[test]
fn given_accepted_flags_when_piping_then_stdout_unchanged() {
    let home = TempDir::new().unwrap();

    let output = gq(home.path(), &["-q", "x", "-t", "-v", "-x"], "a\n");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "x\nXA\n");
}

#[test]
fn given_completions_flag_when_running_then_prints_script() {
    let home = TempDir::new().unwrap();

    let output = gq(home.path(), &["--completions", "bash"], "");

    assert!(output.status.success());
    assert!(stdout(&output).contains("gq"));
}

#[test]
fn given_unknown_flag_when_running_then_clap_usage_error() {
    let home = TempDir::new().unwrap();

    let output = gq(home.path(), &["--nope"], "");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn given_invalid_utf8_line_when_piping_then_all_lines_answered() {
    let home = TempDir::new().unwrap();

    let output = gq_bytes(home.path(), &["-q", "x"], b"a\n\xffb\nc\n");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "x\nXA\nX\u{FFFD}B\nXC\n");
}

#[test]
fn given_non_boolean_verbose_env_when_running_then_config_error() {
    let home = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_gq"))
        .args(["-q", "x"])
        .env("HOME", home.path())
        .env("GQ_VERBOSE", "loud")
        .env_remove("GQ_CONFIG")
        .env_remove("GQ_DEBUG")
        .stdin(Stdio::null())
        .output()
        .expect("run gq");

    assert_eq!(output.status.code(), Some(78));
    assert!(output.stdout.is_empty());
}
