//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with an isolated config file and verify
//! outputs.

use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(config_dir: &TempDir, args: &[&str], stdin: Option<&str>) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mindset"))
        .args(args)
        .env("MINDSET_CONFIG", config_dir.path().join("config.toml"))
        .env("RUST_LOG", "warn")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI command");

    if let Some(input) = stdin {
        child
            .stdin
            .take()
            .unwrap()
            .write_all(input.as_bytes())
            .unwrap();
    } else {
        drop(child.stdin.take());
    }

    let output = child.wait_with_output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_streak_documented_examples() {
    let dir = TempDir::new().unwrap();
    let dates = ["2024-01-01", "2024-01-02", "2024-01-03"];

    for (today, expected) in [("2024-01-03", "3"), ("2024-01-04", "3"), ("2024-01-05", "0")] {
        let mut args = vec!["streak", "--raw", "--today", today];
        args.extend(dates);
        let (stdout, _, code) = run_cli(&dir, &args, None);
        assert_eq!(code, 0);
        assert_eq!(stdout.trim(), expected, "today = {today}");
    }
}

#[test]
fn test_streak_pluralises() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&dir, &["streak", "--today", "2024-01-01", "2024-01-01"], None);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "1 day");
}

#[test]
fn test_streak_and_completions_leave_no_config_behind() {
    let dir = TempDir::new().unwrap();
    let (_, _, code) = run_cli(&dir, &["streak", "--today", "2024-01-01", "2024-01-01"], None);
    assert_eq!(code, 0);
    let (_, _, code) = run_cli(&dir, &["completions", "bash"], None);
    assert_eq!(code, 0);
    assert!(!dir.path().join("config.toml").exists());
}

#[test]
fn test_broken_config_does_not_stop_streak() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "log = [").unwrap();
    let (stdout, _, code) = run_cli(&dir, &["streak", "--today", "2024-01-01", "2024-01-01"], None);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "1 day");
}

#[test]
fn test_streak_rejects_bad_date() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(&dir, &["streak", "--today", "2024-01-01", "01/02/2024"], None);
    assert_eq!(code, 1);
    assert!(stderr.contains("error: Invalid date '01/02/2024'"));
}

#[test]
fn test_show_learn() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&dir, &["show", "learn"], None);
    assert_eq!(code, 0);
    assert!(stdout.contains("What is a Growth Mindset?"));
}

#[test]
fn test_show_challenge_json() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(
        &dir,
        &["show", "challenge", "--today", "2024-01-03", "--format", "json"],
        None,
    );
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["mode"], "daily_challenge");
    assert_eq!(parsed["page"]["page"], "challenge");
    assert!(parsed["page"]["challenge"].as_str().is_some());
}

#[test]
fn test_show_unknown_mode_fails() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(&dir, &["show", "settings"], None);
    assert_eq!(code, 1);
    assert!(stderr.contains("Unknown menu selection"));
}

#[test]
fn test_shell_session() {
    let dir = TempDir::new().unwrap();
    let script = "challenge\nreflect \nreflect Tried a new approach\nprogress\nquit\n";
    let (stdout, _, code) = run_cli(&dir, &["shell", "--today", "2024-01-03"], Some(script));
    assert_eq!(code, 0);
    assert!(stdout.contains("[warning] Please write something"));
    assert!(stdout.contains("[ok] Reflection saved!"));
    assert!(stdout.contains("January 03, 2024"));
    assert!(stdout.contains("Current Streak: 1 day"));
}

#[test]
fn test_config_get_set_reset() {
    let dir = TempDir::new().unwrap();

    let (stdout, _, code) = run_cli(&dir, &["config", "get", "server.port"], None);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "8501");
    assert!(!dir.path().join("config.toml").exists());

    let (stdout, _, code) = run_cli(&dir, &["config", "list"], None);
    assert_eq!(code, 0);
    assert!(stdout.lines().any(|line| line == "display.recent_limit = 5"));

    let (_, _, code) = run_cli(&dir, &["config", "set", "display.recent_limit", "3"], None);
    assert_eq!(code, 0);
    let (stdout, _, _) = run_cli(&dir, &["config", "get", "display.recent_limit"], None);
    assert_eq!(stdout.trim(), "3");

    let (_, _, code) = run_cli(&dir, &["config", "set", "server.port", "abc"], None);
    assert_eq!(code, 1);

    let (_, _, code) = run_cli(&dir, &["config", "reset"], None);
    assert_eq!(code, 0);
    let (stdout, _, _) = run_cli(&dir, &["config", "get", "display.recent_limit"], None);
    assert_eq!(stdout.trim(), "5");
}

#[test]
fn test_config_unknown_key() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(&dir, &["config", "get", "ui.dark_mode"], None);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown config key: ui.dark_mode"));
}
