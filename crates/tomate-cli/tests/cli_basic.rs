//! Basic CLI E2E tests.
//!
//! Commands run against the dev data directory (TOMATE_ENV=dev) so the
//! user's real snapshot is never touched.

use std::process::Command;

fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "tomate-cli", "--"])
        .args(args)
        .env("TOMATE_ENV", "dev")
        .output()
        .expect("failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn config_list_prints_settings_json() {
    let (stdout, _, code) = run_cli(&["config", "list"]);
    assert_eq!(code, 0, "config list failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("settings JSON");
    assert!(parsed["work_seconds"].is_number());
    assert!(parsed["reminder_mode"].is_string());
}

#[test]
fn config_set_then_get_roundtrips() {
    let (_, _, code) = run_cli(&["config", "set", "long_break_seconds", "900"]);
    assert_eq!(code, 0, "config set failed");
    let (stdout, _, code) = run_cli(&["config", "get", "long_break_seconds"]);
    assert_eq!(code, 0, "config get failed");
    assert_eq!(stdout.trim(), "900");
}

#[test]
fn config_set_rejects_zero_duration() {
    let (_, stderr, code) = run_cli(&["config", "set", "work_seconds", "0"]);
    assert_ne!(code, 0, "zero duration must be rejected");
    assert!(stderr.contains("work_seconds"));
}

#[test]
fn config_get_unknown_key_fails() {
    let (_, _, code) = run_cli(&["config", "get", "no_such_key"]);
    assert_ne!(code, 0);
}

#[test]
fn task_add_and_list() {
    let (stdout, _, code) = run_cli(&["task", "add", "E2E task", "--date", "2026-02-14"]);
    assert_eq!(code, 0, "task add failed");
    assert!(stdout.contains("task created:"));

    let (stdout, _, code) = run_cli(&["task", "list", "--date", "2026-02-14", "--json"]);
    assert_eq!(code, 0, "task list failed");
    let tasks: serde_json::Value = serde_json::from_str(&stdout).expect("task list JSON");
    assert!(tasks
        .as_array()
        .unwrap()
        .iter()
        .any(|t| t["title"] == "E2E task"));
}

#[test]
fn task_add_rejects_blank_title() {
    let (_, _, code) = run_cli(&["task", "add", "   "]);
    assert_ne!(code, 0, "blank title must be rejected");
}

#[test]
fn cal_show_renders_six_weeks() {
    let (stdout, _, code) = run_cli(&["cal", "show", "--month", "2026-02"]);
    assert_eq!(code, 0, "cal show failed");
    assert!(stdout.contains("February 2026"));
    assert!(stdout.contains("Su"));
    // Header + weekday row + 6 week rows + legend.
    let grid_rows = stdout
        .lines()
        .filter(|l| l.contains('[') || l.chars().filter(|c| c.is_ascii_digit()).count() >= 7)
        .count();
    assert!(grid_rows >= 6, "expected 6 week rows, got:\n{stdout}");
}

#[test]
fn timer_status_is_valid_json() {
    let (stdout, _, code) = run_cli(&["timer", "status"]);
    assert_eq!(code, 0, "timer status failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("timer JSON");
    assert!(parsed["remaining_seconds"].is_number());
}

#[test]
fn timer_mode_switch_is_persisted() {
    let (_, _, code) = run_cli(&["timer", "mode", "long-break"]);
    assert_eq!(code, 0, "timer mode failed");
    let (stdout, _, code) = run_cli(&["timer", "status"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["mode"], "long_break");
    // Leave the dev engine back at the default mode.
    let (_, _, code) = run_cli(&["timer", "mode", "work"]);
    assert_eq!(code, 0);
}
