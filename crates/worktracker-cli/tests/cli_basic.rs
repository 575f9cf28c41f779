//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against the dev data
//! directory and verify outputs.

use std::process::Command;

/// Run a CLI command against the dev data directory and return output.
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "worktracker-cli", "--"])
        .args(args)
        .env("WORKTRACKER_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_config_list() {
    let (stdout, _, code) = run_cli(&["config", "list"]);
    assert_eq!(code, 0, "config list failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("config list JSON");
    assert!(parsed.get("dailyGoal").is_some());
}

#[test]
fn test_config_get() {
    let (stdout, _, code) = run_cli(&["config", "get", "daily_goal"]);
    assert_eq!(code, 0, "config get failed");
    assert!(!stdout.trim().is_empty());
}

#[test]
fn test_config_get_unknown_key() {
    let (_, stderr, code) = run_cli(&["config", "get", "no_such_key"]);
    assert_ne!(code, 0, "unknown key should fail");
    assert!(stderr.contains("unknown key"));
}

#[test]
fn test_report_today() {
    let (stdout, _, code) = run_cli(&["report", "today"]);
    assert_eq!(code, 0, "report today failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("report JSON");
    assert!(parsed.get("total_points").is_some());
}

#[test]
fn test_report_month() {
    let (_, _, code) = run_cli(&["report", "month"]);
    assert_eq!(code, 0, "report month failed");
}

#[test]
fn test_report_calendar_has_42_cells() {
    let (stdout, _, code) = run_cli(&["report", "calendar"]);
    assert_eq!(code, 0, "report calendar failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("calendar JSON");
    assert_eq!(parsed.as_array().map(Vec::len), Some(42));
}

#[test]
fn test_session_list() {
    let (_, _, code) = run_cli(&["session", "list"]);
    assert_eq!(code, 0, "session list failed");
}

#[test]
fn test_reward_list() {
    let (stdout, _, code) = run_cli(&["reward", "list"]);
    assert_eq!(code, 0, "reward list failed");
    assert!(serde_json::from_str::<serde_json::Value>(&stdout).is_ok());
}

#[test]
fn test_timer_status() {
    let (stdout, _, code) = run_cli(&["timer", "status"]);
    assert_eq!(code, 0, "timer status failed");
    assert!(stdout.contains("StateSnapshot"));
}

#[test]
fn test_timer_presets() {
    let (stdout, _, code) = run_cli(&["timer", "presets"]);
    assert_eq!(code, 0, "timer presets failed");
    let parsed: Vec<u32> = serde_json::from_str(&stdout).expect("presets JSON");
    assert!(parsed.contains(&25));
}
