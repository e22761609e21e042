//! Command-line behaviour of the herotype binary

use std::time::Duration;

use assert_cmd::Command;
use predicates::prelude::*;

use crate::helpers::{fast_config, run_herotype, write_config};

fn herotype() -> Command {
    let mut cmd = Command::cargo_bin("herotype").expect("binary should build");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn play_one_cycle_prints_every_frame_on_its_own_line() {
    let (_dir, config) = fast_config(&["A", "BC"]);
    let config = config.to_string_lossy();

    let (stdout, stderr, code) = run_herotype(&["play", "--config", &config, "--cycles", "1"]);

    assert_eq!(code, 0, "stderr: {stderr}");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["A", "", "B", "BC", "B", ""]);
}

#[test]
fn play_role_flags_replace_configured_roles() {
    let (_dir, config) = fast_config(&["ignored"]);
    let config = config.to_string_lossy();

    let (stdout, _, code) = run_herotype(&[
        "play", "--config", &config, "--role", "X", "--cycles", "2",
    ]);

    assert_eq!(code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["X", "", "X", ""]);
}

#[test]
fn play_zero_cycles_prints_nothing() {
    let (_dir, config) = fast_config(&["A"]);

    herotype()
        .args(["play", "--cycles", "0", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn play_rejects_an_empty_role() {
    let (_dir, config) = fast_config(&["A"]);

    herotype()
        .args(["play", "--role", "", "--cycles", "1", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Role 0 is empty"));
}

#[test]
fn play_reports_invalid_config_file() {
    let (_dir, config) = write_config("theme = [");

    herotype()
        .args(["play", "--cycles", "1", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"))
        .stderr(predicate::str::contains("Invalid TOML"));
}

#[test]
fn config_errors_print_each_cause_once() {
    let (_dir, config) = write_config(
        "[timing]\nhold_after_typing_ms = 18446744073709551615\n",
    );

    let assert = herotype()
        .args(["play", "--cycles", "1", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .code(1);

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert_eq!(stderr.matches("TOML parse error").count(), 1, "{stderr}");
    assert_eq!(stderr.matches("Invalid TOML in").count(), 1, "{stderr}");
}

#[test]
fn missing_config_reports_io_cause_once() {
    let (_, stderr, code) = run_herotype(&[
        "play",
        "--config",
        "/nonexistent/herotype/config.toml",
    ]);

    assert_eq!(code, 1);
    assert_eq!(stderr.matches("Failed to read config").count(), 1, "{stderr}");
    assert_eq!(stderr.matches("os error").count(), 1, "{stderr}");
}

#[test]
fn hero_without_terminal_falls_back_to_line_mode() {
    let (_dir, config) = write_config(
        r#"
[hero]
roles = ["A"]

[timing]
type_interval_ms = 20
hold_after_typing_ms = 20
erase_interval_ms = 20
hold_after_erasing_ms = 20
"#,
    );

    // Runs until killed; stdout is a pipe, so it must not enter the TUI
    let assert = herotype()
        .args(["hero", "--config"])
        .arg(&config)
        .timeout(Duration::from_millis(500))
        .assert();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.starts_with("A\n\nA"), "{stdout:?}");
    assert!(!stdout.contains("\x1b[?1049h"), "entered the alternate screen");
}

#[test]
fn hero_reports_missing_config_file() {
    herotype()
        .args(["hero", "--config", "/nonexistent/herotype/config.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}

#[test]
fn verbose_play_logs_summary_to_stderr() {
    let (_dir, config) = fast_config(&["A"]);

    herotype()
        .args(["-v", "play", "--cycles", "1", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stderr(predicate::str::contains("playback finished"));
}

#[test]
fn log_file_receives_logs_instead_of_stderr() {
    let (dir, config) = fast_config(&["A"]);
    let log = dir.path().join("herotype.log");

    herotype()
        .args(["-v", "play", "--cycles", "1", "--config"])
        .arg(&config)
        .arg("--log-file")
        .arg(&log)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    let logged = std::fs::read_to_string(&log).unwrap();
    assert!(logged.contains("playback finished"));
}

#[test]
fn completions_bash_mentions_binary() {
    herotype()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("herotype"));
}

#[test]
fn help_lists_subcommands() {
    let (stdout, _, code) = run_herotype(&["--help"]);

    assert_eq!(code, 0);
    for command in ["hero", "play", "config", "completions"] {
        assert!(stdout.contains(command), "help is missing {command}");
    }
}

#[test]
fn version_includes_package_version() {
    herotype()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_fails() {
    herotype().arg("dance").assert().failure();
}
