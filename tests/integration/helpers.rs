//! Shared helpers for integration tests

use std::cell::Cell;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{Duration, Instant};

use herotype::typewriter::Clock;
use tempfile::TempDir;

/// Config with zero delays and the given roles, written to a temp dir.
///
/// Returns the temp dir (keep it alive) and the config path.
pub fn fast_config(roles: &[&str]) -> (TempDir, PathBuf) {
    let roles = roles
        .iter()
        .map(|r| format!("{:?}", r))
        .collect::<Vec<_>>()
        .join(", ");
    write_config(&format!(
        r#"
[hero]
title = "Test"
roles = [{roles}]

[timing]
type_interval_ms = 0
hold_after_typing_ms = 0
erase_interval_ms = 0
hold_after_erasing_ms = 0
"#
    ))
}

/// Write `content` as config.toml in a fresh temp dir.
pub fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

/// Run the herotype binary and capture (stdout, stderr, exit code).
pub fn run_herotype(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_herotype"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute herotype");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Clock that only advances when slept on.
pub struct ManualClock {
    now: Cell<Instant>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Cell::new(Instant::now()),
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }

    fn sleep(&self, duration: Duration) {
        self.now.set(self.now.get() + duration);
    }
}
