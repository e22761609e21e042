//! `config` subcommands against files in temp directories

use crate::helpers::{run_herotype, write_config};

use herotype::Config;
use tempfile::TempDir;

#[test]
fn init_writes_default_config_that_show_reads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let path_arg = path.to_string_lossy();

    let (stdout, stderr, code) = run_herotype(&["config", "init", "--path", &path_arg]);
    assert_eq!(code, 0, "stderr: {stderr}");
    assert!(stdout.contains("Config written to"));
    assert!(path.exists());

    let (shown, _, code) = run_herotype(&["config", "show", "--config", &path_arg]);
    assert_eq!(code, 0);
    let parsed: Config = toml::from_str(&shown).unwrap();
    assert_eq!(parsed, Config::default());
}

#[test]
fn init_keeps_existing_file_without_force() {
    let (_dir, path) = write_config("theme = \"ocean\"\n");
    let path_arg = path.to_string_lossy();

    // stdin is not a terminal here, so the confirmation prompt declines
    let (stdout, _, code) = run_herotype(&["config", "init", "--path", &path_arg]);

    assert_eq!(code, 0);
    assert!(stdout.contains("No changes made"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "theme = \"ocean\"\n");
}

#[test]
fn init_force_overwrites_existing_file() {
    let (_dir, path) = write_config("theme = \"ocean\"\n");
    let path_arg = path.to_string_lossy();

    let (_, _, code) = run_herotype(&["config", "init", "--force", "--path", &path_arg]);

    assert_eq!(code, 0);
    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, Config::default());
}

#[test]
fn show_json_is_valid_json() {
    let (_dir, path) = write_config(
        r#"
theme = "classic"

[hero]
roles = ["One", "Two"]

[[skills]]
name = "Rust"
percentage = 90
"#,
    );
    let path_arg = path.to_string_lossy();

    let (stdout, _, code) = run_herotype(&["config", "show", "--json", "--config", &path_arg]);

    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["theme"], "classic");
    assert_eq!(json["hero"]["roles"][1], "Two");
    assert_eq!(json["skills"][0]["percentage"], 90);
}

#[test]
fn show_rejects_unknown_theme() {
    let (_dir, path) = write_config("theme = \"neon\"\n");
    let path_arg = path.to_string_lossy();

    let (_, stderr, code) = run_herotype(&["config", "show", "--config", &path_arg]);

    assert_eq!(code, 1);
    assert!(stderr.contains("Unknown theme 'neon'"));
}

#[test]
fn show_rejects_out_of_range_skill() {
    let (_dir, path) = write_config("[[skills]]\nname = \"Go\"\npercentage = 140\n");
    let path_arg = path.to_string_lossy();

    let (_, stderr, code) = run_herotype(&["config", "show", "--config", &path_arg]);

    assert_eq!(code, 1);
    assert!(stderr.contains("Skill 'Go' has percentage 140"));
}

#[test]
fn show_rejects_empty_role_list() {
    let (_dir, path) = write_config("[hero]\nroles = []\n");
    let path_arg = path.to_string_lossy();

    let (_, stderr, code) = run_herotype(&["config", "show", "--config", &path_arg]);

    assert_eq!(code, 1);
    assert!(stderr.contains("Role list is empty"));
}
