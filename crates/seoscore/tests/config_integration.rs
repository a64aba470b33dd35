//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, and precedence
//! from an end-to-end perspective using the compiled binary. Tests use
//! `info --json` to assert actual config values, not just process success.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    for var in ["SEOSCORE_MIN_SCORE", "SEOSCORE_MIN_READABILITY", "SEOSCORE_LOG_LEVEL"] {
        cmd.env_remove(var);
    }
    cmd
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &std::path::Path) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Config File Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "info");
    assert_eq!(json["config"]["content_format"], "html");
    assert!(json["config"]["config_file"].is_null());
    assert!(json["config"]["min_score"].is_null());
}

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".seoscore.toml"), "min_score = 60\n").unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["min_score"], 60);
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(reported.ends_with(".seoscore.toml"), "should report dotfile: {reported}");
}

#[test]
fn discovers_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("content").join("posts");
    fs::create_dir_all(&sub_dir).unwrap();
    fs::write(tmp.path().join(".seoscore.toml"), "min_readability = 45\n").unwrap();

    let json = info_json(&sub_dir);

    assert_eq!(json["config"]["min_readability"], 45);
}

#[test]
fn regular_name_overrides_dotfile() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".seoscore.toml"), "min_score = 40\n").unwrap();
    fs::write(tmp.path().join("seoscore.toml"), "min_score = 80\n").unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["min_score"], 80, "regular file should override dotfile");
}

// =============================================================================
// Config Format Parsing
// =============================================================================

#[test]
fn parses_every_supported_format() {
    let cases = [
        (".seoscore.toml", "content_format = \"text\"\n"),
        (".seoscore.yaml", "content_format: text\n"),
        (".seoscore.yml", "content_format: text\n"),
        (".seoscore.json", r#"{"content_format": "text"}"#),
    ];
    for (name, body) in cases {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(name), body).unwrap();
        let json = info_json(tmp.path());
        assert_eq!(json["config"]["content_format"], "text", "{name}");
    }
}

#[test]
fn input_limit_settings_are_reported() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".seoscore.toml"), "max_input_bytes = 2048\n").unwrap();
    assert_eq!(info_json(tmp.path())["config"]["max_input_bytes"], 2048);

    fs::write(tmp.path().join(".seoscore.toml"), "disable_input_limit = true\n").unwrap();
    assert!(info_json(tmp.path())["config"]["max_input_bytes"].is_null());
}

// =============================================================================
// Config Precedence
// =============================================================================

#[test]
fn closer_config_takes_precedence() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("site");
    fs::create_dir_all(&sub_dir).unwrap();
    fs::write(tmp.path().join(".seoscore.toml"), "min_score = 30\n").unwrap();
    fs::write(sub_dir.join(".seoscore.toml"), "min_score = 90\n").unwrap();

    let json = info_json(&sub_dir);

    assert_eq!(json["config"]["min_score"], 90, "closer config should win");
}

#[test]
fn explicit_config_overrides_discovered() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".seoscore.toml"), "min_score = 30\n").unwrap();
    let explicit = tmp.path().join("ci.toml");
    fs::write(&explicit, "min_score = 75\n").unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--config",
            explicit.to_str().unwrap(),
            "info",
            "--json",
        ])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["min_score"], 75);
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(reported.ends_with("ci.toml"), "--config path should be reported: {reported}");
}

#[test]
fn env_var_overrides_files() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".seoscore.toml"), "min_score = 30\n").unwrap();

    let output = cmd()
        .env("SEOSCORE_MIN_SCORE", "55")
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["min_score"], 55);
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn invalid_toml_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".seoscore.toml"), "this is not valid toml [[[").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn out_of_range_min_score_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".seoscore.json"), r#"{"min_score": 300}"#).unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure();
}

#[test]
fn min_score_above_scale_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".seoscore.toml"), "min_score = 150\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("min_score must be between 0 and 100, got 150"));
}

#[test]
fn env_min_readability_above_scale_shows_error() {
    let tmp = TempDir::new().unwrap();

    cmd()
        .env("SEOSCORE_MIN_READABILITY", "120")
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("min_readability must be between 0 and 100"));
}

#[test]
fn unknown_content_format_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".seoscore.yaml"), "content_format: markdown\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure();
}

#[test]
fn unknown_config_field_is_ignored() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".seoscore.toml"),
        "min_score = 10\nunknown_field = \"should be ignored\"\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["min_score"], 10);
}

// =============================================================================
// Boundary Marker Tests
// =============================================================================

#[test]
fn git_boundary_stops_config_search() {
    let tmp = TempDir::new().unwrap();
    let parent = tmp.path().join("parent");
    let repo = parent.join("repo");
    let src = repo.join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(parent.join(".seoscore.toml"), "min_score = 99\n").unwrap();
    fs::create_dir(repo.join(".git")).unwrap();

    let json = info_json(&src);

    assert!(json["config"]["min_score"].is_null(), "boundary should stop search");
    assert!(json["config"]["config_file"].is_null());
}

#[test]
fn config_in_same_dir_as_git_is_found() {
    let tmp = TempDir::new().unwrap();
    let repo = tmp.path().join("repo");
    let src = repo.join("src");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir(repo.join(".git")).unwrap();
    fs::write(repo.join(".seoscore.toml"), "min_score = 65\n").unwrap();

    let json = info_json(&src);

    assert_eq!(json["config"]["min_score"], 65, "config next to .git should be found");
}
