//! Integration tests for the `pawbowl` CLI binary.
//!
//! These tests validate argument parsing, help output, and error
//! handling — all without requiring a live roster service.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `pawbowl` binary with env isolation.
///
/// Clears all `PAWBOWL_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn pawbowl_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("pawbowl");
    cmd.env("HOME", "/tmp/pawbowl-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/pawbowl-cli-test-nonexistent")
        .env_remove("PAWBOWL_API_URL")
        .env_remove("PAWBOWL_COHORT")
        .env_remove("PAWBOWL_OUTPUT")
        .env_remove("PAWBOWL_TIMEOUT");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = pawbowl_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    pawbowl_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("Puppy Bowl")
            .and(predicate::str::contains("players"))
            .and(predicate::str::contains("teams"))
            .and(predicate::str::contains("config")),
    );
}

#[test]
fn test_version_flag() {
    pawbowl_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pawbowl"));
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = pawbowl_cmd().arg("foobar").output().unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid subcommand"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_players_list_no_cohort() {
    // No cohort configured anywhere → usage error before any request.
    let output = pawbowl_cmd().args(["players", "list"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(
        text.contains("cohort"),
        "Expected error mentioning cohort:\n{text}"
    );
}

#[test]
fn test_config_show_no_config() {
    // `config show` renders defaults even when no config file exists.
    pawbowl_cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("api_url"));
}

#[test]
fn test_config_path_prints_location() {
    pawbowl_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_invalid_output_format() {
    let output = pawbowl_cmd()
        .args(["--output", "invalid", "players", "list"])
        .output()
        .unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid output format"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid")
            || text.contains("possible values")
            || text.contains("valid value"),
        "Expected error about valid output formats:\n{text}"
    );
}

#[test]
fn test_global_flags_parsing() {
    // All flags should parse — the failure should be about the missing
    // cohort, not about argument parsing.
    let output = pawbowl_cmd()
        .args(["--output", "json", "--verbose", "--timeout", "60", "players", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(
        text.contains("cohort"),
        "Expected error mentioning cohort:\n{text}"
    );
}

// ── Subcommand help discovery ───────────────────────────────────────

#[test]
fn test_players_subcommands_exist() {
    pawbowl_cmd()
        .args(["players", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("get"))
                .and(predicate::str::contains("add"))
                .and(predicate::str::contains("remove")),
        );
}

#[test]
fn test_teams_subcommands_exist() {
    pawbowl_cmd()
        .args(["teams", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_config_subcommands_exist() {
    pawbowl_cmd()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("show")
                .and(predicate::str::contains("path"))
                .and(predicate::str::contains("init")),
        );
}

#[test]
fn test_players_add_requires_name_and_breed() {
    let output = pawbowl_cmd().args(["players", "add"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(
        text.contains("--name") || text.contains("required"),
        "Expected error about required arguments:\n{text}"
    );
}
