//! Integration tests for the `empire` CLI binary.
//!
//! These tests validate argument parsing, payload validation output,
//! exit codes, and configuration handling against a throwaway HOME.
#![allow(clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

// ── Helpers ─────────────────────────────────────────────────────────

const VALID_PAGE: &str = r#"{
    "empires": [
        {
            "base_token": "0x9f3a",
            "token_name": "Kingdom of Aldmere",
            "token_symbol": "ALD",
            "total_distributed": 15234.75,
            "total_burned": 120000,
            "logo_uri": "https://www.empirebuilder.world/logos/ald.png"
        },
        {
            "base_token": "0x11be",
            "token_name": "Duchy of Vell",
            "token_symbol": "VEL",
            "total_distributed": 0,
            "total_burned": 0
        }
    ],
    "totalCount": 42,
    "queryTime": 0.137,
    "page": 1,
    "itemsPerPage": 2
}"#;

const BROKEN_PAGE: &str = r#"{
    "empires": [],
    "totalCount": 0,
    "queryTime": 0.01,
    "page": -1,
    "itemsPerPage": 10
}"#;

/// Scratch HOME plus payload files; dropped at the end of each test.
struct Sandbox {
    home: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            home: tempfile::tempdir().unwrap(),
        }
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.home.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    /// Build a [`Command`] for the `empire` binary with env isolation.
    ///
    /// Clears all `EMPIRE_*` env vars and points config directories at
    /// the sandbox so tests never touch the user's real configuration.
    fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = cargo_bin_cmd!("empire");
        cmd.env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("EMPIRE_OUTPUT")
            .env_remove("EMPIRE_DEFAULTS_OUTPUT")
            .env_remove("EMPIRE_DEFAULTS_COLOR")
            .env_remove("RUST_LOG");
        cmd
    }

    fn config_file(&self) -> PathBuf {
        self.home
            .path()
            .join(".config")
            .join("empire")
            .join("config.toml")
    }

    fn write_config(&self, contents: &str) {
        let cfg = self.config_file();
        std::fs::create_dir_all(cfg.parent().unwrap()).unwrap();
        std::fs::write(&cfg, contents).unwrap();
    }
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let sandbox = Sandbox::new();
    let output = sandbox.cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "Expected 'Usage' in:\n{stderr}");
}

#[test]
fn test_help_lists_commands() {
    Sandbox::new().cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("validate")
            .and(predicate::str::contains("empires"))
            .and(predicate::str::contains("palette")),
    );
}

#[test]
fn test_completions_zsh() {
    Sandbox::new()
        .cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── validate ────────────────────────────────────────────────────────

#[test]
fn test_validate_accepts_valid_file() {
    let sandbox = Sandbox::new();
    let file = sandbox.write("page.json", VALID_PAGE);
    sandbox
        .cmd()
        .args(["validate", arg(&file)])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 empire(s), page 1 of 21 (42 total)"));
}

#[test]
fn test_validate_reads_stdin() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["--output", "plain", "validate", "-"])
        .write_stdin(VALID_PAGE)
        .assert()
        .success()
        .stdout("valid\n");
}

#[test]
fn test_validate_rejects_with_all_violations() {
    let sandbox = Sandbox::new();
    let file = sandbox.write("broken.json", BROKEN_PAGE);
    sandbox
        .cmd()
        .args(["-o", "plain", "validate", arg(&file)])
        .assert()
        .code(3)
        .stdout(predicate::str::contains(
            "empires: At least one empire must be present in the response; \
             page: Page number must be positive",
        ))
        .stderr(predicate::str::contains("2 violation(s)"));
}

#[test]
fn test_validate_json_report() {
    let sandbox = Sandbox::new();
    let file = sandbox.write("broken.json", BROKEN_PAGE);
    let output = sandbox
        .cmd()
        .args(["-o", "json-compact", "validate", arg(&file)])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["valid"], false);
    assert_eq!(report["violations"][0]["path"], serde_json::json!(["empires"]));
    assert_eq!(report["violations"][1]["code"], "too_small");
}

#[test]
fn test_validate_table_names_root_violation() {
    let sandbox = Sandbox::new();
    let file = sandbox.write("list.json", "[1, 2, 3]");
    sandbox
        .cmd()
        .args(["-o", "table", "validate", arg(&file)])
        .assert()
        .code(3)
        .stdout(
            predicate::str::contains("(root)")
                .and(predicate::str::contains("Expected object, received array")),
        );
}

#[test]
fn test_validate_malformed_json() {
    let sandbox = Sandbox::new();
    let file = sandbox.write("bad.json", "{ \"empires\": ");
    sandbox
        .cmd()
        .args(["validate", arg(&file)])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid JSON payload"));
}

#[test]
fn test_validate_missing_file() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["validate", "/nonexistent/empire/page.json"])
        .assert()
        .failure();
}

// ── empires ─────────────────────────────────────────────────────────

#[test]
fn test_empires_list_plain() {
    let sandbox = Sandbox::new();
    let file = sandbox.write("page.json", VALID_PAGE);
    sandbox
        .cmd()
        .args(["-o", "plain", "empires", "list", arg(&file)])
        .assert()
        .success()
        .stdout("0x9f3a\n0x11be\n");
}

#[test]
fn test_empires_list_table_uses_palette() {
    let sandbox = Sandbox::new();
    let file = sandbox.write("page.json", VALID_PAGE);
    sandbox
        .cmd()
        .args(["--color", "never", "empires", "ls", arg(&file)])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("#8C5523")
                .and(predicate::str::contains("#2E4052"))
                .and(predicate::str::contains("15,234.75"))
                .and(predicate::str::contains("Duchy of Vell")),
        );
}

#[test]
fn test_empires_list_rejects_invalid_payload() {
    let sandbox = Sandbox::new();
    let file = sandbox.write("broken.json", BROKEN_PAGE);
    sandbox
        .cmd()
        .args(["empires", "list", arg(&file)])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("rejected"));
}

#[test]
fn test_empires_show_by_symbol() {
    let sandbox = Sandbox::new();
    let file = sandbox.write("page.json", VALID_PAGE);
    let output = sandbox
        .cmd()
        .args(["-o", "json", "empires", "show", "vel", arg(&file)])
        .output()
        .unwrap();
    assert!(output.status.success());
    let empire: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(empire["base_token"], "0x11be");
    assert!(empire.get("logo_uri").is_none());
}

#[test]
fn test_empires_show_unknown_token() {
    let sandbox = Sandbox::new();
    let file = sandbox.write("page.json", VALID_PAGE);
    sandbox
        .cmd()
        .args(["empires", "show", "NOPE", arg(&file)])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("empire 'NOPE' not found"));
}

// ── palette ─────────────────────────────────────────────────────────

#[test]
fn test_palette_plain() {
    let output = Sandbox::new()
        .cmd()
        .args(["-o", "plain", "palette"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "#8C5523");
    assert_eq!(lines[9], "#9B2915");
}

#[test]
fn test_palette_from_config() {
    let sandbox = Sandbox::new();
    sandbox.write_config("palette = [\"#101010\", \"#202020\"]\n");

    sandbox
        .cmd()
        .args(["-o", "plain", "palette"])
        .assert()
        .success()
        .stdout("#101010\n#202020\n");
}

// ── config ──────────────────────────────────────────────────────────

#[test]
fn test_config_show_no_config() {
    Sandbox::new()
        .cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("output = \"table\""));
}

#[test]
fn test_config_init_then_default_output_applies() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["--yes", "config", "init"])
        .assert()
        .success();
    assert!(sandbox.config_file().exists());

    std::fs::write(
        sandbox.config_file(),
        "[defaults]\noutput = \"plain\"\ncolor = \"never\"\n",
    )
    .unwrap();
    let file = sandbox.write("page.json", VALID_PAGE);
    sandbox
        .cmd()
        .args(["validate", arg(&file)])
        .assert()
        .success()
        .stdout("valid\n");
}

#[test]
fn test_config_path_points_into_config_home() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("empire").and(predicate::str::contains("config.toml")));
}

#[test]
fn test_invalid_output_format() {
    let output = Sandbox::new()
        .cmd()
        .args(["--output", "invalid", "palette"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid") || stderr.contains("possible values"),
        "Expected error about invalid output format:\n{stderr}"
    );
}

#[test]
fn test_wrong_typed_config_fails_instead_of_falling_back() {
    let sandbox = Sandbox::new();
    sandbox.write_config("palette = \"#101010\"\n\n[defaults]\noutput = \"plain\"\n");

    sandbox
        .cmd()
        .arg("palette")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("config loading failed"));
}

#[test]
fn test_bad_palette_entry_fails() {
    let sandbox = Sandbox::new();
    sandbox.write_config("palette = [\"#zzzzzz\"]\n");

    sandbox
        .cmd()
        .args(["-o", "plain", "palette"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("palette[0]"));
}

#[test]
fn test_config_show_reports_broken_file() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[defaults\noutput = ");

    sandbox
        .cmd()
        .args(["config", "show"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("config loading failed"));
}

#[test]
fn test_config_init_replaces_broken_file() {
    let sandbox = Sandbox::new();
    sandbox.write_config("palette = 7\n");

    sandbox
        .cmd()
        .args(["--yes", "config", "init"])
        .assert()
        .success();

    let output = sandbox
        .cmd()
        .args(["-o", "plain", "palette"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout).unwrap().lines().count(), 10);
}
