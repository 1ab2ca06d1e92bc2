//! Integration tests for `appenv resolve` and `appenv files`.

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn config_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("production.env"),
        "APPENV_CLI_A=1\nAPPENV_CLI_B=2\n",
    )
    .unwrap();
    fs::write(dir.path().join("test.env"), "APPENV_CLI_A=test\n").unwrap();
    fs::write(dir.path().join(".env"), "APPENV_CLI_B=3\n").unwrap();
    dir
}

fn appenv(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("appenv");
    cmd.env_remove("APP_ENV")
        .env_remove("APPENV_CLI_A")
        .env_remove("APPENV_CLI_B")
        .env("APPENV_DIR", dir.path());
    cmd
}

#[test]
fn test_resolve_applies_layers() {
    let dir = config_dir();

    appenv(&dir)
        .env("APPENV_CLI_A", "9")
        .args(["resolve", "APPENV_CLI_A", "APPENV_CLI_B", "APPENV_CLI_UNSET"])
        .assert()
        .success()
        .stdout("APPENV_CLI_A=9\nAPPENV_CLI_B=3\n");
}

#[test]
fn test_resolve_selects_environment() {
    let dir = config_dir();

    appenv(&dir)
        .env("APP_ENV", "test")
        .args(["resolve", "APPENV_CLI_A"])
        .assert()
        .success()
        .stdout("APPENV_CLI_A=test\n");

    appenv(&dir)
        .env("APP_ENV", "test")
        .args(["--app-env", "production", "resolve", "APPENV_CLI_A"])
        .assert()
        .success()
        .stdout("APPENV_CLI_A=1\n");
}

#[test]
fn test_resolve_json_output() {
    let dir = config_dir();

    let output = appenv(&dir)
        .args(["-o", "json", "resolve", "APPENV_CLI_B", "APPENV_CLI_UNSET"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["APPENV_CLI_B"], "3");
    assert!(value["APPENV_CLI_UNSET"].is_null());
}

#[test]
fn test_missing_env_file_exit_code() {
    let dir = config_dir();

    appenv(&dir)
        .args(["--app-env", "staging", "resolve", "APPENV_CLI_A"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("staging.env"));
}

#[test]
fn test_malformed_file_exit_code() {
    let dir = config_dir();
    fs::write(dir.path().join(".env"), "INVALID_LINE_WITHOUT_EQUALS\n").unwrap();

    appenv(&dir)
        .args(["resolve", "APPENV_CLI_A"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn test_files_command() {
    let dir = config_dir();
    fs::remove_file(dir.path().join(".env")).unwrap();

    appenv(&dir)
        .arg("files")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("environment: production")
                .and(predicate::str::contains("production.env\tfound"))
                .and(predicate::str::contains(".env\tmissing")),
        );
}

#[test]
fn test_help_lists_commands() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("appenv");
    cmd.arg("--help").assert().success().stdout(
        predicate::str::contains("resolve")
            .and(predicate::str::contains("files"))
            .and(predicate::str::contains("--app-env")),
    );
}
