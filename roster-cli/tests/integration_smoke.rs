//! Smoke tests for command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_serve() {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--database-url"))
        .stdout(predicate::str::contains("--skip-schema"))
        .stdout(predicate::str::contains("--max-connections"));
}

#[test]
fn test_serve_rejects_bad_bind() {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.arg("serve").arg("--bind").arg("nowhere");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_serve_without_database_settings_fails() {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.arg("serve")
        .env_remove("DATABASE_URL")
        .env_remove("DATABASE_USER")
        .env_remove("DATABASE_NAME")
        .current_dir(std::env::temp_dir());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}
