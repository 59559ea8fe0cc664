//! Smoke tests for argument handling and startup failure

use assert_cmd::Command;
use predicates::prelude::*;

fn hospital_api() -> Command {
    let mut cmd = Command::cargo_bin("hospital-api").unwrap();
    cmd.env_clear();
    cmd
}

#[test]
fn test_help_lists_database_settings() {
    hospital_api()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--db-host"))
        .stdout(predicate::str::contains("DB_PASSWORD"))
        .stdout(predicate::str::contains("--port"));
}

#[test]
fn test_missing_port_is_usage_error() {
    hospital_api()
        .args([
            "--db-host",
            "127.0.0.1",
            "--db-user",
            "api",
            "--db-password",
            "secret",
            "--db-name",
            "hospital_db",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--port"));
}

#[test]
fn test_missing_db_host_fails() {
    hospital_api()
        .args([
            "--db-user",
            "api",
            "--db-password",
            "secret",
            "--db-name",
            "hospital_db",
            "--port",
            "3000",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("DB_HOST not set"));
}

#[test]
fn test_unreachable_database_is_fatal() {
    hospital_api()
        .args([
            "--db-host",
            "127.0.0.1",
            "--db-port",
            "1",
            "--db-user",
            "api",
            "--db-password",
            "secret",
            "--db-name",
            "hospital_db",
            "--port",
            "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to connect to MySQL"));
}
