//! End-to-end CLI tests
//!
//! Each test points MONETA_DATA_DIR at a fresh temp directory so the session
//! falls back to the local CSV backend (no credential file is present).

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn moneta(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("moneta").unwrap();
    cmd.env("MONETA_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn config_init_creates_settings() {
    let dir = TempDir::new().unwrap();

    moneta(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").exists());
}

#[test]
fn add_then_list_shows_the_transaction() {
    let dir = TempDir::new().unwrap();

    moneta(&dir)
        .args([
            "add", "income", "1000.00", "Paycheck", "--category", "Salary", "--date",
            "2024-01-05",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction added"));

    moneta(&dir)
        .args(["list", "--month", "2024-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Paycheck"))
        .stdout(predicate::str::contains("1000.00"));

    // Persisted through the local CSV backend
    assert!(dir.path().join("data").join("transactions.csv").exists());
}

#[test]
fn list_filters_by_month() {
    let dir = TempDir::new().unwrap();

    moneta(&dir)
        .args(["add", "expense", "50", "Groceries", "--date", "2024-01-10"])
        .assert()
        .success();

    moneta(&dir)
        .args(["list", "--month", "2024-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found"));
}

#[test]
fn summary_reports_balances() {
    let dir = TempDir::new().unwrap();

    moneta(&dir)
        .args([
            "add", "income", "1000", "Paycheck", "--category", "Salary", "--date", "2024-01-05",
        ])
        .assert()
        .success();
    moneta(&dir)
        .args([
            "add", "expense", "200", "Market", "--category", "Food", "--date", "2024-01-10",
        ])
        .assert()
        .success();

    moneta(&dir)
        .args(["summary", "--month", "2024-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary for 2024-01"))
        .stdout(predicate::str::contains("1000.00"))
        .stdout(predicate::str::contains("800.00"));
}

#[test]
fn status_reports_local_fallback() {
    let dir = TempDir::new().unwrap();

    moneta(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Local]"));
}

#[test]
fn edit_rewrites_the_row() {
    let dir = TempDir::new().unwrap();

    moneta(&dir)
        .args(["add", "expense", "45", "Taxi", "--date", "2024-03-02"])
        .assert()
        .success();

    moneta(&dir)
        .args(["edit", "0", "--description", "Bus pass", "--category", "Transport"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction updated"));

    moneta(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bus pass"))
        .stdout(predicate::str::contains("Transport"));
}

#[test]
fn delete_removes_the_row() {
    let dir = TempDir::new().unwrap();

    moneta(&dir)
        .args(["add", "expense", "45", "Taxi", "--date", "2024-03-02"])
        .assert()
        .success();

    moneta(&dir)
        .args(["delete", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction deleted"));

    moneta(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found"));
}

#[test]
fn delete_unknown_id_fails() {
    let dir = TempDir::new().unwrap();

    moneta(&dir).args(["delete", "7"]).assert().failure();
}

#[test]
fn invalid_month_is_rejected() {
    let dir = TempDir::new().unwrap();

    moneta(&dir)
        .args(["list", "--month", "January"])
        .assert()
        .failure();
}

#[test]
fn categories_lists_the_catalog() {
    let dir = TempDir::new().unwrap();

    moneta(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Transfer"));
}
