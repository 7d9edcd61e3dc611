//! CLI integration tests
//!
//! Drives the finflow binary end to end against a temp data directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn finflow(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finflow").unwrap();
    cmd.env("FINFLOW_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn runs_without_arguments() {
    let dir = TempDir::new().unwrap();
    finflow(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("FinFlow"));
}

#[test]
fn shows_config_paths() {
    let dir = TempDir::new().unwrap();
    finflow(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data directory"));
}

#[test]
fn adds_and_lists_income() {
    let dir = TempDir::new().unwrap();

    finflow(&dir)
        .args([
            "income", "add", "Employer Corp", "4500", "--category", "Salary", "--date",
            "2025-01-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added income"));

    finflow(&dir)
        .args(["income", "list", "--period", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Employer Corp"))
        .stdout(predicate::str::contains("4,500.00"));
}

#[test]
fn rejects_invalid_income() {
    let dir = TempDir::new().unwrap();

    // Empty source fails validation and nothing is stored
    finflow(&dir)
        .args(["income", "add", " ", "100", "--date", "2025-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    finflow(&dir)
        .args(["income", "list", "--period", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No income records"));
}

#[test]
fn expense_list_shows_fixed_variable_split() {
    let dir = TempDir::new().unwrap();

    finflow(&dir)
        .args([
            "expense", "add", "Housing", "1200", "--kind", "Fixed", "--subcategory", "Rent",
            "--date", "2025-01-02",
        ])
        .assert()
        .success();

    finflow(&dir)
        .args(["expense", "add", "Food", "200", "--date", "2025-01-04"])
        .assert()
        .success();

    finflow(&dir)
        .args(["expense", "list", "--period", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fixed"))
        .stdout(predicate::str::contains("1,400.00"));
}

#[test]
fn unknown_expense_category_is_rejected() {
    let dir = TempDir::new().unwrap();

    finflow(&dir)
        .args(["expense", "add", "Groceries", "50", "--date", "2025-01-04"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));
}

#[test]
fn budget_set_and_show() {
    let dir = TempDir::new().unwrap();

    finflow(&dir)
        .args(["budget", "set", "Food", "350"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set Food budget"));

    finflow(&dir)
        .args(["expense", "add", "Food", "400", "--date", "2025-01-04"])
        .assert()
        .success();

    finflow(&dir)
        .args(["budget", "show", "--period", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Over"))
        .stdout(predicate::str::contains("No Budget"));
}

#[test]
fn debt_list_reports_payoff_and_strategy() {
    let dir = TempDir::new().unwrap();

    finflow(&dir)
        .args([
            "debt", "add", "Credit Card", "2400", "22", "--minpay", "50", "--extra", "200",
            "--lender", "Bank A",
        ])
        .assert()
        .success();

    finflow(&dir)
        .args(["debt", "add", "Student Loan", "18000", "5.5", "--minpay", "210"])
        .assert()
        .success();

    finflow(&dir)
        .args(["debt", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Avalanche #1"))
        .stdout(predicate::str::contains("11mo"));
}

#[test]
fn goal_lifecycle() {
    let dir = TempDir::new().unwrap();

    finflow(&dir)
        .args([
            "goal",
            "add",
            "Summer Vacation",
            "3000",
            "2030-07-01",
            "--category",
            "Vacation",
            "--saved",
            "1200",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added goal"));

    finflow(&dir)
        .args(["goal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Summer Vacation"))
        .stdout(predicate::str::contains("40.0%"));
}

#[test]
fn demo_seeds_and_reports_render() {
    let dir = TempDir::new().unwrap();

    finflow(&dir)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded demo data"));

    // Seeding twice is a no-op
    finflow(&dir)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("not seeded"));

    finflow(&dir)
        .args(["report", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly Summary"))
        .stdout(predicate::str::contains("TOTAL / AVG"));

    finflow(&dir)
        .args(["report", "dashboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Health score"));

    finflow(&dir)
        .args(["report", "analysis"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Emergency fund coverage"));
}

#[test]
fn export_summary_writes_csv() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("summary.csv");

    finflow(&dir).arg("demo").assert().success();

    finflow(&dir)
        .args(["export", "summary"])
        .arg(&out)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&out).unwrap();
    assert!(contents.starts_with("Month,Income,Expenses"));
    assert!(contents.contains("TOTAL"));
}
