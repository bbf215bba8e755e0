use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

use proserplan::fixtures;
use proserplan::models::{Debt, Money};
use proserplan::snapshot::load_snapshot;

const BIN_NAME: &str = "proserplan";

fn command(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("PROSERPLAN_DATA_DIR", data_dir)
        .env_remove("PROSERPLAN_SNAPSHOT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn summary_uses_starter_data() {
    let dir = TempDir::new().unwrap();
    command(dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("ProserPlan Dashboard - 2025-01"))
        .stdout(contains("$26,649.45"));
}

#[test]
fn no_subcommand_prints_summary_and_hint() {
    let dir = TempDir::new().unwrap();
    command(dir.path())
        .assert()
        .success()
        .stdout(contains("Current Net Worth"))
        .stdout(contains("proserplan --help"));
}

#[test]
fn net_worth_lists_accounts() {
    let dir = TempDir::new().unwrap();
    command(dir.path())
        .arg("net-worth")
        .assert()
        .success()
        .stdout(contains("Net Worth Report"))
        .stdout(contains("Visa Rewards Card"))
        .stdout(contains("$850.55"));
}

#[test]
fn budget_advance_shows_next_month() {
    let dir = TempDir::new().unwrap();
    command(dir.path())
        .args(["budget", "--advance"])
        .assert()
        .success()
        .stdout(contains("Budget Overview - 2025-01"))
        .stdout(contains("→ 2025-02"));
}

#[test]
fn budget_advance_writes_next_snapshot() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("next.json");

    command(dir.path())
        .args(["budget", "--advance", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(contains("Advanced snapshot for 2025-02"));

    let advanced = load_snapshot(&output).unwrap();
    assert_eq!(advanced.active_month.to_string(), "2025-02");
    assert_eq!(advanced.budget[3].rollover.cents(), 100_000);
    assert!(advanced.budget.iter().all(|c| c.actual_spent.is_zero()));
}

#[test]
fn budget_output_requires_advance() {
    let dir = TempDir::new().unwrap();
    command(dir.path())
        .args(["budget", "--output", "next.json"])
        .assert()
        .failure();
}

#[test]
fn debts_compare_prints_both_strategies() {
    let dir = TempDir::new().unwrap();
    command(dir.path())
        .args(["debts", "--strategy", "snowball", "--extra", "100", "--compare"])
        .assert()
        .success()
        .stdout(contains("Debt Payoff Plan - Snowball"))
        .stdout(contains("Student Loan"))
        .stdout(contains("Strategy Comparison"))
        .stdout(contains("Avalanche saves"));
}

#[test]
fn debts_rejects_unknown_strategy() {
    let dir = TempDir::new().unwrap();
    command(dir.path())
        .args(["debts", "--strategy", "blizzard"])
        .assert()
        .failure()
        .stderr(contains("blizzard"));
}

#[test]
fn debts_rejects_negative_extra() {
    let dir = TempDir::new().unwrap();
    command(dir.path())
        .args(["debts", "--extra", "-50"])
        .assert()
        .failure()
        .stderr(contains("extraMonthlyBudget"));
}

#[test]
fn debts_rejects_out_of_range_extra() {
    let dir = TempDir::new().unwrap();
    command(dir.path())
        .args(["debts", "--extra", "99999999999999999"])
        .assert()
        .failure()
        .stderr(contains("out of range"));
}

#[test]
fn snapshot_with_huge_amount_is_rejected() {
    let dir = TempDir::new().unwrap();
    let snapshot = dir.path().join("huge.json");
    let mut value = serde_json::to_value(fixtures::default_snapshot()).unwrap();
    value["accounts"][0]["balance"] = serde_json::json!(1e30);
    fs::write(&snapshot, value.to_string()).unwrap();

    command(dir.path())
        .arg("--snapshot")
        .arg(&snapshot)
        .arg("net-worth")
        .assert()
        .failure()
        .stderr(contains("in range"));
}

#[test]
fn debts_exports_csv_and_json() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("schedule.csv");
    let json_path = dir.path().join("scenario.json");

    command(dir.path())
        .args(["debts", "--start", "2025-06", "--csv"])
        .arg(&csv_path)
        .arg("--json")
        .arg(&json_path)
        .assert()
        .success();

    let csv = fs::read_to_string(&csv_path).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Month Number,Month,Total Balance,Paid Off"));
    assert!(lines.next().unwrap().starts_with("1,2025-06,"));
    assert!(csv.contains("Car Loan"));
    assert!(csv.trim_end().ends_with("0.00,Student Loan"));

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json["startMonth"], "2025-06");
    assert_eq!(json["scenario"]["method"], "Avalanche");
}

#[test]
fn debts_divergence_fails_with_message() {
    let dir = TempDir::new().unwrap();
    let snapshot_path = dir.path().join("payday.json");
    let mut snapshot = fixtures::default_snapshot();
    snapshot.debts = vec![Debt::new(
        "Payday Loan",
        Money::from_cents(1_000_000),
        0.5,
        Money::from_cents(10_000),
        1,
    )];
    fs::write(&snapshot_path, snapshot.to_json().unwrap()).unwrap();

    command(dir.path())
        .arg("--snapshot")
        .arg(&snapshot_path)
        .arg("debts")
        .assert()
        .failure()
        .stdout(contains("not paid off within 1200 months"))
        .stderr(contains("did not converge"));
}

#[test]
fn paycheck_reconciles_defaults() {
    let dir = TempDir::new().unwrap();
    command(dir.path())
        .arg("paycheck")
        .assert()
        .success()
        .stdout(contains("Net pay matches the deductions."))
        .stdout(contains("$4,116.67"));
}

#[test]
fn defaults_yaml_round_trips_through_snapshot_flag() {
    let dir = TempDir::new().unwrap();
    let snapshot_path = dir.path().join("starter.yaml");

    command(dir.path())
        .args(["defaults", "--format", "yaml", "--output"])
        .arg(&snapshot_path)
        .assert()
        .success();

    let yaml = fs::read_to_string(&snapshot_path).unwrap();
    assert!(yaml.contains("userId: local-user"));

    command(dir.path())
        .arg("--snapshot")
        .arg(&snapshot_path)
        .arg("net-worth")
        .assert()
        .success()
        .stdout(contains("$26,649.45"));
}

#[test]
fn defaults_json_to_stdout() {
    let dir = TempDir::new().unwrap();
    command(dir.path())
        .arg("defaults")
        .assert()
        .success()
        .stdout(contains("\"paycheckInfo\""))
        .stdout(contains("\"New Car Fund\""));
}

#[test]
fn snapshot_env_var_is_honoured() {
    let dir = TempDir::new().unwrap();
    let snapshot_path = dir.path().join("snapshot.json");
    let mut snapshot = fixtures::default_snapshot();
    snapshot.accounts.truncate(1);
    fs::write(&snapshot_path, snapshot.to_json().unwrap()).unwrap();

    command(dir.path())
        .env("PROSERPLAN_SNAPSHOT", &snapshot_path)
        .arg("net-worth")
        .assert()
        .success()
        .stdout(contains("$2,500.00"))
        .stdout(contains("Visa Rewards Card").not());
}

#[test]
fn invalid_snapshot_names_the_field() {
    let dir = TempDir::new().unwrap();
    let snapshot_path = dir.path().join("bad.json");
    let json = fixtures::default_snapshot()
        .to_json()
        .unwrap()
        .replace("\"bi-weekly\"", "\"fortnightly\"");
    fs::write(&snapshot_path, json).unwrap();

    command(dir.path())
        .arg("--snapshot")
        .arg(&snapshot_path)
        .arg("summary")
        .assert()
        .failure()
        .stderr(contains("frequency"))
        .stderr(contains("fortnightly"));
}

#[test]
fn config_init_saves_settings() {
    let dir = TempDir::new().unwrap();

    command(dir.path())
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(contains("ProserPlan Configuration"))
        .stdout(contains("(built-in starter data)"));

    assert!(dir.path().join("settings.json").exists());
}

#[test]
fn settings_currency_symbol_is_used() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("settings.json"),
        r#"{"currency_symbol": "€"}"#,
    )
    .unwrap();

    command(dir.path())
        .arg("net-worth")
        .assert()
        .success()
        .stdout(contains("€26,649.45"));
}
