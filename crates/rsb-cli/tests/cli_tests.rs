//! End-to-end tests for the `rsb` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const RATES: &str = "\
publish_date,rsb2,rsb3,rsb5
2023-09-01,7.00,7.50,8.00
2023-10-02,7.25,7.75,8.25
";

/// Runs from an empty directory so no stray `rsb.toml` or env vars apply.
fn rsb(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rsb").unwrap();
    cmd.current_dir(dir)
        .env_remove("RSB_CONFIG")
        .env_remove("RSB_RATES_FILE")
        .env_remove("RUST_LOG");
    cmd
}

fn workdir_with_rates() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("rates.csv"), RATES).unwrap();
    dir
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

// =============================================================================
// schedule
// =============================================================================

#[test]
fn schedule_csv_has_header_and_one_line_per_event() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(rsb(dir.path()).args([
        "schedule",
        "--start",
        "2023-10-20",
        "--term",
        "3",
        "--payment",
        "semi_annual",
        "--principal",
        "1000000",
        "--rate",
        "7.75",
        "--format",
        "csv",
    ]));

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "date,kind,amount,accrual_start,accrual_end");
    // Investment, six coupons, repayment.
    assert_eq!(lines.len(), 9);
    assert!(lines[1].starts_with("2023-10-20,Principal Investment,-1000000.00"));
    // First coupon carries the deferred Oct 20 - Mar 31 stub.
    assert_eq!(lines[2], "2024-09-30,Coupon,73359.59,2023-10-20,2024-09-30");
    assert!(!out.contains("2024-03-31"));
    assert!(lines[8].starts_with("2026-10-20,Principal Repayment,1000000.00"));
}

#[test]
fn schedule_json_output() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(rsb(dir.path()).args([
        "schedule", "-s", "2023-10-20", "-t", "2", "-p", "monthly", "--principal", "10000", "-r",
        "7.25", "-f", "json",
    ]));

    let rows: serde_json::Value = serde_json::from_str(&out).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows[0]["kind"], "Principal Investment");
    assert_eq!(rows[1]["date"], "2023-11-30");
    assert_eq!(rows[1]["accrual_start"], "2023-10-20");
    assert_eq!(rows.last().unwrap()["kind"], "Principal Repayment");
}

#[test]
fn schedule_table_with_summary() {
    let dir = TempDir::new().unwrap();
    rsb(dir.path())
        .args([
            "schedule", "-s", "2023-10-20", "-t", "5", "-p", "reinvest", "--principal", "50000",
            "-r", "8.25", "--summary",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cash Flow Schedule: CLI"))
        .stdout(predicate::str::contains("Capitalisation"))
        .stdout(predicate::str::contains("Interest Capitalised"))
        .stdout(predicate::str::contains("8.25%"));
}

#[test]
fn invalid_term_fails() {
    let dir = TempDir::new().unwrap();
    rsb(dir.path())
        .args(["schedule", "-s", "2023-10-20", "-t", "4", "--principal", "1000", "-r", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid term: 4 years"));
}

#[test]
fn invalid_payment_type_fails() {
    let dir = TempDir::new().unwrap();
    rsb(dir.path())
        .args([
            "schedule", "-s", "2023-10-20", "-t", "2", "-p", "quarterly", "--principal", "1000",
            "-r", "7",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid payment type"));
}

#[test]
fn invalid_date_fails() {
    let dir = TempDir::new().unwrap();
    rsb(dir.path())
        .args(["schedule", "-s", "20/10/2023", "-t", "2", "--principal", "1000", "-r", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn missing_rate_source_fails() {
    let dir = TempDir::new().unwrap();
    rsb(dir.path())
        .args(["schedule", "-s", "2023-10-20", "-t", "2", "--principal", "1000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No rate source"));
}

#[test]
fn unsupported_kind_prints_nothing() {
    let dir = TempDir::new().unwrap();
    rsb(dir.path())
        .args([
            "schedule", "-s", "2023-10-20", "-t", "2", "--principal", "1000", "-r", "7", "--kind",
            "inflation", "-f", "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"))
        .stderr(predicate::str::contains("Inflation Linked"));
}

// =============================================================================
// rate table
// =============================================================================

#[test]
fn rates_file_supplies_the_rate() {
    let dir = workdir_with_rates();
    let out = stdout_of(rsb(dir.path()).args([
        "schedule", "-s", "2023-10-20", "-t", "3", "--principal", "1000000", "--rates",
        "rates.csv", "-f", "csv",
    ]));
    assert!(out.contains("2024-09-30,Coupon,73359.59"));
}

#[test]
fn rate_command_reports_published_rate() {
    let dir = workdir_with_rates();
    rsb(dir.path())
        .args(["rate", "-s", "2023-10-20", "-t", "5", "--rates", "rates.csv", "-f", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rate\t8.25%"))
        .stdout(predicate::str::contains("Term\t5-year"));
}

#[test]
fn rate_command_reports_missing_month() {
    let dir = workdir_with_rates();
    rsb(dir.path())
        .args(["rate", "-s", "2024-01-15", "-t", "2", "--rates", "rates.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No published rate for 2024-01"));
}

#[test]
fn missing_rates_file_fails() {
    let dir = TempDir::new().unwrap();
    rsb(dir.path())
        .args(["rate", "-s", "2023-10-20", "-t", "2", "--rates", "absent.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

// =============================================================================
// configuration
// =============================================================================

#[test]
fn local_config_sets_format_precision_and_rates() {
    let dir = workdir_with_rates();
    fs::write(
        dir.path().join("rsb.toml"),
        "rates_file = \"rates.csv\"\ndefault_format = \"csv\"\nprecision = 4\n",
    )
    .unwrap();

    let out = stdout_of(rsb(dir.path()).args([
        "schedule", "-s", "2023-10-20", "-t", "3", "--principal", "1000000",
    ]));
    assert!(out.starts_with("date,kind,amount"));
    assert!(out.contains("2024-09-30,Coupon,73359.5890"));
}

#[test]
fn explicit_config_and_format_flag() {
    let dir = workdir_with_rates();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "default_format = \"csv\"\nprecision = 0\n").unwrap();

    let out = stdout_of(
        rsb(dir.path())
            .args(["--config", config.to_str().unwrap(), "--format", "minimal"])
            .args(["rate", "-s", "2023-10-20", "-t", "2", "-r", "7.25"]),
    );
    assert!(out.contains("Rate\t7.25%"));
    assert!(!out.contains("Metric"));
}

#[test]
fn bad_config_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("rsb.toml"), "precision = 12\n").unwrap();
    rsb(dir.path())
        .args(["rate", "-s", "2023-10-20", "-t", "2", "-r", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("precision must be at most 10"));
}

// =============================================================================
// daily, capitalisation, scenarios
// =============================================================================

#[test]
fn daily_window_prints_one_line_per_day() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(rsb(dir.path()).args([
        "daily", "-s", "2023-10-20", "-t", "2", "-p", "monthly", "--principal", "10000", "-r",
        "7.25", "--from", "2024-03-01", "--to", "2024-03-31", "-f", "minimal",
    ]));

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 31);
    assert!(lines[0].starts_with("2024-03-01\t10000.00\t"));
    assert!(lines[30].starts_with("2024-03-31\t10000.00\t"));
}

#[test]
fn daily_maturity_is_zeroed() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(rsb(dir.path()).args([
        "daily", "-s", "2023-10-20", "-t", "2", "--principal", "10000", "-r", "7", "--from",
        "2025-10-20", "-f", "csv",
    ]));

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    let fields: Vec<&str> = lines[1].split(',').collect();
    assert_eq!(fields[0], "2025-10-20");
    assert_eq!(fields[1], "0.00");
    assert_eq!(fields[3], "10000.00");
    assert_eq!(fields[4], "0.00");
    assert_eq!(fields[5], "0.00");
}

#[test]
fn daily_reversed_window_fails() {
    let dir = TempDir::new().unwrap();
    rsb(dir.path())
        .args([
            "daily", "-s", "2023-10-20", "-t", "2", "--principal", "10000", "-r", "7", "--from",
            "2024-04-01", "--to", "2024-03-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid window"));
}

#[test]
fn capitalisation_rows_chain() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(rsb(dir.path()).args([
        "capitalisation", "-s", "2023-10-20", "-t", "2", "-p", "reinvest", "--principal",
        "10000", "-r", "7.25", "-f", "json",
    ]));

    let rows: serde_json::Value = serde_json::from_str(&out).unwrap();
    let rows = rows.as_array().unwrap();
    assert!(!rows.is_empty());
    assert_eq!(rows[0]["principal_before"], "10000.00");
    for pair in rows.windows(2) {
        assert_eq!(pair[0]["principal_after"], pair[1]["principal_before"]);
    }
}

#[test]
fn capitalisation_of_payout_bond_warns() {
    let dir = TempDir::new().unwrap();
    rsb(dir.path())
        .args([
            "capitalisation", "-s", "2023-10-20", "-t", "2", "-p", "monthly", "--principal",
            "10000", "-r", "7.25",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results."))
        .stderr(predicate::str::contains("only reinvest bonds capitalise"));
}

#[test]
fn scenarios_compare_every_payment_type() {
    let dir = workdir_with_rates();
    let out = stdout_of(rsb(dir.path()).args([
        "scenarios", "-s", "2023-10-20", "-t", "3", "--principal", "100000", "--rates",
        "rates.csv", "-f", "minimal",
    ]));

    let lines: Vec<&str> = out.lines().collect();
    assert!(lines[0].starts_with("semi_annual\t7.75%\t2026-10-20\t"));
    assert!(lines[1].starts_with("monthly\t7.75%\t2026-10-20\t"));
    assert!(lines[2].starts_with("reinvest\t7.75%\t2026-10-20\t"));
    assert!(out.contains("\tCapitalisation\t"));
}

#[test]
fn scenarios_json_nests_each_schedule() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(rsb(dir.path()).args([
        "scenarios", "-s", "2023-10-20", "-t", "2", "--principal", "10000", "-r", "7", "-f",
        "json",
    ]));

    let reports: serde_json::Value = serde_json::from_str(&out).unwrap();
    let reports = reports.as_array().unwrap();
    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0]["payment_type"], "semi_annual");
    assert_eq!(reports[2]["payment_type"], "reinvest");
    for report in reports {
        let events = report["events"].as_array().unwrap();
        assert_eq!(events[0]["kind"], "Principal Investment");
        assert_eq!(events.last().unwrap()["kind"], "Principal Repayment");
    }
}

#[test]
fn scenarios_table_prints_each_schedule() {
    let dir = TempDir::new().unwrap();
    rsb(dir.path())
        .args(["scenarios", "-s", "2023-10-20", "-t", "2", "--principal", "10000", "-r", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cash Flow Schedule: SCENARIO_SEMI_ANNUAL"))
        .stdout(predicate::str::contains("Cash Flow Schedule: SCENARIO_MONTHLY"))
        .stdout(predicate::str::contains("Cash Flow Schedule: SCENARIO_REINVEST"));
}
