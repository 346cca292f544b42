use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

#[test]
fn test_policy_file_drives_classification_and_pricing() {
    let mut policy = tempfile::NamedTempFile::new().unwrap();
    writeln!(policy, "due_soon_window_days = 0").unwrap();
    writeln!(policy, "cycle_price = \"25.00\"").unwrap();

    let mut cmd = Command::new(cargo_bin!("gymdues"));
    cmd.arg("tests/fixtures/members.csv")
        .args(["--payments", "tests/fixtures/payments.csv"])
        .args(["--today", "2025-03-30"])
        .arg("--config")
        .arg(policy.path());

    cmd.assert()
        .success()
        // a zero-day window never flags due soon
        .stdout(predicate::str::contains("1,2025-03-31,active,1,0,0.00\n"))
        .stdout(predicate::str::contains("5,2025-03-10,overdue,-20,1,25.00\n"));
}

#[test]
fn test_cli_flags_override_policy_file() {
    let mut policy = tempfile::NamedTempFile::new().unwrap();
    writeln!(policy, "due_soon_window_days = 0").unwrap();

    let mut cmd = Command::new(cargo_bin!("gymdues"));
    cmd.arg("tests/fixtures/members.csv")
        .args(["--payments", "tests/fixtures/payments.csv"])
        .args(["--today", "2025-03-30", "--due-soon-days", "2"])
        .arg("--config")
        .arg(policy.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1,2025-03-31,due_soon,1,0,\n"))
        .stdout(predicate::str::contains("4,2025-04-01,due_soon,2,0,\n"));
}
