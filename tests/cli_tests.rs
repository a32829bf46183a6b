// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn spendclip(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("spendclip").unwrap();
    cmd.env("SPENDCLIP_DATA_DIR", dir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn add_summary_and_overspend_flow() {
    let dir = tempdir().unwrap();

    spendclip(dir.path())
        .args(["set-limit", "--month", "3", "--limit", "1000", "--year", "2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget for March has been added."));

    spendclip(dir.path())
        .args(["add", "-d", "Lunch", "-a", "250", "-c", "Food", "--date", "2025-03-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully. (ID: 1)"))
        .stdout(predicate::str::contains("Remaining budget for March: $750"));

    spendclip(dir.path())
        .args(["add", "-d", "Laptop", "-a", "1200", "-c", "Shopping", "--date", "2025-03-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Over budget by: $200"));

    spendclip(dir.path())
        .args(["summary", "--month", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total expenses for March: $1450"));
}

#[test]
fn delete_unknown_id_prints_message() {
    let dir = tempdir().unwrap();
    spendclip(dir.path())
        .args(["delete", "--id", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID 4 is not defined."));
}

#[test]
fn corrupt_ledger_fails_until_reset() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("expenses.csv"), "not,a,ledger\n").unwrap();

    spendclip(dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("init --reset"));

    spendclip(dir.path())
        .args(["init", "--reset"])
        .assert()
        .success();

    spendclip(dir.path())
        .args(["summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total expenses: $0"));
}

#[test]
fn unknown_category_is_rejected_by_the_parser() {
    let dir = tempdir().unwrap();
    spendclip(dir.path())
        .args(["add", "-d", "x", "-a", "5", "-c", "Groceries"])
        .assert()
        .failure();
    assert!(!dir.path().join("expenses.csv").exists());
}

#[test]
fn list_jsonl_prints_one_object_per_line() {
    let dir = tempdir().unwrap();
    for (d, a) in [("Lunch", "10"), ("Dinner", "25.75")] {
        spendclip(dir.path())
            .args(["add", "-d", d, "-a", a, "-c", "Food", "--date", "2025-03-02"])
            .assert()
            .success();
    }

    let out = spendclip(dir.path())
        .args(["list", "--jsonl"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let lines: Vec<serde_json::Value> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["id"], 1);
    assert_eq!(lines[1]["description"], "Dinner");
    assert_eq!(lines[1]["amount"], "25.75");
}

#[test]
fn limits_json_lists_saved_months() {
    let dir = tempdir().unwrap();
    spendclip(dir.path())
        .args(["set-limit", "-m", "7", "-l", "300", "--year", "2025"])
        .assert()
        .success();

    spendclip(dir.path())
        .args(["limits", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"July\""))
        .stdout(predicate::str::contains("\"periodEnd\": \"2025-07-31\""));
}
