// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use spendclip::{
    budget::BudgetTracker,
    cli,
    commands::{expenses, limits},
    config::Config,
    models::BudgetCheck,
};
use tempfile::{TempDir, tempdir};

fn setup() -> (TempDir, Config) {
    let dir = tempdir().unwrap();
    let config = Config::from_data_dir(dir.path());
    (dir, config)
}

fn sub(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["spendclip"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some((_, m)) => m.clone(),
        None => panic!("no subcommand"),
    }
}

#[test]
fn set_limit_snapshots_month_spend() {
    let (_dir, config) = setup();
    for (amt, date) in [("100", "2025-03-04"), ("50", "2025-03-20"), ("75", "2025-04-01")] {
        expenses::record_expense(
            &config,
            &sub(&["add", "-d", "x", "-a", amt, "-c", "Food", "--date", date]),
        )
        .unwrap();
    }

    limits::set(
        &config,
        &sub(&["set-limit", "-m", "3", "-l", "1000", "--year", "2025"]),
    )
    .unwrap();

    let entries = BudgetTracker::new(&config).load().unwrap();
    assert_eq!(entries.len(), 1);
    let march = &entries[0];
    assert_eq!(march.name, "March");
    assert_eq!(march.amount, Decimal::new(1000, 0));
    assert_eq!(march.spent_so_far, Decimal::new(150, 0));
    assert_eq!(march.period_start.to_string(), "2025-03-01");
    assert_eq!(march.period_end.to_string(), "2025-03-31");
}

#[test]
fn second_set_limit_for_same_month_updates_in_place() {
    let (_dir, config) = setup();
    limits::set(&config, &sub(&["set-limit", "-m", "march", "-l", "1000"])).unwrap();
    limits::set(&config, &sub(&["set-limit", "-m", "5", "-l", "200"])).unwrap();
    limits::set(&config, &sub(&["set-limit", "-m", "3", "-l", "1500"])).unwrap();

    let entries = BudgetTracker::new(&config).load().unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["March", "May"]);
    assert_eq!(entries[0].amount, Decimal::new(1500, 0));
}

#[test]
fn adding_past_the_limit_reports_overspend() {
    let (_dir, config) = setup();
    limits::set(
        &config,
        &sub(&["set-limit", "-m", "3", "-l", "1000", "--year", "2025"]),
    )
    .unwrap();

    let (_, check) = expenses::record_expense(
        &config,
        &sub(&["add", "-d", "TV", "-a", "1200", "-c", "Shopping", "--date", "2025-03-09"]),
    )
    .unwrap();
    let report = check.overspend().expect("expected an overspend report");
    assert_eq!(report.month, "March");
    assert_eq!(report.over_by, Decimal::new(200, 0));
    assert_eq!(report.spent_so_far, Decimal::ZERO);
}

#[test]
fn spent_so_far_is_not_refreshed_by_adds() {
    let (_dir, config) = setup();
    limits::set(&config, &sub(&["set-limit", "-m", "3", "-l", "1000"])).unwrap();
    for _ in 0..2 {
        let (_, check) = expenses::record_expense(
            &config,
            &sub(&["add", "-d", "x", "-a", "600", "-c", "Food", "--date", "2025-03-09"]),
        )
        .unwrap();
        assert!(matches!(check, BudgetCheck::WithinLimit { .. }));
    }
    let entries = BudgetTracker::new(&config).load().unwrap();
    assert!(entries[0].spent_so_far.is_zero());
}

#[test]
fn invalid_limit_inputs_are_rejected() {
    let (_dir, config) = setup();
    assert!(limits::set(&config, &sub(&["set-limit", "-m", "13", "-l", "10"])).is_err());
    assert!(limits::set(&config, &sub(&["set-limit", "-m", "3", "-l", "0"])).is_err());
    assert!(!config.limits_path.exists());
}

#[test]
fn limits_listing_reads_saved_entries() {
    let (_dir, config) = setup();
    limits::list(&config, &sub(&["limits"])).unwrap();
    assert_eq!(std::fs::read_to_string(&config.limits_path).unwrap(), "[]");

    limits::set(&config, &sub(&["set-limit", "-m", "6", "-l", "450.25", "--year", "2025"])).unwrap();
    limits::list(&config, &sub(&["limits"])).unwrap();
    limits::list(&config, &sub(&["limits", "--json"])).unwrap();
    limits::list(&config, &sub(&["limits", "--jsonl"])).unwrap();

    let entries = BudgetTracker::new(&config).load().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "June");
    assert_eq!(entries[0].amount, Decimal::new(45025, 2));
}
