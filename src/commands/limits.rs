// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::budget::BudgetTracker;
use crate::commands::expenses::load_ledger;
use crate::config::Config;
use crate::ledger::LedgerStore;
use crate::models::LimitEntry;
use crate::utils::{
    maybe_print_json, month_boundaries, month_name, parse_amount, parse_month, pretty_table, today,
};
use anyhow::Result;
use chrono::Datelike;

pub fn set(config: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let month = parse_month(sub.get_one::<String>("month").unwrap())?;
    let limit = parse_amount(sub.get_one::<String>("limit").unwrap())?;
    let year = sub
        .get_one::<i32>("year")
        .copied()
        .unwrap_or_else(|| today().year());
    let (period_start, period_end) = month_boundaries(year, month)?;

    let ledger = load_ledger(&LedgerStore::new(config))?;
    let tracker = BudgetTracker::new(config);
    let mut limits = tracker.load()?;

    let name = month_name(month)?.to_string();
    let entry = LimitEntry {
        name: name.clone(),
        amount: limit,
        period_start,
        period_end,
        spent_so_far: ledger.summary(Some(month)),
    };
    let change = tracker.set_limit(&mut limits, entry)?;
    println!("Budget for {} has been {}.", name, change.as_str());
    Ok(())
}

pub fn list(config: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let limits = BudgetTracker::new(config).load()?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &limits)? {
        let rows: Vec<Vec<String>> = limits
            .iter()
            .map(|l| {
                vec![
                    l.name.clone(),
                    l.amount.to_string(),
                    format!("{} .. {}", l.period_start, l.period_end),
                    l.spent_so_far.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Month", "Limit", "Period", "Spent so far"], rows)
        );
    }
    Ok(())
}
