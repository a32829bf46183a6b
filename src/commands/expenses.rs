// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::budget::{BudgetTracker, check_overspend};
use crate::config::Config;
use crate::ledger::{Ledger, LedgerStore};
use crate::models::{BudgetCheck, Category, Expense};
use crate::utils::{
    maybe_print_json, month_name, month_name_of, parse_amount, parse_date, parse_month,
    pretty_table, today,
};
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

pub(crate) fn load_ledger(store: &LedgerStore) -> Result<Ledger> {
    store.load().with_context(|| {
        format!(
            "Could not read {}. Fix the file or run `spendclip init --reset` to start over",
            store.path().display()
        )
    })
}

fn description(sub: &clap::ArgMatches) -> Option<String> {
    sub.get_many::<String>("description")
        .map(|words| words.map(String::as_str).collect::<Vec<_>>().join(" "))
}

fn category(sub: &clap::ArgMatches) -> Result<Option<Category>> {
    Ok(sub
        .get_one::<String>("category")
        .map(|c| c.parse::<Category>())
        .transpose()?)
}

fn month(sub: &clap::ArgMatches) -> Result<Option<u32>> {
    Ok(sub
        .get_one::<String>("month")
        .map(|m| parse_month(m))
        .transpose()?)
}

pub fn add(config: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let (expense, check) = record_expense(config, sub)?;
    println!("Expense added successfully. (ID: {})", expense.id);
    match check {
        BudgetCheck::Overspent(report) => println!("{}", report),
        BudgetCheck::NoLimit { month } => println!("No budget set for {}.", month),
        BudgetCheck::WithinLimit { remaining } => {
            println!("Remaining budget for {}: ${}", month_name_of(expense.date), remaining)
        }
    }
    Ok(())
}

/// Appends the expense, then checks it against the limit of its month.
pub fn record_expense(config: &Config, sub: &clap::ArgMatches) -> Result<(Expense, BudgetCheck)> {
    let description = description(sub).unwrap_or_default();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let category = category(sub)?.context("category missing")?;
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => today(),
    };

    let store = LedgerStore::new(config);
    let mut ledger = load_ledger(&store)?;
    let expense = Expense {
        id: ledger.next_id(),
        date,
        description,
        amount,
        category,
    };
    store.append(&mut ledger, expense.clone())?;

    let limits = BudgetTracker::new(config).load()?;
    let check = check_overspend(&limits, month_name_of(expense.date), expense.amount);
    Ok((expense, check))
}

pub fn update(config: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<u32>("id").unwrap();
    let new_description = description(sub);
    let new_amount = sub
        .get_one::<String>("amount")
        .map(|a| parse_amount(a))
        .transpose()?;

    if new_description.is_none() && new_amount.is_none() {
        println!("Nothing to update. Pass --description and/or --amount.");
        return Ok(());
    }

    let store = LedgerStore::new(config);
    let mut ledger = load_ledger(&store)?;
    if let Err(err) = ledger.require(id) {
        debug!(%err, "unknown expense id");
        println!("ID {} is not defined.", id);
        return Ok(());
    }
    if let Some(text) = new_description {
        store.update_description(&mut ledger, id, &text)?;
        println!("Description updated successfully");
    }
    if let Some(amount) = new_amount {
        store.update_amount(&mut ledger, id, amount)?;
        println!("Amount updated successfully");
    }
    Ok(())
}

pub fn delete(config: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<u32>("id").unwrap();
    let store = LedgerStore::new(config);
    let mut ledger = load_ledger(&store)?;
    if let Err(err) = ledger.require(id) {
        debug!(%err, "unknown expense id");
        println!("ID {} is not defined.", id);
        return Ok(());
    }
    store.remove(&mut ledger, id)?;
    println!("Expense deleted successfully.");
    Ok(())
}

pub fn summary(config: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let month = month(sub)?;
    let ledger = load_ledger(&LedgerStore::new(config))?;
    let total = ledger.summary(month);
    match month {
        Some(m) => println!("Total expenses for {}: ${}", month_name(m)?, total),
        None => println!("Total expenses: ${}", total),
    }
    Ok(())
}

pub fn list(config: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(config, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.description.clone(),
                    r.amount.clone(),
                    r.category.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Date", "Description", "Amount", "Category"], rows)
        );
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct ExpenseRow {
    pub id: u32,
    pub date: String,
    pub description: String,
    pub amount: String,
    pub category: String,
}

pub fn query_rows(config: &Config, sub: &clap::ArgMatches) -> Result<Vec<ExpenseRow>> {
    let month = month(sub)?;
    let category = category(sub)?;
    let ledger = load_ledger(&LedgerStore::new(config))?;
    Ok(ledger
        .filter(month, category)
        .into_iter()
        .map(|e| ExpenseRow {
            id: e.id,
            date: e.date.to_string(),
            description: e.description.clone(),
            amount: e.amount.to_string(),
            category: e.category.to_string(),
        })
        .collect())
}
