// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

/// Column names of the ledger file, in on-disk order.
pub const LEDGER_HEADER: [&str; 5] = ["ID", "Date", "Description", "Amount", "Category"];

/// Largest accepted expense or limit amount (one trillion).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Amounts carry at most cents, so with `MAX_AMOUNT` they stay within the
/// digits an `f64` in the limits file holds exactly.
pub const AMOUNT_SCALE: u32 = 2;

/// Checks `0 < amount <= MAX_AMOUNT` with at most two decimal places.
pub fn validate_amount(amount: Decimal) -> Result<Decimal, TrackerError> {
    let amount = amount.normalize();
    if amount <= Decimal::ZERO {
        return Err(TrackerError::Validation(format!(
            "Amount must be greater than zero, received {}",
            amount
        )));
    }
    if amount > MAX_AMOUNT {
        return Err(TrackerError::Validation(format!(
            "Amount must not exceed {}, received {}",
            MAX_AMOUNT, amount
        )));
    }
    if amount.scale() > AMOUNT_SCALE {
        return Err(TrackerError::Validation(format!(
            "Amount must have at most {} decimal places, received {}",
            AMOUNT_SCALE, amount
        )));
    }
    Ok(amount)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Housing,
    Transport,
    Utilities,
    Health,
    Entertainment,
    Education,
    Shopping,
    Other,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Food,
        Category::Housing,
        Category::Transport,
        Category::Utilities,
        Category::Health,
        Category::Entertainment,
        Category::Education,
        Category::Shopping,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Housing => "Housing",
            Category::Transport => "Transport",
            Category::Utilities => "Utilities",
            Category::Health => "Health",
            Category::Entertainment => "Entertainment",
            Category::Education => "Education",
            Category::Shopping => "Shopping",
            Category::Other => "Other",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.as_str()).collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| {
                TrackerError::Validation(format!(
                    "Unknown category '{}'. Allowed categories: {}",
                    wanted,
                    Self::names().join(", ")
                ))
            })
    }
}

/// One row of the ledger file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    #[serde(rename = "ID")]
    pub id: u32,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Amount", with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(rename = "Category")]
    pub category: Category,
}

impl Expense {
    pub fn month(&self) -> u32 {
        self.date.month()
    }
}

/// Budget threshold for one calendar month, keyed by English month name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitEntry {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    /// Month spend at the time the limit was set. Not refreshed by later adds.
    #[serde(with = "rust_decimal::serde::float")]
    pub spent_so_far: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitChange {
    Added,
    Updated,
}

impl LimitChange {
    pub fn as_str(&self) -> &'static str {
        match self {
            LimitChange::Added => "added",
            LimitChange::Updated => "updated",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverspendReport {
    pub month: String,
    pub limit: Decimal,
    pub spent_so_far: Decimal,
    pub new_expense: Decimal,
    pub over_by: Decimal,
}

impl fmt::Display for OverspendReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Warning! Expense exceeds the monthly budget!")?;
        writeln!(f, "  Month:        {}", self.month)?;
        writeln!(f, "  Month limit:  ${}", self.limit)?;
        writeln!(f, "  Spent so far: ${}", self.spent_so_far)?;
        writeln!(f, "  New expense:  ${}", self.new_expense)?;
        writeln!(f, "  ----------------------------------")?;
        write!(f, "  Over budget by: ${}", self.over_by)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BudgetCheck {
    NoLimit { month: String },
    WithinLimit { remaining: Decimal },
    Overspent(OverspendReport),
}

impl BudgetCheck {
    pub fn overspend(&self) -> Option<&OverspendReport> {
        match self {
            BudgetCheck::Overspent(r) => Some(r),
            _ => None,
        }
    }
}
