// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::Once;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;

use crate::error::TrackerError;
use crate::models::validate_amount;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

static TRACING_INIT: Once = Once::new();

/// Installs the stderr tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("spendclip=warn"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// Parses a currency amount: positive, at most `MAX_AMOUNT`, at most cents.
pub fn parse_amount(s: &str) -> Result<Decimal> {
    Ok(validate_amount(parse_decimal(s)?)?)
}

/// Accepts `3`, `03`, `march` or `Mar` and returns the month number.
pub fn parse_month(s: &str) -> Result<u32, TrackerError> {
    let key = s.trim();
    if let Ok(n) = key.parse::<u32>() {
        if (1..=12).contains(&n) {
            return Ok(n);
        }
        return Err(TrackerError::Validation(format!(
            "The month number must be between 1 and 12, received {}",
            n
        )));
    }
    let lower = key.to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|name| {
            let name = name.to_lowercase();
            name == lower || (lower.len() == 3 && name.starts_with(&lower))
        })
        .map(|i| i as u32 + 1)
        .ok_or_else(|| TrackerError::Validation(format!("Invalid month '{}'", key)))
}

pub fn month_name(month: u32) -> Result<&'static str, TrackerError> {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .ok_or_else(|| TrackerError::Validation(format!("Invalid month number {}", month)))
}

pub fn month_name_of(date: NaiveDate) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

/// First and last day of `month` in `year`.
pub fn month_boundaries(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), TrackerError> {
    let invalid = || TrackerError::Validation(format!("Invalid month {}-{:02}", year, month));
    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(invalid)?;
    let end = next.pred_opt().ok_or_else(invalid)?;
    Ok((start, end))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // Arrays stream one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_month_accepts_numbers_and_names() {
        assert_eq!(parse_month("3").unwrap(), 3);
        assert_eq!(parse_month("03").unwrap(), 3);
        assert_eq!(parse_month("March").unwrap(), 3);
        assert_eq!(parse_month(" december ").unwrap(), 12);
        assert_eq!(parse_month("sep").unwrap(), 9);
        assert!(parse_month("13").is_err());
        assert!(parse_month("0").is_err());
        assert!(parse_month("Smarch").is_err());
    }

    #[test]
    fn month_name_bounds() {
        assert_eq!(month_name(1).unwrap(), "January");
        assert_eq!(month_name(12).unwrap(), "December");
        assert!(month_name(0).is_err());
        assert!(month_name(13).is_err());
    }

    #[test]
    fn month_boundaries_handle_leap_years_and_december() {
        let (s, e) = month_boundaries(2024, 2).unwrap();
        assert_eq!(s.to_string(), "2024-02-01");
        assert_eq!(e.to_string(), "2024-02-29");
        let (_, e) = month_boundaries(2025, 2).unwrap();
        assert_eq!(e.to_string(), "2025-02-28");
        let (s, e) = month_boundaries(2025, 12).unwrap();
        assert_eq!(s.to_string(), "2025-12-01");
        assert_eq!(e.to_string(), "2025-12-31");
    }

    #[test]
    fn parse_amount_rejects_non_positive() {
        assert_eq!(parse_amount("12.50").unwrap(), Decimal::new(125, 1));
        assert!(parse_amount("0").is_err());
        assert!(parse_amount("-4").is_err());
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("79228162514264337593543950335").is_err());
        assert!(parse_amount("1000000000000.01").is_err());
        assert!(parse_amount("3.141").is_err());
        assert_eq!(parse_amount("1000000000000").unwrap(), Decimal::new(1_000_000_000_000, 0));
    }

    #[test]
    fn month_name_of_date() {
        let d = NaiveDate::from_ymd_opt(2025, 10, 19).unwrap();
        assert_eq!(month_name_of(d), "October");
    }
}
