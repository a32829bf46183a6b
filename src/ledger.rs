// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The expense ledger and its CSV-backed store.
//!
//! Every mutation rewrites the whole file. The header row is written even
//! when the ledger holds no records.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, Expense, LEDGER_HEADER, validate_amount};
use crate::storage;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    pub records: Vec<Expense>,
}

impl Ledger {
    pub fn new(records: Vec<Expense>) -> Self {
        Self { records }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Smallest positive identifier not held by any record.
    pub fn next_id(&self) -> u32 {
        let mut ids: Vec<u32> = self.records.iter().map(|e| e.id).collect();
        ids.sort_unstable();
        ids.dedup();

        let mut candidate = 1;
        for id in ids {
            if id < candidate {
                continue;
            }
            if id != candidate {
                break;
            }
            candidate += 1;
        }
        candidate
    }

    pub fn id_exists(&self, id: u32) -> bool {
        self.records.iter().any(|e| e.id == id)
    }

    pub fn get(&self, id: u32) -> Option<&Expense> {
        self.records.iter().find(|e| e.id == id)
    }

    pub fn require(&self, id: u32) -> TrackerResult<&Expense> {
        self.get(id).ok_or(TrackerError::NotFound { id })
    }

    /// Total of all amounts, or of the records dated in `month` (1-12) of any year.
    pub fn summary(&self, month: Option<u32>) -> Decimal {
        self.records
            .iter()
            .filter(|e| month.is_none_or(|m| e.month() == m))
            .fold(Decimal::ZERO, |acc, e| acc.saturating_add(e.amount))
    }

    pub fn filter(&self, month: Option<u32>, category: Option<Category>) -> Vec<&Expense> {
        self.records
            .iter()
            .filter(|e| month.is_none_or(|m| e.month() == m))
            .filter(|e| category.is_none_or(|c| e.category == c))
            .collect()
    }

    fn position(&self, id: u32) -> Option<usize> {
        self.records.iter().position(|e| e.id == id)
    }
}

pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn new(config: &Config) -> Self {
        Self::at(&config.ledger_path)
    }

    pub fn at(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the ledger. A missing or empty file is initialised with just the header.
    pub fn load(&self) -> TrackerResult<Ledger> {
        match storage::read_nonempty(&self.path)? {
            Some(raw) => {
                let ledger = self.parse(&raw)?;
                debug!(path = %self.path.display(), records = ledger.len(), "ledger loaded");
                Ok(ledger)
            }
            None => {
                info!(path = %self.path.display(), "initialising empty ledger");
                self.reinitialize()
            }
        }
    }

    /// Overwrites the backing file with an empty ledger.
    pub fn reinitialize(&self) -> TrackerResult<Ledger> {
        let ledger = Ledger::default();
        self.save(&ledger)?;
        Ok(ledger)
    }

    pub fn append(&self, ledger: &mut Ledger, expense: Expense) -> TrackerResult<()> {
        if expense.id == 0 || ledger.id_exists(expense.id) {
            return Err(TrackerError::Validation(format!(
                "ID {} is already taken or invalid",
                expense.id
            )));
        }
        let amount = validate_amount(expense.amount)?;
        ledger.records.push(Expense { amount, ..expense });
        self.save(ledger)
    }

    /// Returns `false` without touching the file when `id` is unknown.
    pub fn update_description(
        &self,
        ledger: &mut Ledger,
        id: u32,
        description: &str,
    ) -> TrackerResult<bool> {
        let Some(idx) = ledger.position(id) else {
            return Ok(false);
        };
        ledger.records[idx].description = description.to_string();
        self.save(ledger)?;
        Ok(true)
    }

    /// Returns `false` without touching the file when `id` is unknown.
    pub fn update_amount(
        &self,
        ledger: &mut Ledger,
        id: u32,
        amount: Decimal,
    ) -> TrackerResult<bool> {
        let amount = validate_amount(amount)?;
        let Some(idx) = ledger.position(id) else {
            return Ok(false);
        };
        ledger.records[idx].amount = amount;
        self.save(ledger)?;
        Ok(true)
    }

    /// Removes the first record with `id`. Returns `false` when there was none.
    pub fn remove(&self, ledger: &mut Ledger, id: u32) -> TrackerResult<bool> {
        let Some(idx) = ledger.position(id) else {
            return Ok(false);
        };
        ledger.records.remove(idx);
        self.save(ledger)?;
        Ok(true)
    }

    fn save(&self, ledger: &Ledger) -> TrackerResult<()> {
        let mut wtr = WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        wtr.write_record(LEDGER_HEADER)?;
        for expense in &ledger.records {
            wtr.serialize(expense)?;
        }
        let bytes = wtr
            .into_inner()
            .map_err(|e| TrackerError::io(&self.path, e.into_error()))?;
        storage::write_atomic(&self.path, &bytes)?;
        debug!(path = %self.path.display(), records = ledger.len(), "ledger rewritten");
        Ok(())
    }

    fn parse(&self, raw: &str) -> TrackerResult<Ledger> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::Headers)
            .from_reader(raw.as_bytes());

        let headers = rdr
            .headers()
            .map_err(|e| TrackerError::corrupt(&self.path, e.to_string()))?
            .clone();
        if !headers.iter().eq(LEDGER_HEADER.iter().copied()) {
            return Err(TrackerError::corrupt(
                &self.path,
                format!(
                    "unexpected header '{}', expected '{}'",
                    headers.iter().collect::<Vec<_>>().join(","),
                    LEDGER_HEADER.join(",")
                ),
            ));
        }

        let mut seen = HashSet::new();
        let mut records = Vec::new();
        let mut row = StringRecord::new();
        loop {
            let more = rdr
                .read_record(&mut row)
                .map_err(|e| TrackerError::corrupt(&self.path, e.to_string()))?;
            if !more {
                break;
            }
            let line = row.position().map(|p| p.line()).unwrap_or_default();
            let expense: Expense = row
                .deserialize(Some(&headers))
                .map_err(|e| TrackerError::corrupt(&self.path, format!("line {}: {}", line, e)))?;
            if expense.id == 0 {
                return Err(TrackerError::corrupt(
                    &self.path,
                    format!("line {}: ID must be a positive integer", line),
                ));
            }
            if !seen.insert(expense.id) {
                return Err(TrackerError::corrupt(
                    &self.path,
                    format!("line {}: duplicate ID {}", line, expense.id),
                ));
            }
            if let Err(err) = validate_amount(expense.amount) {
                return Err(TrackerError::corrupt(
                    &self.path,
                    format!("line {}: {}", line, err),
                ));
            }
            records.push(expense);
        }
        Ok(Ledger { records })
    }
}
