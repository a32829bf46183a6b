// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Monthly budget limits stored as a JSON list.
//!
//! `spentSoFar` is captured when a limit is set and is not refreshed when
//! expenses are added afterwards, so the overspend check compares against that
//! snapshot.

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::TrackerResult;
use crate::models::{BudgetCheck, LimitChange, LimitEntry, OverspendReport};
use crate::storage;

pub struct BudgetTracker {
    path: PathBuf,
}

impl BudgetTracker {
    pub fn new(config: &Config) -> Self {
        Self::at(&config.limits_path)
    }

    pub fn at(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the limits. Missing, empty or unreadable content resets the file to `[]`.
    pub fn load(&self) -> TrackerResult<Vec<LimitEntry>> {
        let raw = match storage::read_nonempty(&self.path) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                self.save(&[])?;
                return Ok(Vec::new());
            }
            Err(e) if e.is_corrupt() => {
                warn!(path = %self.path.display(), "budget file is corrupted, reinitialising");
                self.save(&[])?;
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        match serde_json::from_str::<Vec<LimitEntry>>(&raw) {
            Ok(limits) => {
                debug!(path = %self.path.display(), entries = limits.len(), "limits loaded");
                Ok(limits)
            }
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "budget file is corrupted, reinitialising"
                );
                self.save(&[])?;
                Ok(Vec::new())
            }
        }
    }

    /// Replaces the entry for the same month or appends a new one, then persists.
    pub fn set_limit(
        &self,
        limits: &mut Vec<LimitEntry>,
        entry: LimitEntry,
    ) -> TrackerResult<LimitChange> {
        let change = match limits.iter_mut().find(|l| l.name == entry.name) {
            Some(existing) => {
                *existing = entry;
                LimitChange::Updated
            }
            None => {
                limits.push(entry);
                LimitChange::Added
            }
        };
        self.save(limits)?;
        Ok(change)
    }

    fn save(&self, limits: &[LimitEntry]) -> TrackerResult<()> {
        let body = serde_json::to_string_pretty(limits)?;
        storage::write_atomic(&self.path, body.as_bytes())?;
        debug!(path = %self.path.display(), entries = limits.len(), "limits rewritten");
        Ok(())
    }
}

/// Compares the month's recorded spend plus `amount` against its limit.
pub fn check_overspend(limits: &[LimitEntry], month: &str, amount: Decimal) -> BudgetCheck {
    let Some(entry) = limits.iter().find(|l| l.name == month) else {
        return BudgetCheck::NoLimit {
            month: month.to_string(),
        };
    };

    let projected = entry.spent_so_far.saturating_add(amount);
    if projected > entry.amount {
        BudgetCheck::Overspent(OverspendReport {
            month: entry.name.clone(),
            limit: entry.amount,
            spent_so_far: entry.spent_so_far,
            new_expense: amount,
            over_by: projected.saturating_sub(entry.amount),
        })
    } else {
        BudgetCheck::WithinLimit {
            remaining: entry.amount.saturating_sub(projected),
        }
    }
}
