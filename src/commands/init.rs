// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::budget::BudgetTracker;
use crate::commands::expenses::load_ledger;
use crate::config::Config;
use crate::ledger::LedgerStore;
use anyhow::Result;

pub fn handle(config: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let store = LedgerStore::new(config);
    let ledger = if sub.get_flag("reset") {
        store.reinitialize()?
    } else {
        load_ledger(&store)?
    };
    let limits = BudgetTracker::new(config).load()?;
    println!(
        "Data initialized at {} ({} expenses, {} budget limits)",
        config.data_dir.display(),
        ledger.len(),
        limits.len()
    );
    Ok(())
}
