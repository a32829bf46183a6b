// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Spendclip", "spendclip"));

pub const DATA_DIR_ENV: &str = "SPENDCLIP_DATA_DIR";
pub const LEDGER_FILE: &str = "expenses.csv";
pub const LIMITS_FILE: &str = "limits.json";

/// Where the ledger and the budget limits live on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub ledger_path: PathBuf,
    pub limits_path: PathBuf,
}

impl Config {
    pub fn from_data_dir(dir: impl Into<PathBuf>) -> Self {
        let data_dir = dir.into();
        Self {
            ledger_path: data_dir.join(LEDGER_FILE),
            limits_path: data_dir.join(LIMITS_FILE),
            data_dir,
        }
    }

    /// Resolution order: explicit override, `SPENDCLIP_DATA_DIR`, platform data dir.
    pub fn resolve(override_dir: Option<&Path>) -> Result<Self> {
        let dir = match override_dir {
            Some(d) => d.to_path_buf(),
            None => match std::env::var_os(DATA_DIR_ENV) {
                Some(v) if !v.is_empty() => PathBuf::from(v),
                _ => default_data_dir()?,
            },
        };
        let cfg = Self::from_data_dir(dir);
        cfg.ensure_data_dir()?;
        Ok(cfg)
    }

    pub fn ensure_data_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir).with_context(|| {
            format!("Failed to create data dir {}", self.data_dir.display())
        })
    }
}

pub fn default_data_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    Ok(proj.data_dir().to_path_buf())
}
