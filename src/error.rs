// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Error type for the ledger and budget stores.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Expense not found: {id}")]
    NotFound { id: u32 },

    #[error("Validation error: {0}")]
    Validation(String),

    /// The backing file exists but cannot be read as the expected format.
    #[error("Corrupt data in {}: {reason}", .path.display())]
    CorruptData { path: PathBuf, reason: String },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TrackerError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn corrupt(path: &Path, reason: impl Into<String>) -> Self {
        Self::CorruptData {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::CorruptData { .. })
    }
}

pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrupt_error_names_file_and_reason() {
        let err = TrackerError::corrupt(Path::new("/tmp/expenses.csv"), "line 3: bad ID");
        assert_eq!(
            err.to_string(),
            "Corrupt data in /tmp/expenses.csv: line 3: bad ID"
        );
        assert!(err.is_corrupt());
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_display() {
        let err = TrackerError::NotFound { id: 7 };
        assert_eq!(err.to_string(), "Expense not found: 7");
        assert!(err.is_not_found());
    }

    #[test]
    fn io_error_keeps_source() {
        let src = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = TrackerError::io(Path::new("limits.json"), src);
        assert!(matches!(err, TrackerError::Io { .. }));
        assert!(err.to_string().contains("limits.json"));
    }
}
