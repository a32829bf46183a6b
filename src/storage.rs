// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Whole-file reads and atomic rewrites shared by the ledger and budget stores.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::error::{TrackerError, TrackerResult};

/// Returns the file contents, or `None` when the file is missing or empty.
pub fn read_nonempty(path: &Path) -> TrackerResult<Option<String>> {
    match fs::read_to_string(path) {
        Ok(s) if s.trim().is_empty() => Ok(None),
        Ok(s) => Ok(Some(s)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            Err(TrackerError::corrupt(path, "file is not valid UTF-8"))
        }
        Err(e) => Err(TrackerError::io(path, e)),
    }
}

/// Writes `bytes` to a sibling temp file, syncs it, then renames over `path`.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> TrackerResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| TrackerError::io(parent, e))?;
    }

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp = Path::new(&tmp_name);

    let mut file = File::create(tmp).map_err(|e| TrackerError::io(tmp, e))?;
    file.write_all(bytes).map_err(|e| TrackerError::io(tmp, e))?;
    file.sync_all().map_err(|e| TrackerError::io(tmp, e))?;
    drop(file);

    fs::rename(tmp, path).map_err(|e| {
        let _ = fs::remove_file(tmp);
        TrackerError::io(path, e)
    })
}
