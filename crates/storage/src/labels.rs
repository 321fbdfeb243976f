// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `last_sessions` file: the most recently used label per host.

use crate::kv::{parse_line, read_or_empty, write_atomic};
use crate::StorageError;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

const LABELS_FILE: &str = "last_sessions";

/// Last-used session label per host name.
#[derive(Debug, Clone)]
pub struct LabelStore {
    path: PathBuf,
}

impl LabelStore {
    /// Store backed by `<dir>/last_sessions`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(LABELS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored label for `host`, or [`StorageError::LabelNotFound`].
    pub fn get(&self, host: &str) -> Result<String, StorageError> {
        self.load()?
            .shift_remove(host)
            .ok_or_else(|| StorageError::LabelNotFound(host.to_string()))
    }

    pub fn set(&self, host: &str, label: &str) -> Result<(), StorageError> {
        let mut entries = self.load()?;
        entries.insert(host.to_string(), label.to_string());
        self.save(&entries)
    }

    /// Forget the label for `host`. Returns whether an entry existed.
    pub fn clear(&self, host: &str) -> Result<bool, StorageError> {
        let mut entries = self.load()?;
        if entries.shift_remove(host).is_none() {
            return Ok(false);
        }
        self.save(&entries)?;
        Ok(true)
    }

    /// Entries without a label are skipped. A repeated host keeps its first label.
    fn load(&self) -> Result<IndexMap<String, String>, StorageError> {
        let content = read_or_empty(&self.path)?;
        let mut entries = IndexMap::new();
        for (host, label) in content.lines().filter_map(parse_line) {
            if let Some(label) = label {
                entries
                    .entry(host.to_string())
                    .or_insert_with(|| label.to_string());
            }
        }
        Ok(entries)
    }

    fn save(&self, entries: &IndexMap<String, String>) -> Result<(), StorageError> {
        write_atomic(
            &self.path,
            entries.iter().map(|(h, l)| (h.as_str(), l.as_str())),
        )?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "labels_tests.rs"]
mod tests;
