// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `hosts` file: one `name [target]` entry per line.

use crate::kv::{parse_line, read_or_empty, write_atomic};
use crate::StorageError;
use schh_core::Host;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

const HOSTS_FILE: &str = "hosts";

/// Registered hosts, kept in file order.
#[derive(Debug, Clone)]
pub struct HostStore {
    path: PathBuf,
}

impl HostStore {
    /// Store backed by `<dir>/hosts`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(HOSTS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all hosts. A missing file means no hosts.
    ///
    /// A line with only a name uses the name as the ssh target.
    pub fn load(&self) -> Result<Vec<Host>, StorageError> {
        let content = read_or_empty(&self.path)?;
        Ok(content
            .lines()
            .filter_map(parse_line)
            .map(|(name, target)| Host::new(name, target.unwrap_or(name)))
            .collect())
    }

    pub fn find(&self, name: &str) -> Result<Option<Host>, StorageError> {
        Ok(self.load()?.into_iter().find(|h| h.name == name))
    }

    /// Append a host. Fails with [`StorageError::HostExists`] on a duplicate name.
    pub fn add(&self, name: &str, target: &str) -> Result<(), StorageError> {
        let content = read_or_empty(&self.path)?;
        let exists = content
            .lines()
            .filter_map(parse_line)
            .any(|(existing, _)| existing == name);
        if exists {
            return Err(StorageError::HostExists(name.to_string()));
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        // A hand-edited file may lack its final newline
        if !content.is_empty() && !content.ends_with('\n') {
            writeln!(file)?;
        }
        writeln!(file, "{} {}", name, target)?;
        tracing::debug!(name, target, "host added");
        Ok(())
    }

    /// Remove a host. Fails with [`StorageError::HostNotFound`] when absent.
    pub fn remove(&self, name: &str) -> Result<(), StorageError> {
        let mut hosts = self.load()?;
        let Some(index) = hosts.iter().position(|h| h.name == name) else {
            return Err(StorageError::HostNotFound(name.to_string()));
        };
        hosts.remove(index);
        write_atomic(
            &self.path,
            hosts.iter().map(|h| (h.name.as_str(), h.target.as_str())),
        )?;
        tracing::debug!(name, "host removed");
        Ok(())
    }
}

#[cfg(test)]
#[path = "hosts_tests.rs"]
mod tests;
