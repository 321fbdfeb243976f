// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the storage crate.

use std::path::PathBuf;

/// Explicit config directory (`SCHH_CONFIG_DIR`), ignored when empty.
pub fn config_dir_override() -> Option<PathBuf> {
    std::env::var("SCHH_CONFIG_DIR")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}
