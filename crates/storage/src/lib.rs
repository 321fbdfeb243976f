// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Flat-file storage for schh: registered hosts, last-used labels and settings

mod env;
mod error;
mod hosts;
mod kv;
mod labels;
mod settings;

pub use error::StorageError;
pub use hosts::HostStore;
pub use labels::LabelStore;
pub use settings::Settings;

use std::path::PathBuf;

/// Resolve and create the config directory.
///
/// `SCHH_CONFIG_DIR` > `<platform config dir>/schh` > `~/.config/schh`
pub fn config_dir() -> Result<PathBuf, StorageError> {
    let dir = match env::config_dir_override() {
        Some(dir) => dir,
        None => dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .ok_or(StorageError::NoConfigDir)?
            .join("schh"),
    };
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
