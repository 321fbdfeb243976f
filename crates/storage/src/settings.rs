// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Optional `config.toml` in the config directory.
//!
//! ```toml
//! multiplexer = "/usr/local/bin/screen"
//! remote_login = "mosh"
//! ```

use serde::Deserialize;
use std::path::Path;

const SETTINGS_FILE: &str = "config.toml";

/// Program overrides read from `config.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Multiplexer program used instead of `screen`
    pub multiplexer: Option<String>,
    /// Remote-login program used instead of `ssh`
    pub remote_login: Option<String>,
}

impl Settings {
    /// Load settings from `<dir>/config.toml`.
    ///
    /// A missing file yields defaults. An unreadable or malformed file is
    /// logged and also yields defaults.
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(SETTINGS_FILE);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unable to read settings");
                return Self::default();
            }
        };
        match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
