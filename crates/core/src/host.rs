// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registered remote hosts.

use serde::Serialize;

/// A host the user can open sessions on.
///
/// `name` is what the user types; `target` is what gets handed to ssh
/// (a hostname, `user@host`, or an ssh config alias).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Host {
    pub name: String,
    pub target: String,
}

impl Host {
    pub fn new(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
        }
    }
}

impl std::fmt::Display for Host {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.name == self.target {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} -> {}", self.name, self.target)
        }
    }
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
