// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parsing of `screen -ls` output into per-host session records.
//!
//! screen prints one session per line as `<pid>.<name>` followed by
//! free-form status columns. The format is not under our control, so the
//! parser is deliberately narrow: the first whitespace-separated field that
//! contains a `.` is taken as the session handle, and lines that don't fit
//! are skipped rather than reported.

use serde::Serialize;

/// An existing session belonging to a host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionInfo {
    /// Full screen handle as listed, e.g. `12345.schh_web1_alpha`
    pub id: String,
    /// Label left after stripping the host prefix, e.g. `alpha`
    pub label: String,
}

impl SessionInfo {
    /// Session name without the leading pid.
    pub fn name(&self) -> &str {
        self.id
            .split_once('.')
            .map(|(_, name)| name)
            .unwrap_or(&self.id)
    }
}

/// Extract the sessions whose name starts with `prefix` from listing output.
///
/// Results keep the order in which screen listed them. Duplicate labels are
/// passed through unchanged.
pub fn parse_listing(output: &str, prefix: &str) -> Vec<SessionInfo> {
    output
        .lines()
        .filter_map(|line| parse_line(line, prefix))
        .collect()
}

fn parse_line(line: &str, prefix: &str) -> Option<SessionInfo> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let candidate = line.split_whitespace().find(|field| field.contains('.'))?;
    let (_pid, name) = candidate.split_once('.')?;
    let label = name.strip_prefix(prefix)?;
    if label.is_empty() {
        return None;
    }
    Some(SessionInfo {
        id: candidate.to_string(),
        label: label.to_string(),
    })
}

#[cfg(test)]
#[path = "listing_tests.rs"]
mod tests;
