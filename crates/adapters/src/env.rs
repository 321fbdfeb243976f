// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the adapters crate.

fn non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|s| !s.is_empty())
}

/// Multiplexer program override (`SCHH_SCREEN`).
pub fn screen_program() -> Option<String> {
    non_empty("SCHH_SCREEN")
}

/// Remote-login program override (`SCHH_SSH`).
pub fn ssh_program() -> Option<String> {
    non_empty("SCHH_SSH")
}
