// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

/// Log filter directives from SCHH_LOG (e.g. `debug`, `schh_adapters=trace`)
pub fn log_filter() -> Option<String> {
    std::env::var("SCHH_LOG").ok().filter(|s| !s.is_empty())
}
