// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session management adapters

mod screen;

pub use screen::ScreenAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeSessionAdapter, SessionCall};

use schh_core::{host_prefix, parse_listing, SessionId, SessionInfo};
use thiserror::Error;

/// Errors from session operations
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("spawn failed: {0}")]
    SpawnFailed(String),
    #[error("command failed: {0}")]
    CommandFailed(String),
}

/// Adapter for the terminal multiplexer that hosts remote sessions
pub trait SessionAdapter: Clone + Send + Sync + 'static {
    /// Raw session listing text (one session per line, `pid.name` somewhere on it).
    ///
    /// A listing command that exits non-zero but still prints something is
    /// not a failure; screen reports "no sessions" exactly that way.
    fn list_raw(&self) -> Result<String, SessionError>;

    /// Start a detached session named `id` running the remote login to `target`.
    fn start_detached(&self, id: &SessionId, target: &str) -> Result<(), SessionError>;

    /// Attach the current terminal to session `id`.
    ///
    /// Real adapters replace the current process and only return on failure.
    fn exec_attach(&self, id: &str) -> Result<(), SessionError>;
}

/// Sessions belonging to `host`, in the order the multiplexer lists them.
///
/// A host whose name has no usable characters cannot own sessions, so the
/// multiplexer is not queried at all.
pub fn list_sessions<S: SessionAdapter>(
    adapter: &S,
    host: &str,
) -> Result<Vec<SessionInfo>, SessionError> {
    let Some(prefix) = host_prefix(host) else {
        return Ok(Vec::new());
    };
    let output = adapter.list_raw()?;
    Ok(parse_listing(&output, &prefix))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
