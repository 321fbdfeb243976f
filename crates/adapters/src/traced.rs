// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrapper for consistent observability

use crate::session::{SessionAdapter, SessionError};
use schh_core::SessionId;

/// Wrapper that adds tracing to any SessionAdapter
#[derive(Clone)]
pub struct TracedSession<S> {
    inner: S,
}

impl<S> TracedSession<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: SessionAdapter> SessionAdapter for TracedSession<S> {
    fn list_raw(&self) -> Result<String, SessionError> {
        tracing::debug_span!("session.list").in_scope(|| {
            let start = std::time::Instant::now();
            let result = self.inner.list_raw();
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(text) => tracing::debug!(lines = text.lines().count(), elapsed_ms, "listed"),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "listing failed"),
            }
            result
        })
    }

    fn start_detached(&self, id: &SessionId, target: &str) -> Result<(), SessionError> {
        tracing::info_span!("session.start", id = id.as_str(), remote = target).in_scope(|| {
            tracing::info!("starting");
            let start = std::time::Instant::now();
            let result = self.inner.start_detached(id, target);
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(()) => tracing::info!(elapsed_ms, "session created"),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "start failed"),
            }
            result
        })
    }

    fn exec_attach(&self, id: &str) -> Result<(), SessionError> {
        // Logged up front: on success the process is replaced
        tracing::info_span!("session.attach", id).in_scope(|| tracing::info!("attaching"));
        let result = self.inner.exec_attach(id);
        if let Err(ref e) = result {
            tracing::error!(id, error = %e, "attach failed");
        }
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
