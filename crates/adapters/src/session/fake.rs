// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake session adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{SessionAdapter, SessionError};
use parking_lot::Mutex;
use schh_core::SessionId;
use std::sync::Arc;

/// Recorded session call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCall {
    ListRaw,
    StartDetached { id: String, target: String },
    ExecAttach { id: String },
}

struct FakeSessionState {
    /// Session names in listing order, with their pids
    sessions: Vec<(u32, String)>,
    calls: Vec<SessionCall>,
    next_pid: u32,
    list_error: Option<String>,
    start_error: Option<String>,
    attach_error: Option<String>,
}

/// Fake session adapter for testing.
///
/// Serves a screen-style listing built from its known sessions, records
/// every call, and registers sessions it is asked to start.
#[derive(Clone)]
pub struct FakeSessionAdapter {
    inner: Arc<Mutex<FakeSessionState>>,
}

impl Default for FakeSessionAdapter {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeSessionState {
                sessions: Vec::new(),
                calls: Vec::new(),
                next_pid: 1000,
                list_error: None,
                start_error: None,
                attach_error: None,
            })),
        }
    }
}

impl FakeSessionAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<SessionCall> {
        self.inner.lock().calls.clone()
    }

    /// Add a pre-existing session by name
    pub fn add_session(&self, pid: u32, name: &str) {
        self.inner.lock().sessions.push((pid, name.to_string()));
    }

    /// Names of all known sessions
    pub fn session_names(&self) -> Vec<String> {
        self.inner
            .lock()
            .sessions
            .iter()
            .map(|(_, name)| name.clone())
            .collect()
    }

    /// Make `list_raw` fail with the given message
    pub fn set_list_error(&self, message: &str) {
        self.inner.lock().list_error = Some(message.to_string());
    }

    /// Make `start_detached` fail with the given message
    pub fn set_start_error(&self, message: &str) {
        self.inner.lock().start_error = Some(message.to_string());
    }

    /// Make `exec_attach` fail with the given message
    pub fn set_attach_error(&self, message: &str) {
        self.inner.lock().attach_error = Some(message.to_string());
    }
}

impl SessionAdapter for FakeSessionAdapter {
    fn list_raw(&self) -> Result<String, SessionError> {
        let mut inner = self.inner.lock();
        inner.calls.push(SessionCall::ListRaw);

        if let Some(ref message) = inner.list_error {
            return Err(SessionError::CommandFailed(message.clone()));
        }
        if inner.sessions.is_empty() {
            return Ok("No Sockets found in /run/screen/S-fake.\n".to_string());
        }

        let mut listing = String::from("There are screens on:\n");
        for (pid, name) in &inner.sessions {
            listing.push_str(&format!("\t{}.{}\t(Detached)\n", pid, name));
        }
        listing.push_str(&format!(
            "{} Sockets in /run/screen/S-fake.\n",
            inner.sessions.len()
        ));
        Ok(listing)
    }

    fn start_detached(&self, id: &SessionId, target: &str) -> Result<(), SessionError> {
        let mut inner = self.inner.lock();
        inner.calls.push(SessionCall::StartDetached {
            id: id.to_string(),
            target: target.to_string(),
        });

        if let Some(ref message) = inner.start_error {
            return Err(SessionError::SpawnFailed(message.clone()));
        }

        inner.next_pid += 1;
        let pid = inner.next_pid;
        inner.sessions.push((pid, id.to_string()));
        Ok(())
    }

    fn exec_attach(&self, id: &str) -> Result<(), SessionError> {
        let mut inner = self.inner.lock();
        inner
            .calls
            .push(SessionCall::ExecAttach { id: id.to_string() });

        match inner.attach_error {
            Some(ref message) => Err(SessionError::CommandFailed(message.clone())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
