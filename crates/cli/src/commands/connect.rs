// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `schh <host>` - Open, list and re-attach remote sessions

use std::io::{BufRead, Write};

use anyhow::{anyhow, bail, Result};
use serde::Serialize;

use schh_adapters::{list_sessions, SessionAdapter};
use schh_core::{
    build_session_id, canonicalize, choose_session, Choice, Host, LabelGenerator, SessionId,
    SessionInfo,
};
use schh_storage::{HostStore, LabelStore, StorageError};

use crate::output::{write_json, OutputFormat};

/// What to do once the host is known
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Print the host's sessions
    List,
    /// Re-attach to the most recently used session
    Last,
    /// Attach to (or start) the named session
    Named(String),
    /// Pick or create a session at a prompt
    Interactive,
}

/// Look up a registered host by name.
pub fn resolve_host(hosts: &HostStore, name: &str) -> Result<Host> {
    let host = hosts
        .find(name)
        .map_err(|e| anyhow!("Failed to load hosts: {}", e))?;
    host.ok_or_else(|| {
        anyhow!(
            "Host '{}' is not configured. Use 'schh host add {} [target]'.",
            name,
            name
        )
    })
}

#[derive(Serialize)]
struct SessionEntry<'a> {
    id: &'a str,
    label: &'a str,
    last_used: bool,
}

#[derive(Serialize)]
struct SessionListing<'a> {
    host: &'a str,
    sessions: Vec<SessionEntry<'a>>,
}

/// Session flows for one host.
pub struct Connect<'a, S> {
    pub adapter: &'a S,
    pub labels: &'a LabelStore,
}

impl<S: SessionAdapter> Connect<'_, S> {
    pub fn list(&self, host: &Host, format: OutputFormat, out: &mut impl Write) -> Result<()> {
        let sessions = self.sessions(host)?;
        let last = self.labels.get(&host.name).ok();
        let is_last = |s: &SessionInfo| last.as_deref() == Some(s.label.as_str());

        if format == OutputFormat::Json {
            let listing = SessionListing {
                host: &host.name,
                sessions: sessions
                    .iter()
                    .map(|s| SessionEntry {
                        id: &s.id,
                        label: &s.label,
                        last_used: is_last(s),
                    })
                    .collect(),
            };
            return write_json(out, &listing);
        }

        writeln!(out, "Active sessions for {}:", host.name)?;
        if sessions.is_empty() {
            writeln!(out, "  (none)")?;
            return Ok(());
        }
        for session in &sessions {
            let marker = if is_last(session) { "  (last used)" } else { "" };
            writeln!(out, "  - {}{}", session.label, marker)?;
        }
        Ok(())
    }

    pub fn last(&self, host: &Host) -> Result<()> {
        let label = match self.labels.get(&host.name) {
            Ok(label) => label,
            Err(StorageError::LabelNotFound(_)) => {
                bail!("No recent session stored for '{}'.", host.name)
            }
            Err(e) => bail!("Unable to load the recent session: {}", e),
        };
        let id = build_session_id(&host.name, &label)
            .map_err(|e| anyhow!("Stored session name is no longer valid: {}", e))?;
        let sessions = list_sessions(self.adapter, &host.name)
            .map_err(|e| anyhow!("Unable to list active sessions: {}", e))?;

        self.ensure_running(host, &id, &label, &sessions)?;
        self.remember(host, &label);
        self.attach(id.as_str())
    }

    pub fn named(&self, host: &Host, session: &str) -> Result<()> {
        let label = canonicalize(session);
        if label.is_empty() {
            bail!("Invalid session name.");
        }
        let id = build_session_id(&host.name, &label)
            .map_err(|e| anyhow!("Invalid session name: {}", e))?;
        let sessions = self.sessions(host)?;

        self.ensure_running(host, &id, &label, &sessions)?;
        self.remember(host, &label);
        self.attach(id.as_str())
    }

    pub fn interactive<R: BufRead, W: Write>(
        &self,
        host: &Host,
        generator: &LabelGenerator,
        input: R,
        output: W,
    ) -> Result<()> {
        let sessions = self.sessions(host)?;
        let choice = choose_session(&host.name, &sessions, generator, input, output)
            .map_err(|e| anyhow!("Unable to prompt for sessions: {}", e))?;

        match choice {
            Choice::Cancel => Ok(()),
            Choice::Attach { session_id, label } => {
                let canonical = canonicalize(&label);
                let label = if canonical.is_empty() { label } else { canonical };
                self.remember(host, &label);
                self.attach(&session_id)
            }
            Choice::Create { label } => {
                let label = canonicalize(&label);
                if label.is_empty() {
                    bail!("Invalid session name.");
                }
                let id = build_session_id(&host.name, &label)
                    .map_err(|e| anyhow!("Invalid session name: {}", e))?;
                self.start(host, &id, &label)?;
                self.remember(host, &label);
                self.attach(id.as_str())
            }
        }
    }

    fn sessions(&self, host: &Host) -> Result<Vec<SessionInfo>> {
        list_sessions(self.adapter, &host.name)
            .map_err(|e| anyhow!("Unable to read active sessions: {}", e))
    }

    fn ensure_running(
        &self,
        host: &Host,
        id: &SessionId,
        label: &str,
        sessions: &[SessionInfo],
    ) -> Result<()> {
        if sessions.iter().any(|s| id == s.name()) {
            tracing::debug!(id = %id, "session already running");
            return Ok(());
        }
        self.start(host, id, label)
    }

    fn start(&self, host: &Host, id: &SessionId, label: &str) -> Result<()> {
        self.adapter
            .start_detached(id, &host.target)
            .map_err(|e| anyhow!("Unable to start session '{}': {}", label, e))
    }

    /// Failing to record the label never fails the command.
    fn remember(&self, host: &Host, label: &str) {
        if let Err(e) = self.labels.set(&host.name, label) {
            tracing::warn!(host = %host.name, error = %e, "unable to store recent session");
            eprintln!("Warning: unable to update recent sessions: {}", e);
        }
    }

    fn attach(&self, id: &str) -> Result<()> {
        self.adapter
            .exec_attach(id)
            .map_err(|e| anyhow!("Unable to attach to session: {}", e))
    }
}

#[cfg(test)]
#[path = "connect_tests.rs"]
mod tests;
