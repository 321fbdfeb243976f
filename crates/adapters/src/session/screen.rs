// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! GNU screen session adapter

use super::{SessionAdapter, SessionError};
use crate::subprocess::{combined_text, run_output};
use schh_core::SessionId;
use std::os::unix::process::CommandExt;
use std::process::Command;

pub const DEFAULT_SCREEN: &str = "screen";
pub const DEFAULT_SSH: &str = "ssh";

/// Screen-based session adapter running ssh inside each session
#[derive(Clone, Debug)]
pub struct ScreenAdapter {
    screen: String,
    ssh: String,
}

impl ScreenAdapter {
    pub fn new(screen: impl Into<String>, ssh: impl Into<String>) -> Self {
        Self {
            screen: screen.into(),
            ssh: ssh.into(),
        }
    }

    /// Resolve programs: `SCHH_SCREEN`/`SCHH_SSH` > configured > defaults.
    pub fn resolve(screen: Option<String>, ssh: Option<String>) -> Self {
        Self::new(
            crate::env::screen_program()
                .or(screen)
                .unwrap_or_else(|| DEFAULT_SCREEN.to_string()),
            crate::env::ssh_program()
                .or(ssh)
                .unwrap_or_else(|| DEFAULT_SSH.to_string()),
        )
    }

    pub fn screen_program(&self) -> &str {
        &self.screen
    }

    pub fn ssh_program(&self) -> &str {
        &self.ssh
    }
}

impl Default for ScreenAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_SCREEN, DEFAULT_SSH)
    }
}

impl SessionAdapter for ScreenAdapter {
    fn list_raw(&self) -> Result<String, SessionError> {
        let mut cmd = Command::new(&self.screen);
        cmd.arg("-ls");
        let output = run_output(cmd, "screen -ls").map_err(SessionError::CommandFailed)?;
        let text = combined_text(&output);

        // screen exits 1 with "No Sockets found" when there are no sessions
        if !output.status.success() && text.is_empty() {
            return Err(SessionError::CommandFailed(format!(
                "screen -ls exited with {} and no output",
                output.status
            )));
        }
        Ok(text)
    }

    fn start_detached(&self, id: &SessionId, target: &str) -> Result<(), SessionError> {
        if target.is_empty() {
            return Err(SessionError::SpawnFailed(format!(
                "missing ssh target for session {}",
                id
            )));
        }

        let mut cmd = Command::new(&self.screen);
        cmd.arg("-dmS").arg(id.as_str()).arg(&self.ssh).arg(target);

        let output = run_output(cmd, "screen -dmS").map_err(SessionError::SpawnFailed)?;
        if !output.status.success() {
            let stderr = combined_text(&output);
            tracing::error!(
                session_id = id.as_str(),
                status = %output.status,
                stderr = %stderr.trim(),
                "screen spawn failed"
            );
            return Err(SessionError::SpawnFailed(format!(
                "screen exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        Ok(())
    }

    fn exec_attach(&self, id: &str) -> Result<(), SessionError> {
        if id.is_empty() {
            return Err(SessionError::CommandFailed(
                "missing session identifier".to_string(),
            ));
        }
        // Only returns if the exec itself failed
        let err = Command::new(&self.screen).arg("-r").arg(id).exec();
        Err(SessionError::CommandFailed(format!(
            "screen -r {} failed: {}",
            id, err
        )))
    }
}

#[cfg(test)]
#[path = "screen_tests.rs"]
mod tests;
