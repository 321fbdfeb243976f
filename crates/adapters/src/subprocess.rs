// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess execution helpers

use std::process::{Command, Output, Stdio};

/// Run a command to completion and collect its output.
///
/// Stdin is closed so the child can never block on the user's terminal.
/// A non-zero exit is not an error here; only failing to run the program
/// is, reported as `"<description> failed: <io error>"`.
pub fn run_output(mut cmd: Command, description: &str) -> Result<Output, String> {
    cmd.stdin(Stdio::null())
        .output()
        .map_err(|io_err| format!("{} failed: {}", description, io_err))
}

/// Combined stdout and stderr of a finished command, lossily decoded.
///
/// stderr always starts on a new line.
pub fn combined_text(output: &Output) -> String {
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    text
}

#[cfg(test)]
#[path = "subprocess_tests.rs"]
mod tests;
