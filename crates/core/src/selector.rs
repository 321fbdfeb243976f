// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive session picker.
//!
//! A small prompt loop over a line-oriented input stream. With existing
//! sessions the user gets a numbered menu; without any, the picker goes
//! straight to naming a new session. Bad input re-prompts; only a closed or
//! failing stream ends the loop with an error.

use crate::label::LabelGenerator;
use crate::listing::SessionInfo;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Outcome of one picker interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    Cancel,
    Attach { session_id: String, label: String },
    Create { label: String },
}

/// Errors that end the picker without a choice
#[derive(Debug, Error)]
pub enum SelectorError {
    #[error("input closed before a selection was made")]
    Closed,
    #[error("prompt I/O failed: {0}")]
    Io(#[from] io::Error),
}

enum State {
    Start,
    Menu,
    /// `back_to_menu` decides where a cancelled label prompt leads.
    Label {
        suggestion: Option<String>,
        back_to_menu: bool,
    },
    Done(Choice),
}

/// Let the user pick one of `sessions` on `host`, or name a new one.
///
/// `sessions` is a snapshot and is never refreshed during the interaction.
/// Labels typed for new sessions are returned verbatim (trimmed); callers
/// canonicalize them when building the session identifier.
pub fn choose_session<R: BufRead, W: Write>(
    host: &str,
    sessions: &[SessionInfo],
    labels: &LabelGenerator,
    input: R,
    output: W,
) -> Result<Choice, SelectorError> {
    Selector {
        host,
        sessions,
        labels,
        input,
        output,
    }
    .run()
}

struct Selector<'a, R, W> {
    host: &'a str,
    sessions: &'a [SessionInfo],
    labels: &'a LabelGenerator,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Selector<'_, R, W> {
    fn run(mut self) -> Result<Choice, SelectorError> {
        let mut state = State::Start;
        loop {
            state = match state {
                State::Start if self.sessions.is_empty() => State::Label {
                    suggestion: self.suggest(),
                    back_to_menu: false,
                },
                State::Start => State::Menu,
                State::Menu => self.menu()?,
                State::Label {
                    suggestion,
                    back_to_menu,
                } => match self.label_prompt(suggestion.as_deref())? {
                    Some(label) => State::Done(Choice::Create { label }),
                    None if back_to_menu => State::Menu,
                    None => State::Done(Choice::Cancel),
                },
                State::Done(choice) => return Ok(choice),
            };
        }
    }

    fn suggest(&self) -> Option<String> {
        Some(self.labels.generate()).filter(|s| !s.is_empty())
    }

    fn menu(&mut self) -> Result<State, SelectorError> {
        writeln!(self.output, "\nActive sessions for {}:", self.host)?;
        for (idx, info) in self.sessions.iter().enumerate() {
            writeln!(self.output, "  {}) {}", idx + 1, info.label)?;
        }
        let new_entry = self.sessions.len() + 1;
        writeln!(self.output, "  {}) Start a new session", new_entry)?;
        writeln!(
            self.output,
            "Type the number to select an option, or 'q' to cancel."
        )?;
        write!(self.output, "> ")?;

        let line = self.read_line()?;
        if line.is_empty() {
            return Ok(State::Menu);
        }
        if line.eq_ignore_ascii_case("q") {
            return Ok(State::Done(Choice::Cancel));
        }
        let Ok(number) = line.parse::<i64>() else {
            writeln!(self.output, "Please enter a valid number.")?;
            return Ok(State::Menu);
        };
        match usize::try_from(number) {
            Ok(n) if (1..new_entry).contains(&n) => {
                let selected = &self.sessions[n - 1];
                Ok(State::Done(Choice::Attach {
                    session_id: selected.id.clone(),
                    label: selected.label.clone(),
                }))
            }
            Ok(n) if n == new_entry => Ok(State::Label {
                suggestion: self.suggest(),
                back_to_menu: true,
            }),
            _ => {
                writeln!(self.output, "Selection out of range. Try again.")?;
                Ok(State::Menu)
            }
        }
    }

    /// Returns `None` when the user cancels.
    fn label_prompt(&mut self, suggestion: Option<&str>) -> Result<Option<String>, SelectorError> {
        writeln!(self.output, "\nStarting a new session for {}.", self.host)?;
        match suggestion {
            Some(suggestion) => {
                writeln!(self.output, "Suggested name: {}", suggestion)?;
                writeln!(
                    self.output,
                    "Press Enter to accept the suggestion, type a custom name, or 'q' to cancel."
                )?;
            }
            None => writeln!(self.output, "Type a session name, or 'q' to cancel.")?,
        }
        write!(self.output, "> ")?;

        let line = self.read_line()?;
        if line.is_empty() {
            return Ok(suggestion.map(str::to_string));
        }
        if line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Undecodable bytes are replaced, never fatal.
    fn read_line(&mut self) -> Result<String, SelectorError> {
        self.output.flush()?;
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(SelectorError::Closed);
        }
        Ok(String::from_utf8_lossy(&buf).trim().to_string())
    }
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
