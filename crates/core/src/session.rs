// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session identity: composing host and label into a screen session name.
//!
//! Every session schh manages is named `schh_<host>_<label>`, where both
//! parts are canonical tokens. The listing parser recognises a host's
//! sessions by the same prefix, so [`build_session_id`] is the only way to
//! obtain a [`SessionId`].

use crate::token::canonicalize;
use thiserror::Error;

/// Namespace prefix shared by every schh session.
pub const SESSION_NAMESPACE: &str = "schh";

/// Identifiers at or above this length are rejected (screen caps names
/// shortly after).
pub const MAX_SESSION_ID_LEN: usize = 240;

/// Errors from building a session identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("invalid host or session name")]
    EmptyToken,
    #[error("session identifier too long ({0} characters)")]
    TooLong(usize),
}

/// A screen session name of the form `schh_<hostToken>_<labelToken>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SessionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SessionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// The prefix `schh_<hostToken>_` that every session of `host` starts with.
///
/// Returns `None` when the host name canonicalizes to an empty token.
pub fn host_prefix(host: &str) -> Option<String> {
    let token = canonicalize(host);
    if token.is_empty() {
        return None;
    }
    Some(format!("{}_{}_", SESSION_NAMESPACE, token))
}

/// Build the session identifier for `session_name` on `host`.
///
/// Both inputs are canonicalized independently. Fails when either token is
/// empty or the result would reach [`MAX_SESSION_ID_LEN`].
pub fn build_session_id(host: &str, session_name: &str) -> Result<SessionId, IdentityError> {
    let prefix = host_prefix(host).ok_or(IdentityError::EmptyToken)?;
    let label = canonicalize(session_name);
    if label.is_empty() {
        return Err(IdentityError::EmptyToken);
    }
    let id = format!("{}{}", prefix, label);
    if id.len() >= MAX_SESSION_ID_LEN {
        return Err(IdentityError::TooLong(id.len()));
    }
    Ok(SessionId(id))
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
