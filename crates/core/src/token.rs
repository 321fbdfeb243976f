// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical tokens for session identifiers.

/// Maximum number of characters a canonical token may hold.
pub const MAX_TOKEN_LEN: usize = 120;

/// Map arbitrary text to a token that is safe inside a screen session name.
///
/// Lowercase letters, digits, `-` and `_` are kept, uppercase letters are
/// lowercased and `.` becomes `-`. Everything else (whitespace, punctuation,
/// non-ASCII) is dropped. The result holds at most [`MAX_TOKEN_LEN`]
/// characters and may be empty.
pub fn canonicalize(input: &str) -> String {
    input
        .chars()
        .filter_map(|c| match c {
            'a'..='z' | '0'..='9' | '-' | '_' => Some(c),
            'A'..='Z' => Some(c.to_ascii_lowercase()),
            '.' => Some('-'),
            _ => None,
        })
        .take(MAX_TOKEN_LEN)
        .collect()
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
