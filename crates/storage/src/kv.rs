// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented `key value` files.
//!
//! Blank lines and `#` comments are ignored. Fields are whitespace
//! separated; anything after the second field is ignored.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Split a line into its key and optional value.
pub(crate) fn parse_line(line: &str) -> Option<(&str, Option<&str>)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let mut fields = line.split_whitespace();
    let key = fields.next()?;
    Some((key, fields.next()))
}

/// Read a file, treating a missing file as empty.
pub(crate) fn read_or_empty(path: &Path) -> io::Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(e),
    }
}

/// Replace `path` with the given entries atomically (write to .tmp, then rename).
pub(crate) fn write_atomic<'a>(
    path: &Path,
    entries: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    {
        let file = File::create(&tmp_path)?;
        let mut writer = BufWriter::new(file);
        for (key, value) in entries {
            writeln!(writer, "{} {}", key, value)?;
        }
        let file = writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;
    }
    fs::rename(&tmp_path, path)
}

#[cfg(test)]
#[path = "kv_tests.rs"]
mod tests;
