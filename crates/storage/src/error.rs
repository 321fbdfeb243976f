// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Errors from the host and label stores
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("host already exists: {0}")]
    HostExists(String),
    #[error("host not found: {0}")]
    HostNotFound(String),
    #[error("no saved session label for {0}")]
    LabelNotFound(String),
    #[error("could not determine a config directory")]
    NoConfigDir,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
