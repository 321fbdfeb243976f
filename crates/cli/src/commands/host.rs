// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `schh host` - Host registry commands

use std::io::Write;

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use schh_storage::{HostStore, LabelStore, StorageError};

use crate::output::{write_json, OutputFormat};

#[derive(Args)]
pub struct HostArgs {
    #[command(subcommand)]
    pub command: HostCommand,
}

#[derive(Subcommand)]
pub enum HostCommand {
    /// Register a host
    Add {
        /// Name used on the command line
        name: String,
        /// ssh destination (defaults to the name)
        target: Option<String>,
    },
    /// Forget a host and its recent session
    Remove {
        /// Host name
        name: String,
    },
    /// List registered hosts
    List,
}

pub fn handle(
    command: HostCommand,
    hosts: &HostStore,
    labels: &LabelStore,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        HostCommand::Add { name, target } => {
            let target = target.unwrap_or_else(|| name.clone());
            add(hosts, &name, &target, out)
        }
        HostCommand::Remove { name } => remove(hosts, labels, &name, out),
        HostCommand::List => list(hosts, format, out),
    }
}

fn add(hosts: &HostStore, name: &str, target: &str, out: &mut impl Write) -> Result<()> {
    if contains_whitespace(name) || contains_whitespace(target) {
        bail!("Host names and targets cannot contain spaces.");
    }
    match hosts.add(name, target) {
        Ok(()) => {}
        Err(StorageError::HostExists(_)) => bail!("Host '{}' already exists.", name),
        Err(e) => bail!("Unable to save host '{}': {}", name, e),
    }
    writeln!(out, "Host '{}' saved as '{}'.", target, name)?;
    Ok(())
}

fn remove(hosts: &HostStore, labels: &LabelStore, name: &str, out: &mut impl Write) -> Result<()> {
    match hosts.remove(name) {
        Ok(()) => {}
        Err(StorageError::HostNotFound(_)) => bail!("Host '{}' was not found.", name),
        Err(e) => bail!("Unable to remove host '{}': {}", name, e),
    }
    match labels.clear(name) {
        Ok(true) => writeln!(out, "Host '{}' removed and recent sessions cleared.", name)?,
        Ok(false) => writeln!(out, "Host '{}' removed.", name)?,
        Err(e) => {
            tracing::warn!(host = name, error = %e, "unable to clear recent session");
            writeln!(out, "Host '{}' removed (unable to clear recent sessions).", name)?
        }
    }
    Ok(())
}

fn list(hosts: &HostStore, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    let hosts = hosts
        .load()
        .map_err(|e| anyhow::anyhow!("Unable to load configured hosts: {}", e))?;

    match format {
        OutputFormat::Json => write_json(out, &hosts)?,
        OutputFormat::Text => {
            if hosts.is_empty() {
                writeln!(out, "No hosts configured. Use 'schh host add <name> [target]'.")?;
                return Ok(());
            }
            writeln!(out, "Configured hosts:")?;
            for host in &hosts {
                writeln!(out, "  - {}", host)?;
            }
        }
    }
    Ok(())
}

fn contains_whitespace(text: &str) -> bool {
    text.contains(&[' ', '\t'][..])
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
