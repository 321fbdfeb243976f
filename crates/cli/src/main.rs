// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! schh - named remote screen sessions over ssh

mod commands;
mod env;
mod exit_error;
mod output;

use output::OutputFormat;

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser, Subcommand};
use commands::connect::{self, Connect, Mode};
use commands::host;
use schh_adapters::{ScreenAdapter, TracedSession};
use schh_core::LabelGenerator;
use schh_storage::{HostStore, LabelStore, Settings};

#[derive(Parser)]
#[command(
    name = "schh",
    version,
    about = "Named remote screen sessions over ssh",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    /// List the host's active sessions
    #[arg(long, conflicts_with_all = ["last", "session"])]
    list: bool,

    /// Re-attach to the most recently used session
    #[arg(long, conflicts_with = "session")]
    last: bool,

    /// Registered host name
    host: Option<String>,

    /// Session to attach to, started when not running
    session: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    fn mode(&self) -> Mode {
        match (&self.session, self.list, self.last) {
            (_, true, _) => Mode::List,
            (_, _, true) => Mode::Last,
            (Some(session), _, _) => Mode::Named(session.clone()),
            (None, false, false) => Mode::Interactive,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Manage registered hosts
    Host(host::HostArgs),
}

fn main() {
    if let Err(e) = run() {
        let code = e
            .downcast_ref::<exit_error::ExitError>()
            .map_or(1, |c| c.code);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain. Otherwise we render the full chain so context
/// isn't lost.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

/// Log to stderr so prompts on stdout stay clean. Filter from SCHH_LOG, default `warn`.
fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = env::log_filter()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false),
        )
        .init();
}

fn cli_command() -> clap::Command {
    Cli::command()
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging();
    let mode = cli.mode();

    let dir = schh_storage::config_dir()
        .map_err(|e| anyhow!("Unable to open the config directory: {}", e))?;
    let hosts = HostStore::in_dir(&dir);
    let labels = LabelStore::in_dir(&dir);
    tracing::debug!(dir = %dir.display(), "config directory");

    if let Some(Commands::Host(args)) = cli.command {
        return host::handle(
            args.command,
            &hosts,
            &labels,
            cli.output,
            &mut std::io::stdout().lock(),
        );
    }

    let Some(host_name) = cli.host else {
        // Nothing to do: usage goes to stderr, nothing else is reported
        eprintln!("{}", cli_command().render_help());
        return Err(exit_error::ExitError::new(1, String::new()).into());
    };
    let host = connect::resolve_host(&hosts, &host_name)?;

    let settings = Settings::load(&dir);
    let adapter = TracedSession::new(ScreenAdapter::resolve(
        settings.multiplexer,
        settings.remote_login,
    ));
    let connect = Connect {
        adapter: &adapter,
        labels: &labels,
    };

    match mode {
        Mode::List => connect.list(&host, cli.output, &mut std::io::stdout().lock()),
        Mode::Last => connect.last(&host),
        Mode::Named(session) => connect.named(&host, &session),
        Mode::Interactive => connect.interactive(
            &host,
            &LabelGenerator::new(),
            std::io::stdin().lock(),
            std::io::stdout(),
        ),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
