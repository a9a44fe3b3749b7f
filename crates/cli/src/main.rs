// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! synmig - upgrade a Syndesis integration store to the current schema

mod color;
mod commands;
mod config;
mod env;
mod logging;
mod output;
mod table;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use commands::{list, migrate, status};
use config::{Overrides, Settings};
use output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "synmig",
    version,
    about = "Upgrade a Syndesis integration store to the current schema"
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

    /// Store file (overrides SYNMIG_STORE and the config file)
    #[arg(long, value_name = "FILE", global = true)]
    store: Option<PathBuf>,

    /// Config file (overrides SYNMIG_CONFIG)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the store's schema version and pending migrations
    Status,
    /// List the built-in migrations
    List,
    /// Apply pending migrations
    Migrate(migrate::MigrateArgs),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", format_error(&e));
        std::process::exit(1);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, the
/// "Caused by" chain is skipped. Otherwise the full chain is rendered.
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

fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    // `list` never touches the store, so it needs no settings.
    if let Commands::List = command {
        return list::handle(format);
    }

    let settings = Settings::resolve(&Overrides {
        store: cli.store,
        config: cli.config,
    })?;
    let _guard = logging::setup(settings.log_file.as_deref())?;
    tracing::debug!(
        store = %settings.store.display(),
        strict = settings.strict,
        "resolved settings",
    );

    match command {
        Commands::Status => status::handle(&settings, format),
        Commands::Migrate(args) => migrate::handle(args, &settings, format),
        Commands::List => list::handle(format),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
