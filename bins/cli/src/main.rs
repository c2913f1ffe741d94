//! Ledgertime command line.
//!
//! Maps calendar dates onto the configured fiscal calendar and converts units-of-time
//! between their text encodings.

mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ledgertime_core::AccountingPeriodSystem;
use ledgertime_shared::AppConfig;

use crate::cli::{Cli, Command};

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "ledgertime=debug"
    } else {
        "ledgertime=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!(error = %format!("{error:#}"), "command failed");
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Command::Locate(args) => {
            let rows = commands::locate(&load_system(cli)?, &args.dates)?;
            emit(cli.json, &rows, || commands::render_located(&rows))
        }
        Command::Year(args) => {
            let rows = commands::year(&load_system(cli)?, args.year)
                .with_context(|| format!("fiscal year {}", args.year))?;
            emit(cli.json, &rows, || commands::render_periods(&rows))
        }
        Command::Encode(args) => {
            let encoded = commands::encode(&args.unit)?;
            emit(cli.json, &encoded, || commands::render_encoded(&encoded))
        }
    }
}

fn load_system(cli: &Cli) -> anyhow::Result<AccountingPeriodSystem> {
    let config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            AppConfig::from_toml_str(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => AppConfig::load().context("loading configuration")?,
    };
    let system = AccountingPeriodSystem::from(config.accounting_period_system);
    info!(%system, "accounting period system");
    Ok(system)
}

fn emit<T: Serialize + ?Sized>(
    json: bool,
    value: &T,
    text: impl FnOnce() -> String,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", text());
    }
    Ok(())
}
