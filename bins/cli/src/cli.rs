//! Command line definitions for `ledgertime`.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `locate` | Fiscal year, quarter and month holding each date |
//! | `year` | Day ranges of a fiscal year and its quarters and months |
//! | `encode` | Canonical and sortable encodings of a unit-of-time |
//!
//! # Examples
//!
//! ```bash
//! ledgertime locate 2017-12-01 2018-06-30
//! ledgertime --config fy-june.toml year 2018 --json
//! ledgertime encode c-2017-Q4
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use ledgertime_core::CalendarDay;

/// Fiscal calendar arithmetic for accounting periods.
#[derive(Debug, Parser)]
#[command(name = "ledgertime", author, version, about)]
pub struct Cli {
    /// TOML file describing the accounting period system.
    ///
    /// Without it, `config/default.toml`, `config/$RUN_MODE.toml` and
    /// `LEDGERTIME__*` environment variables are consulted.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    /// Log period system construction and lookups to stderr.
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find the fiscal year, quarter and month holding each date.
    ///
    ///   ledgertime locate 2017-12-01 2018-06-30
    Locate(LocateArgs),

    /// List the first and last day of a fiscal year, its quarters and its months.
    ///
    ///   ledgertime year 2018
    Year(YearArgs),

    /// Show every encoding of a unit-of-time given in either text format.
    ///
    ///   ledgertime encode fiscal.quarter:2018-2
    Encode(EncodeArgs),
}

/// Arguments for the `locate` command.
#[derive(Debug, Args)]
pub struct LocateArgs {
    /// Calendar dates as `YYYY-MM-DD`.
    #[arg(required = true, num_args = 1..)]
    pub dates: Vec<CalendarDay>,
}

/// Arguments for the `year` command.
#[derive(Debug, Args)]
pub struct YearArgs {
    /// Fiscal year number.
    pub year: i32,
}

/// Arguments for the `encode` command.
#[derive(Debug, Args)]
pub struct EncodeArgs {
    /// Unit-of-time in canonical (`calendar.month:2017-11`) or sortable (`c-2017-11`) form.
    pub unit: String,
}
