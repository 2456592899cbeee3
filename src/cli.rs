use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Zurvan FILETIME and multi-calendar date converter.
#[derive(Parser)]
#[command(
    name = "zurvan",
    version,
    about = "FILETIME tick and multi-calendar date conversion"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Pick formatted date/time fields from a tick timestamp.
    Pick(PickArgs),
    /// Convert a calendar date between calendars.
    Convert(ConvertArgs),
    /// Convert a calendar date to a tick timestamp.
    ToFiletime(ToFiletimeArgs),
}

/// Arguments for the `pick` subcommand.
#[derive(clap::Args)]
pub struct PickArgs {
    /// Tick timestamp (100 ns units since 1601-01-01 UTC).
    #[arg(allow_hyphen_values = true)]
    pub filetime: i64,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override timezone offset in ticks from config.
    #[arg(short, long, allow_hyphen_values = true)]
    pub timezone: Option<i64>,

    /// Override daylight window ("fromMonth,fromDay,toMonth,toDay") from config.
    #[arg(short, long)]
    pub daylight: Option<String>,

    /// Override calendar (gregorian|persian|islamic) from config.
    #[arg(long)]
    pub calendar: Option<String>,

    /// Render digits in the configured display language.
    #[arg(long)]
    pub localized: bool,
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Year in the source calendar.
    #[arg(allow_hyphen_values = true)]
    pub year: i32,

    /// Month in the source calendar.
    pub month: u8,

    /// Day in the source calendar.
    pub day: u8,

    /// Source calendar name.
    #[arg(long, default_value = "gregorian")]
    pub from: String,

    /// Target calendar name.
    #[arg(long, default_value = "persian")]
    pub to: String,
}

/// Arguments for the `to-filetime` subcommand.
#[derive(clap::Args)]
pub struct ToFiletimeArgs {
    /// Year in the given calendar.
    #[arg(allow_hyphen_values = true)]
    pub year: i32,

    /// Month in the given calendar.
    pub month: u8,

    /// Day in the given calendar.
    pub day: u8,

    /// Calendar of the input date.
    #[arg(long, default_value = "gregorian")]
    pub calendar: String,
}
