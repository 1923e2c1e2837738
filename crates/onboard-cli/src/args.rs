use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

/// Project onboarding wizard
///
/// Onboard walks a client through four short steps (basic info, design
/// preferences, project requirements and a final review) and delivers the
/// finished record to the agency. Without a subcommand it starts an
/// interactive session that reads commands from standard input.
#[derive(Parser)]
#[command(version, about, name = "onboard")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Deliver submissions as JSON files into this directory. Defaults to
    /// $XDG_DATA_HOME/onboard/outbox
    #[arg(long, global = true, conflicts_with = "simulate")]
    pub outbox_dir: Option<PathBuf>,

    /// Simulate delivery instead of writing to the outbox
    #[arg(long, global = true)]
    pub simulate: bool,

    /// Seconds to wait for a delivery before treating it as failed
    #[arg(long, global = true, default_value_t = 30)]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Onboard CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive onboarding session (default)
    #[command(alias = "s")]
    Start,
    /// Check every step of a record stored as JSON
    #[command(alias = "v")]
    Validate(RecordFileArgs),
    /// Validate and deliver a record stored as JSON
    Submit(RecordFileArgs),
    /// List the choices for a selection field, or all of them
    #[command(alias = "o")]
    Options(OptionsArgs),
}

/// A record file on disk
#[derive(ClapArgs)]
pub struct RecordFileArgs {
    /// Path to the JSON record (camelCase keys)
    #[arg(short, long)]
    pub file: PathBuf,
}

#[derive(ClapArgs)]
pub struct OptionsArgs {
    /// Field whose choices to list, e.g. `budget` or `business_type`
    pub list: Option<String>,
}
