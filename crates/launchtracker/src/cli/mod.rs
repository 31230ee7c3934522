//! Command-line interface for launchtracker.
//!
//! This module provides the CLI structure for the `launchtrk` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ConfigCommand, ListCommand, MissionTypeArg, OutputFormat, ShowCommand, StatsCommand,
    YearsCommand,
};

/// launchtrk - SpaceX launches in your terminal
///
/// Fetches launch, rocket, and launch site records from the public SpaceX
/// API and shows filterable lists, launch details, and statistics.
#[derive(Debug, Parser)]
#[command(name = "launchtrk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List launches, optionally filtered
    List(ListCommand),

    /// Show full details of one launch
    Show(ShowCommand),

    /// Show launch statistics
    Stats(StatsCommand),

    /// List the years that have launches
    Years(YearsCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        crate::logging::Verbosity::from_flags(self.verbose, self.quiet)
    }
}
