//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::filter::MissionType;

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Which launches to show (defaults to `display.default_mission`)
    #[arg(short, long, value_enum)]
    pub mission: Option<MissionTypeArg>,

    /// Only show launches from this year
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Maximum number of launches to print
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Show command arguments.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Identifier of the launch to show
    pub id: String,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Stats command arguments.
#[derive(Debug, Args)]
pub struct StatsCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Count the API's success flags as reported, without the summary
    #[arg(short, long)]
    pub raw: bool,
}

/// Years command arguments.
#[derive(Debug, Args)]
pub struct YearsCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Mission type argument for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MissionTypeArg {
    /// Every launch
    All,
    /// Launches still to come
    Upcoming,
    /// Launches that already happened
    Past,
}

impl From<MissionTypeArg> for MissionType {
    fn from(arg: MissionTypeArg) -> Self {
        match arg {
            MissionTypeArg::All => Self::All,
            MissionTypeArg::Upcoming => Self::Upcoming,
            MissionTypeArg::Past => Self::Past,
        }
    }
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text cards
    #[default]
    Plain,
    /// Formatted table
    Table,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mission_type_arg_conversion() {
        assert_eq!(MissionType::from(MissionTypeArg::All), MissionType::All);
        assert_eq!(
            MissionType::from(MissionTypeArg::Upcoming),
            MissionType::Upcoming
        );
        assert_eq!(MissionType::from(MissionTypeArg::Past), MissionType::Past);
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Plain);
    }

    #[test]
    fn test_list_command_debug() {
        let cmd = ListCommand {
            mission: Some(MissionTypeArg::Past),
            year: Some(2020),
            limit: None,
            format: OutputFormat::Table,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Past"));
        assert!(debug_str.contains("2020"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        assert!(format!("{cmd:?}").contains("Show"));
    }
}
