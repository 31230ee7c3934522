//! `launchtrk` - CLI for launchtracker
//!
//! This binary loads the SpaceX launch collections once per invocation and
//! renders the requested view to stdout.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::Write;

use anyhow::{anyhow, bail, Context};
use clap::Parser;

use launchtracker::app::LOAD_FAILURE_MESSAGE;
use launchtracker::cli::{Cli, Command, ConfigCommand, ListCommand, ShowCommand, StatsCommand};
use launchtracker::stats::cumulative_totals;
use launchtracker::view::{self, ListOptions, StatsReport};
use launchtracker::{init_logging, Config, Dashboard, MissionType, SpaceXClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    match cli.command {
        Command::List(list_cmd) => handle_list(&config, &list_cmd).await,
        Command::Show(show_cmd) => handle_show(&config, &show_cmd).await,
        Command::Stats(stats_cmd) => handle_stats(&config, &stats_cmd).await,
        Command::Years(years_cmd) => {
            let client = SpaceXClient::new(&config)?;
            let dashboard = load_dashboard(&client, MissionType::All).await?;
            handle_years(&dashboard, years_cmd.json)
        }
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

async fn load_dashboard(
    client: &SpaceXClient,
    mission: MissionType,
) -> anyhow::Result<Dashboard> {
    let dashboard = Dashboard::load_mission(client, mission).await;
    match dashboard.error_message() {
        Some(message) => Err(anyhow!(message.to_string())),
        None => Ok(dashboard),
    }
}

async fn handle_list(config: &Config, cmd: &ListCommand) -> anyhow::Result<()> {
    let mission_type = cmd
        .mission
        .map_or(config.display.default_mission, Into::into);
    let client = SpaceXClient::new(config)?;
    let mut dashboard = load_dashboard(&client, mission_type).await?;
    dashboard.set_year(cmd.year);

    let list = dashboard.launch_list(cmd.limit);
    let options = ListOptions {
        mission_type,
        format: cmd.format,
        preview_length: config.display.details_preview_length,
    };
    let mut out = std::io::stdout().lock();
    view::render_launch_list(&mut out, &list, options)?;
    Ok(())
}

async fn handle_show(config: &Config, cmd: &ShowCommand) -> anyhow::Result<()> {
    let client = SpaceXClient::new(config)?;
    let dashboard = match Dashboard::load_launch(&client, &cmd.id).await {
        Ok(dashboard) => dashboard,
        Err(err) if err.is_not_found() => return Err(err.into()),
        Err(_) => bail!(LOAD_FAILURE_MESSAGE),
    };
    let details = dashboard
        .selected_details()
        .context("loaded launch is not selected")?;

    let mut out = std::io::stdout().lock();
    view::render_details(&mut out, &details, cmd.json)?;
    Ok(())
}

async fn handle_stats(config: &Config, cmd: &StatsCommand) -> anyhow::Result<()> {
    let client = SpaceXClient::new(config)?;
    if cmd.raw {
        let Ok(stats) = client.launch_stats().await else {
            bail!(LOAD_FAILURE_MESSAGE);
        };
        let mut out = std::io::stdout().lock();
        view::render_launch_stats(&mut out, &stats, cmd.json)?;
        return Ok(());
    }

    let dashboard = load_dashboard(&client, MissionType::All).await?;
    let yearly = dashboard.yearly_stats();
    let report = StatsReport {
        summary: dashboard.summary(),
        cumulative: cumulative_totals(&yearly),
        yearly,
    };

    let mut out = std::io::stdout().lock();
    view::render_stats(&mut out, &report, config.display.chart_width, cmd.json)?;
    Ok(())
}

fn handle_years(dashboard: &Dashboard, json: bool) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    if json {
        serde_json::to_writer(&mut out, dashboard.available_years())?;
        writeln!(out)?;
    } else {
        view::render_years(&mut out, dashboard.available_years())?;
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[API]");
                println!("  Base URL:           {}", config.api.base_url);
                println!("  Timeout (secs):     {}", config.api.timeout_secs);
                println!("  User agent:         {}", config.api.user_agent);
                println!();
                println!("[Display]");
                println!(
                    "  Details preview:    {}",
                    config.display.details_preview_length
                );
                println!("  Default mission:    {}", config.display.default_mission);
                println!("  Chart width:        {}", config.display.chart_width);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
