//! Text and JSON renderers for the dashboard.
//!
//! Every renderer writes to any [`std::io::Write`], so the binary hands in
//! stdout and tests hand in a `Vec<u8>`. Sections whose data did not resolve
//! (a launch's rocket or launch site) are left out rather than reported.

use std::io::Write;

use serde::Serialize;

use crate::api::LaunchStats;
use crate::app::{LaunchDetails, LaunchList};
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::filter::{MissionType, YearlyStats};
use crate::format::{format_date, format_number, map_url, status_label, truncate_text};
use crate::model::Launch;
use crate::stats::{CumulativePoint, LaunchSummary};

/// Message printed when a filter leaves nothing to show.
pub const EMPTY_LIST_MESSAGE: &str = "No launches found matching your filters.";

/// A row of the launch list in JSON output.
#[derive(Debug, Serialize)]
struct ListEntry<'a> {
    #[serde(flatten)]
    launch: &'a Launch,
    rocket_name: Option<&'a str>,
    launchpad_name: Option<&'a str>,
}

impl<'a> From<&LaunchDetails<'a>> for ListEntry<'a> {
    fn from(details: &LaunchDetails<'a>) -> Self {
        Self {
            launch: details.launch,
            rocket_name: details.rocket.map(|r| r.name.as_str()),
            launchpad_name: details.launchpad.map(|p| p.display_name()),
        }
    }
}

/// Options for [`render_launch_list`].
#[derive(Debug, Clone, Copy)]
pub struct ListOptions {
    /// Which mission type the list was filtered to (for the heading).
    pub mission_type: MissionType,
    /// Output format.
    pub format: OutputFormat,
    /// Characters of launch details shown per card.
    pub preview_length: usize,
}

/// Render the filtered launch list.
///
/// The heading counts every launch passing the filter, even when `list`
/// holds only a page of them.
///
/// # Errors
///
/// Returns an error if writing or JSON serialization fails.
pub fn render_launch_list<W: Write>(
    out: &mut W,
    list: &LaunchList<'_>,
    options: ListOptions,
) -> Result<()> {
    let entries = &list.entries;
    if options.format == OutputFormat::Json {
        let rows: Vec<ListEntry<'_>> = entries.iter().map(ListEntry::from).collect();
        serde_json::to_writer_pretty(&mut *out, &rows)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(
        out,
        "{} ({} launches, {}% successful)",
        options.mission_type.heading(),
        list.total,
        list.success_rate
    )?;
    writeln!(out)?;

    if list.total == 0 {
        writeln!(out, "{EMPTY_LIST_MESSAGE}")?;
        return Ok(());
    }
    if entries.is_empty() {
        return Ok(());
    }

    match options.format {
        OutputFormat::Table => render_table(out, entries),
        _ => {
            for entry in entries {
                render_card(out, entry, options.preview_length)?;
            }
            Ok(())
        }
    }
}

fn render_card<W: Write>(out: &mut W, entry: &LaunchDetails<'_>, preview: usize) -> Result<()> {
    let launch = entry.launch;
    match status_label(launch) {
        Some(label) => writeln!(out, "{}  [{label}]", launch.name)?,
        None => writeln!(out, "{}", launch.name)?,
    }
    writeln!(out, "  Date:    {}", format_date(launch.date_utc.as_deref()))?;
    if let Some(rocket) = entry.rocket {
        writeln!(out, "  Rocket:  {}", rocket.name)?;
    }
    if let Some(pad) = entry.launchpad {
        writeln!(out, "  Site:    {}", pad.display_name())?;
    }
    if launch.details.is_some() {
        writeln!(out, "  {}", truncate_text(launch.details.as_deref(), preview))?;
    }
    writeln!(out, "  Id:      {}", launch.id)?;
    writeln!(out)?;
    Ok(())
}

fn render_table<W: Write>(out: &mut W, entries: &[LaunchDetails<'_>]) -> Result<()> {
    let rows: Vec<[String; 5]> = entries
        .iter()
        .map(|e| {
            [
                e.launch.name.clone(),
                format_date(e.launch.date_utc.as_deref()),
                status_label(e.launch).unwrap_or("-").to_string(),
                e.rocket.map_or_else(|| "-".to_string(), |r| r.name.clone()),
                e.launch.id.clone(),
            ]
        })
        .collect();

    let header = ["NAME", "DATE", "STATUS", "ROCKET", "ID"];
    let mut widths = header.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(out, &header.map(String::from), &widths)?;
    for row in &rows {
        write_row(out, row, &widths)?;
    }
    Ok(())
}

fn write_row<W: Write>(out: &mut W, cells: &[String; 5], widths: &[usize; 5]) -> Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "{}", line.trim_end())?;
    Ok(())
}

/// Render the detail view of one launch.
///
/// # Errors
///
/// Returns an error if writing or JSON serialization fails.
pub fn render_details<W: Write>(out: &mut W, details: &LaunchDetails<'_>, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, details)?;
        writeln!(out)?;
        return Ok(());
    }

    let launch = details.launch;
    writeln!(out, "{}", launch.name)?;
    writeln!(out, "{}", "=".repeat(launch.name.chars().count()))?;
    writeln!(out)?;

    writeln!(out, "Launch Information")?;
    writeln!(out, "  Date:            {}", format_date(launch.date_utc.as_deref()))?;
    writeln!(out, "  Date precision:  {}", launch.date_precision)?;
    if let Some(label) = status_label(launch) {
        writeln!(out, "  Status:          {label}")?;
    }
    if let Some(text) = &launch.details {
        writeln!(out, "  Details:         {text}")?;
    }
    writeln!(out)?;

    if let Some(rocket) = details.rocket {
        writeln!(out, "Rocket Information")?;
        writeln!(out, "  Name:            {}", rocket.name)?;
        writeln!(out, "  Type:            {}", rocket.kind)?;
        writeln!(
            out,
            "  Status:          {}",
            if rocket.active { "Active" } else { "Inactive" }
        )?;
        writeln!(out, "  Stages:          {}", rocket.stages)?;
        writeln!(out, "  Boosters:        {}", rocket.boosters)?;
        writeln!(out, "  Success Rate:    {:.1}%", rocket.success_rate_pct)?;
        writeln!(
            out,
            "  Height:          {}m / {}ft",
            rocket.height.meters, rocket.height.feet
        )?;
        writeln!(
            out,
            "  Diameter:        {}m / {}ft",
            rocket.diameter.meters, rocket.diameter.feet
        )?;
        writeln!(
            out,
            "  Mass:            {}kg / {}lbs",
            format_number(rocket.mass.kg),
            format_number(rocket.mass.lb)
        )?;
        writeln!(
            out,
            "  Cost per Launch: ${}",
            format_number(rocket.cost_per_launch)
        )?;
        writeln!(out, "  Description:     {}", rocket.description)?;
        writeln!(out)?;
    }

    if let Some(pad) = details.launchpad {
        writeln!(out, "Launch Site")?;
        writeln!(out, "  Name:            {}", pad.display_name())?;
        writeln!(out, "  Location:        {}, {}", pad.locality, pad.region)?;
        writeln!(
            out,
            "  Coordinates:     {:.4}, {:.4}",
            pad.latitude, pad.longitude
        )?;
        writeln!(out, "  Map:             {}", map_url(pad.latitude, pad.longitude))?;
        writeln!(out)?;
    }

    if launch.has_failures() {
        writeln!(out, "Failures")?;
        for failure in &launch.failures {
            writeln!(out, "  - Reason:   {}", failure.reason)?;
            writeln!(out, "    Time:     {}s", failure.time)?;
            if let Some(altitude) = failure.altitude {
                writeln!(out, "    Altitude: {altitude}m")?;
            }
        }
    }
    Ok(())
}

/// Everything the statistics view shows.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    /// Headline figures.
    pub summary: LaunchSummary,
    /// Launches per year.
    pub yearly: Vec<YearlyStats>,
    /// Running totals per year.
    pub cumulative: Vec<CumulativePoint>,
}

/// Render the statistics view.
///
/// # Errors
///
/// Returns an error if writing or JSON serialization fails.
pub fn render_stats<W: Write>(
    out: &mut W,
    report: &StatsReport,
    chart_width: usize,
    json: bool,
) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
        return Ok(());
    }

    let summary = &report.summary;
    writeln!(out, "Launch Statistics")?;
    writeln!(out)?;
    writeln!(out, "  Total Launches:  {}", summary.total)?;
    writeln!(out, "  Successful:      {}", summary.successful)?;
    writeln!(out, "  Failed:          {}", summary.failed)?;
    writeln!(out, "  Upcoming:        {}", summary.upcoming)?;
    writeln!(
        out,
        "  Success Rate:    {:.1}%",
        summary.completed_success_rate
    )?;
    writeln!(out)?;

    writeln!(out, "Launches by Year  (# successful, x failed)")?;
    let widest = report
        .yearly
        .iter()
        .map(|y| y.successful + y.failed)
        .max()
        .unwrap_or(0);
    for year in &report.yearly {
        let ok = scale(year.successful, widest, chart_width);
        let bad = scale(year.failed, widest, chart_width);
        writeln!(
            out,
            "  {} | {}{} {}/{}",
            year.year,
            "#".repeat(ok),
            "x".repeat(bad),
            year.successful,
            year.failed
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Cumulative Launches")?;
    for point in &report.cumulative {
        writeln!(
            out,
            "  {}  {:>5}  (+{})",
            point.year, point.cumulative, point.launches
        )?;
    }
    Ok(())
}

/// Bar length for `count` when `max` fills `width`; non-zero counts always
/// get at least one cell.
fn scale(count: usize, max: usize, width: usize) -> usize {
    if count == 0 || max == 0 {
        return 0;
    }
    (count * width / max).max(1)
}

/// Render the API's raw success-flag counts.
///
/// # Errors
///
/// Returns an error if writing or JSON serialization fails.
pub fn render_launch_stats<W: Write>(out: &mut W, stats: &LaunchStats, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, stats)?;
        writeln!(out)?;
        return Ok(());
    }
    writeln!(out, "Launches:    {}", stats.total_launches)?;
    writeln!(out, "Successful:  {}", stats.successful_launches)?;
    writeln!(out, "Failed:      {}", stats.failed_launches)?;
    Ok(())
}

/// Render the list of available years, one per line.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn render_years<W: Write>(out: &mut W, years: &[i32]) -> Result<()> {
    for year in years {
        writeln!(out, "{year}")?;
    }
    Ok(())
}
