//! Launch filtering and yearly aggregation.
//!
//! Everything here is pure and total: malformed timestamps resolve to
//! [`UNKNOWN_YEAR`] and empty input produces empty or zero results.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Launch, Outcome};

/// Year returned for missing or unparseable timestamps.
pub const UNKNOWN_YEAR: i32 = 0;

/// Which launches to keep based on their upcoming flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionType {
    /// Every launch.
    #[default]
    All,
    /// Launches that have not happened yet.
    Upcoming,
    /// Launches that already happened.
    Past,
}

impl MissionType {
    /// Heading used when listing launches of this type.
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::All => "All Launches",
            Self::Upcoming => "Upcoming Launches",
            Self::Past => "Past Launches",
        }
    }

    fn admits(self, launch: &Launch) -> bool {
        match self {
            Self::All => true,
            Self::Upcoming => launch.upcoming,
            Self::Past => !launch.upcoming,
        }
    }
}

impl std::fmt::Display for MissionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Upcoming => write!(f, "upcoming"),
            Self::Past => write!(f, "past"),
        }
    }
}

/// Active filter criteria. Criteria combine with logical AND.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Upcoming/past selection.
    pub mission_type: MissionType,
    /// Calendar year to keep, if any.
    pub year: Option<i32>,
}

impl FilterOptions {
    /// Filter options for a mission type with no year restriction.
    #[must_use]
    pub fn mission(mission_type: MissionType) -> Self {
        Self {
            mission_type,
            year: None,
        }
    }

    /// Check whether a launch satisfies every active criterion.
    #[must_use]
    pub fn matches(&self, launch: &Launch) -> bool {
        if !self.mission_type.admits(launch) {
            return false;
        }
        match self.year {
            Some(year) => {
                let resolved = resolve_year(launch.date_utc.as_deref());
                resolved != UNKNOWN_YEAR && resolved == year
            }
            None => true,
        }
    }
}

/// Launch counts for one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyStats {
    /// Calendar year.
    pub year: i32,
    /// Every launch in the year, undetermined ones included.
    pub total: usize,
    /// Launches that succeeded.
    pub successful: usize,
    /// Launches that failed.
    pub failed: usize,
}

impl YearlyStats {
    fn empty(year: i32) -> Self {
        Self {
            year,
            total: 0,
            successful: 0,
            failed: 0,
        }
    }
}

/// Parse a launch timestamp into UTC.
///
/// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS` datetimes and
/// bare `YYYY-MM-DD` dates; naive values are read as UTC.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(parsed.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Resolve the UTC calendar year of a timestamp, or [`UNKNOWN_YEAR`] when
/// it is missing or unparseable.
#[must_use]
pub fn resolve_year(timestamp: Option<&str>) -> i32 {
    timestamp
        .and_then(parse_timestamp)
        .map_or(UNKNOWN_YEAR, |parsed| parsed.year())
}

/// Keep the launches matching `options`, in input order.
#[must_use]
pub fn filter_by_criteria<'a>(launches: &'a [Launch], options: &FilterOptions) -> Vec<&'a Launch> {
    launches.iter().filter(|l| options.matches(l)).collect()
}

/// Distinct known launch years, ascending.
#[must_use]
pub fn distinct_years(launches: &[Launch]) -> Vec<i32> {
    launches
        .iter()
        .map(|l| resolve_year(l.date_utc.as_deref()))
        .filter(|&year| year != UNKNOWN_YEAR)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Percentage of launches that succeeded, rounded half-up. Zero for no
/// launches.
#[must_use]
pub fn success_rate<'a, I>(launches: I) -> u8
where
    I: IntoIterator<Item = &'a Launch>,
{
    let (total, succeeded) = launches.into_iter().fold((0usize, 0usize), |(t, s), l| {
        (t + 1, s + usize::from(l.outcome() == Outcome::Succeeded))
    });
    if total == 0 {
        return 0;
    }
    // round(100 * s / t) with halves rounded up, in integer arithmetic
    let rate = (200 * succeeded + total) / (2 * total);
    u8::try_from(rate).unwrap_or(100)
}

/// Per-year launch counts for every launch with a known year, ascending by
/// year.
#[must_use]
pub fn yearly_aggregate<'a, I>(launches: I) -> Vec<YearlyStats>
where
    I: IntoIterator<Item = &'a Launch>,
{
    let mut by_year: BTreeMap<i32, YearlyStats> = BTreeMap::new();
    for launch in launches {
        let year = resolve_year(launch.date_utc.as_deref());
        if year == UNKNOWN_YEAR {
            continue;
        }
        let entry = by_year
            .entry(year)
            .or_insert_with(|| YearlyStats::empty(year));
        entry.total += 1;
        match launch.outcome() {
            Outcome::Succeeded => entry.successful += 1,
            Outcome::Failed => entry.failed += 1,
            Outcome::Undetermined => {}
        }
    }
    by_year.into_values().collect()
}
