//! Domain records for launchtracker.
//!
//! These are passive snapshots of the records served by the launch data API.
//! Nullable API fields are `Option`s; everything else is required, so a
//! response with a missing or mistyped field fails to decode as a whole.

use serde::{Deserialize, Serialize};

/// Granularity of a launch's scheduled date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatePrecision {
    /// Scheduled to within half a year.
    Half,
    /// Scheduled to within a quarter.
    Quarter,
    /// Scheduled to within a year.
    Year,
    /// Scheduled to within a month.
    Month,
    /// Scheduled to a specific day.
    Day,
    /// Scheduled to a specific hour.
    Hour,
}

impl std::fmt::Display for DatePrecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Half => write!(f, "half"),
            Self::Quarter => write!(f, "quarter"),
            Self::Year => write!(f, "year"),
            Self::Month => write!(f, "month"),
            Self::Day => write!(f, "day"),
            Self::Hour => write!(f, "hour"),
        }
    }
}

/// Result of a launch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The launch happened and succeeded.
    Succeeded,
    /// The launch happened and failed.
    Failed,
    /// The launch is upcoming or its result was never reported.
    Undetermined,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Succeeded => write!(f, "succeeded"),
            Self::Failed => write!(f, "failed"),
            Self::Undetermined => write!(f, "undetermined"),
        }
    }
}

/// A failure reported for a launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Failure {
    /// Seconds after liftoff.
    pub time: i64,
    /// Altitude in metres, when known.
    pub altitude: Option<f64>,
    /// What went wrong.
    pub reason: String,
}

/// A single launch record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Launch {
    /// Opaque identifier.
    pub id: String,
    /// Mission name.
    pub name: String,
    /// Scheduled or actual launch time (RFC 3339, UTC).
    pub date_utc: Option<String>,
    /// How precise `date_utc` is.
    pub date_precision: DatePrecision,
    /// Identifier of the rocket flown.
    pub rocket: String,
    /// Identifier of the launch site.
    pub launchpad: String,
    /// Raw success flag as reported by the API.
    pub success: Option<bool>,
    /// Whether the launch has yet to happen.
    pub upcoming: bool,
    /// Free-text mission details.
    pub details: Option<String>,
    /// Reported failures, in order.
    #[serde(default)]
    pub failures: Vec<Failure>,
}

impl Launch {
    /// The tri-state outcome of this launch.
    ///
    /// An upcoming launch is always undetermined, whatever the raw success
    /// flag says.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.upcoming {
            return Outcome::Undetermined;
        }
        match self.success {
            Some(true) => Outcome::Succeeded,
            Some(false) => Outcome::Failed,
            None => Outcome::Undetermined,
        }
    }

    /// Check if the launch has any reported failures.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// A measurement in metres and feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Length {
    /// Metres.
    pub meters: f64,
    /// Feet.
    pub feet: f64,
}

/// A mass in kilograms and pounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mass {
    /// Kilograms.
    pub kg: u64,
    /// Pounds.
    pub lb: u64,
}

/// A rocket record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rocket {
    /// Opaque identifier.
    pub id: String,
    /// Rocket name.
    pub name: String,
    /// Vehicle type, e.g. "rocket".
    #[serde(rename = "type")]
    pub kind: String,
    /// Whether the rocket is still flying.
    pub active: bool,
    /// Number of stages.
    pub stages: u32,
    /// Number of side boosters.
    pub boosters: u32,
    /// Cost per launch in US dollars.
    pub cost_per_launch: u64,
    /// Historical success rate in percent.
    pub success_rate_pct: f64,
    /// Date of the first flight.
    pub first_flight: String,
    /// Country of origin.
    pub country: String,
    /// Manufacturer.
    pub company: String,
    /// Overall height.
    pub height: Length,
    /// Body diameter.
    pub diameter: Length,
    /// Lift-off mass.
    pub mass: Mass,
    /// Free-text description.
    pub description: String,
}

/// A launch site record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Launchpad {
    /// Opaque identifier.
    pub id: String,
    /// Short name, e.g. "KSC LC 39A".
    pub name: String,
    /// Full name.
    pub full_name: String,
    /// Nearest locality.
    pub locality: String,
    /// State or region.
    pub region: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Launchpad {
    /// The name to show for this site: the full name, falling back to the
    /// short one when the full name is blank.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.name
        } else {
            &self.full_name
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Builders shared by the crate's unit tests.

    use super::{DatePrecision, Launch, Launchpad, Length, Mass, Rocket};

    pub fn launch(id: &str, date: Option<&str>, success: Option<bool>, upcoming: bool) -> Launch {
        Launch {
            id: id.to_string(),
            name: format!("Mission {id}"),
            date_utc: date.map(String::from),
            date_precision: DatePrecision::Hour,
            rocket: "falcon9".to_string(),
            launchpad: "lc39a".to_string(),
            success,
            upcoming,
            details: None,
            failures: Vec::new(),
        }
    }

    pub fn rocket(id: &str, name: &str) -> Rocket {
        Rocket {
            id: id.to_string(),
            name: name.to_string(),
            kind: "rocket".to_string(),
            active: true,
            stages: 2,
            boosters: 0,
            cost_per_launch: 50_000_000,
            success_rate_pct: 98.0,
            first_flight: "2010-06-04".to_string(),
            country: "United States".to_string(),
            company: "SpaceX".to_string(),
            height: Length {
                meters: 70.0,
                feet: 229.6,
            },
            diameter: Length {
                meters: 3.7,
                feet: 12.0,
            },
            mass: Mass {
                kg: 549_054,
                lb: 1_207_920,
            },
            description: "Two-stage orbital launch vehicle.".to_string(),
        }
    }

    pub fn launchpad(id: &str, full_name: &str) -> Launchpad {
        Launchpad {
            id: id.to_string(),
            name: "KSC LC 39A".to_string(),
            full_name: full_name.to_string(),
            locality: "Cape Canaveral".to_string(),
            region: "Florida".to_string(),
            latitude: 28.608_058_5,
            longitude: -80.603_955_8,
        }
    }
}
