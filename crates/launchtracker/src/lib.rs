//! `launchtracker` - SpaceX launch data in the terminal
//!
//! This library fetches launch, rocket, and launch site records from the
//! public SpaceX REST API and derives filtered lists, per-launch details, and
//! aggregate statistics from them.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod logging;
pub mod model;
pub mod stats;
pub mod view;

pub use api::{LaunchSource, SpaceXClient};
pub use app::{Dashboard, LaunchDetails, LaunchList, LoadStatus};
pub use config::Config;
pub use error::{Error, Result};
pub use filter::{FilterOptions, MissionType, YearlyStats};
pub use logging::init_logging;
pub use model::{Failure, Launch, Launchpad, Outcome, Rocket};
pub use stats::LaunchSummary;
