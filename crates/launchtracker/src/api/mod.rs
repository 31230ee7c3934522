//! Access to the launch data API.
//!
//! [`LaunchSource`] is the seam the dashboard loads through; [`SpaceXClient`]
//! implements it over HTTP. Tests substitute in-memory sources.

mod client;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::filter::MissionType;
use crate::model::{Launch, Launchpad, Rocket};

pub use client::SpaceXClient;

/// Collection endpoints.
pub mod endpoints {
    /// All launches.
    pub const LAUNCHES: &str = "/launches";
    /// Launches still to come.
    pub const UPCOMING_LAUNCHES: &str = "/launches/upcoming";
    /// Launches that already happened.
    pub const PAST_LAUNCHES: &str = "/launches/past";
    /// All rockets.
    pub const ROCKETS: &str = "/rockets";
    /// All launch sites.
    pub const LAUNCHPADS: &str = "/launchpads";
}

/// Something that can supply launch, rocket, and launch site records.
///
/// Failures are returned as-is; implementations do not retry. Single-record
/// lookups report an unknown id as an error for which
/// [`Error::is_not_found`](crate::Error::is_not_found) holds.
#[async_trait]
pub trait LaunchSource: Send + Sync {
    /// Fetch every launch.
    async fn launches(&self) -> Result<Vec<Launch>>;

    /// Fetch the launches of one mission type.
    ///
    /// Sources without a narrower query return every launch; callers filter
    /// the result either way.
    async fn mission_launches(&self, _mission: MissionType) -> Result<Vec<Launch>> {
        self.launches().await
    }

    /// Fetch every rocket.
    async fn rockets(&self) -> Result<Vec<Rocket>>;

    /// Fetch every launch site.
    async fn launchpads(&self) -> Result<Vec<Launchpad>>;

    /// Fetch one launch by id.
    async fn launch(&self, id: &str) -> Result<Launch>;

    /// Fetch one rocket by id.
    async fn rocket(&self, id: &str) -> Result<Rocket>;

    /// Fetch one launch site by id.
    async fn launchpad(&self, id: &str) -> Result<Launchpad>;
}

/// Raw success/failure counts as reported by the API's success flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchStats {
    /// Every launch.
    pub total_launches: usize,
    /// Launches flagged as successful.
    pub successful_launches: usize,
    /// Launches flagged as failed.
    pub failed_launches: usize,
}

impl LaunchStats {
    /// Count raw success flags over a launch collection.
    #[must_use]
    pub fn from_launches(launches: &[Launch]) -> Self {
        Self {
            total_launches: launches.len(),
            successful_launches: launches.iter().filter(|l| l.success == Some(true)).count(),
            failed_launches: launches.iter().filter(|l| l.success == Some(false)).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::launch;

    #[test]
    fn test_launch_stats_counts_raw_flags() {
        let launches = vec![
            launch("a", None, Some(true), false),
            launch("b", None, Some(false), false),
            launch("c", None, None, true),
            // raw flag counts even for an upcoming launch
            launch("d", None, Some(true), true),
        ];
        let stats = LaunchStats::from_launches(&launches);
        assert_eq!(stats.total_launches, 4);
        assert_eq!(stats.successful_launches, 2);
        assert_eq!(stats.failed_launches, 1);
    }

    #[test]
    fn test_launch_stats_empty() {
        let stats = LaunchStats::from_launches(&[]);
        assert_eq!(
            stats,
            LaunchStats {
                total_launches: 0,
                successful_launches: 0,
                failed_launches: 0
            }
        );
    }
}
