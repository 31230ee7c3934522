//! Overall launch statistics.
//!
//! Builds the summary figures and the cumulative yearly series shown by the
//! `stats` command on top of the aggregation functions in [`crate::filter`].

use serde::{Deserialize, Serialize};

use crate::filter::YearlyStats;
use crate::model::{Launch, Outcome};

/// Headline counts over a launch collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchSummary {
    /// Every launch.
    pub total: usize,
    /// Launches that succeeded.
    pub successful: usize,
    /// Launches that failed.
    pub failed: usize,
    /// Launches still to come.
    pub upcoming: usize,
    /// Share of completed (non-upcoming) launches that succeeded, in percent.
    pub completed_success_rate: f64,
}

impl LaunchSummary {
    /// Summarize a launch collection.
    #[must_use]
    pub fn from_launches<'a, I>(launches: I) -> Self
    where
        I: IntoIterator<Item = &'a Launch>,
    {
        let mut summary = Self {
            total: 0,
            successful: 0,
            failed: 0,
            upcoming: 0,
            completed_success_rate: 0.0,
        };
        for launch in launches {
            summary.total += 1;
            if launch.upcoming {
                summary.upcoming += 1;
            }
            match launch.outcome() {
                Outcome::Succeeded => summary.successful += 1,
                Outcome::Failed => summary.failed += 1,
                Outcome::Undetermined => {}
            }
        }
        summary.completed_success_rate = summary.rate_of_completed();
        summary
    }

    /// Number of launches that are no longer upcoming.
    #[must_use]
    pub fn completed(&self) -> usize {
        self.total - self.upcoming
    }

    #[allow(clippy::cast_precision_loss)]
    fn rate_of_completed(&self) -> f64 {
        let completed = self.completed();
        if completed == 0 {
            return 0.0;
        }
        self.successful as f64 / completed as f64 * 100.0
    }
}

/// Running launch total at the end of a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CumulativePoint {
    /// Calendar year.
    pub year: i32,
    /// Launches in this year.
    pub launches: usize,
    /// Launches in this and every earlier year.
    pub cumulative: usize,
}

/// Turn per-year counts into a running total. Input must already be sorted
/// by year, as [`crate::filter::yearly_aggregate`] returns it.
#[must_use]
pub fn cumulative_totals(yearly: &[YearlyStats]) -> Vec<CumulativePoint> {
    yearly
        .iter()
        .scan(0usize, |running, stats| {
            *running += stats.total;
            Some(CumulativePoint {
                year: stats.year,
                launches: stats.total,
                cumulative: *running,
            })
        })
        .collect()
}
