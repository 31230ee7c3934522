//! Dashboard state and the initial data load.
//!
//! [`Dashboard`] owns the canonical launch, rocket, and launchpad
//! collections for one session together with the user's filter and
//! selection state. Derived views are recomputed from the canonical
//! collections on every call; nothing derived is stored except the list of
//! available years, which is computed once at load.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{error, info};

use crate::api::LaunchSource;
use crate::error::{Error, Result};
use crate::filter::{self, FilterOptions, MissionType, YearlyStats};
use crate::model::{Launch, Launchpad, Rocket};
use crate::stats::LaunchSummary;

/// Message shown when the initial load fails, whatever the cause.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load SpaceX data. Please try again later.";

/// Where the dashboard is in its load lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Fetches have not completed yet.
    #[default]
    Loading,
    /// All collections are loaded.
    Ready,
    /// At least one fetch failed; holds the user-facing message.
    Failed(String),
}

/// A launch together with whatever rocket and launchpad records resolved.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LaunchDetails<'a> {
    /// The launch itself.
    pub launch: &'a Launch,
    /// Its rocket, if the id resolved.
    pub rocket: Option<&'a Rocket>,
    /// Its launch site, if the id resolved.
    pub launchpad: Option<&'a Launchpad>,
}

/// The filtered launch list, possibly cut to a page.
#[derive(Debug, Clone, Serialize)]
pub struct LaunchList<'a> {
    /// Launches to print, in API order.
    pub entries: Vec<LaunchDetails<'a>>,
    /// How many launches pass the filter, before any limit.
    pub total: usize,
    /// Success rate over every launch passing the filter.
    pub success_rate: u8,
}

/// Session state for the dashboard.
#[derive(Debug, Default)]
pub struct Dashboard {
    launches: Vec<Launch>,
    rockets: HashMap<String, Rocket>,
    launchpads: HashMap<String, Launchpad>,
    available_years: Vec<i32>,
    filter: FilterOptions,
    selected: Option<String>,
    show_stats: bool,
    status: LoadStatus,
}

impl Dashboard {
    /// Build a loaded dashboard from already-fetched collections.
    ///
    /// Later records win when ids repeat.
    #[must_use]
    pub fn from_collections(
        launches: Vec<Launch>,
        rockets: Vec<Rocket>,
        launchpads: Vec<Launchpad>,
    ) -> Self {
        let available_years = filter::distinct_years(&launches);
        Self {
            rockets: rockets.into_iter().map(|r| (r.id.clone(), r)).collect(),
            launchpads: launchpads.into_iter().map(|p| (p.id.clone(), p)).collect(),
            launches,
            available_years,
            status: LoadStatus::Ready,
            ..Self::default()
        }
    }

    /// Fetch launches, rockets, and launchpads concurrently.
    ///
    /// The load fails as a whole on the first failing fetch; the dashboard is
    /// then empty with [`LoadStatus::Failed`] and the cause is logged.
    pub async fn load(source: &dyn LaunchSource) -> Self {
        Self::load_mission(source, MissionType::All).await
    }

    /// Like [`Dashboard::load`], but asks the source only for launches of
    /// `mission` and starts with that mission type selected.
    ///
    /// Available years then cover only the fetched launches.
    pub async fn load_mission(source: &dyn LaunchSource, mission: MissionType) -> Self {
        match Self::fetch_all(source, mission).await {
            Ok((launches, rockets, launchpads)) => {
                info!(
                    %mission,
                    launches = launches.len(),
                    rockets = rockets.len(),
                    launchpads = launchpads.len(),
                    "launch data loaded"
                );
                let mut dashboard = Self::from_collections(launches, rockets, launchpads);
                dashboard.filter.mission_type = mission;
                dashboard
            }
            Err(err) => {
                error!(error = %err, "failed to load launch data");
                Self {
                    status: LoadStatus::Failed(LOAD_FAILURE_MESSAGE.to_string()),
                    ..Self::default()
                }
            }
        }
    }

    async fn fetch_all(
        source: &dyn LaunchSource,
        mission: MissionType,
    ) -> Result<(Vec<Launch>, Vec<Rocket>, Vec<Launchpad>)> {
        tokio::try_join!(
            source.mission_launches(mission),
            source.rockets(),
            source.launchpads()
        )
    }

    /// Fetch a single launch plus the rocket and launch site it references,
    /// with the launch selected.
    ///
    /// A rocket or launch site the source does not know is left unresolved.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LaunchNotFound`] when the source does not know `id`,
    /// or the fetch error otherwise.
    pub async fn load_launch(source: &dyn LaunchSource, id: &str) -> Result<Self> {
        let result = Self::fetch_launch(source, id).await;
        match &result {
            Ok(_) => info!(id, "launch loaded"),
            Err(err) => error!(id, error = %err, "failed to load launch"),
        }
        result
    }

    async fn fetch_launch(source: &dyn LaunchSource, id: &str) -> Result<Self> {
        let launch = match source.launch(id).await {
            Err(err) if err.is_not_found() => return Err(Error::launch_not_found(id)),
            other => other?,
        };
        let (rocket, launchpad) = tokio::join!(
            source.rocket(&launch.rocket),
            source.launchpad(&launch.launchpad)
        );
        let rocket = found(rocket)?;
        let launchpad = found(launchpad)?;

        let selected = launch.id.clone();
        let mut dashboard = Self::from_collections(
            vec![launch],
            rocket.into_iter().collect(),
            launchpad.into_iter().collect(),
        );
        dashboard.selected = Some(selected);
        Ok(dashboard)
    }

    /// Current load status.
    #[must_use]
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// The user-facing error message, if the load failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Every loaded launch, in API order.
    #[must_use]
    pub fn launches(&self) -> &[Launch] {
        &self.launches
    }

    /// Known launch years, ascending.
    #[must_use]
    pub fn available_years(&self) -> &[i32] {
        &self.available_years
    }

    /// The active filter.
    #[must_use]
    pub fn filter(&self) -> FilterOptions {
        self.filter
    }

    /// Change the mission type filter.
    pub fn set_mission_type(&mut self, mission_type: MissionType) {
        self.filter.mission_type = mission_type;
    }

    /// Change or clear the year filter.
    pub fn set_year(&mut self, year: Option<i32>) {
        self.filter.year = year;
    }

    /// Launches passing the active filter, in API order.
    #[must_use]
    pub fn filtered_launches(&self) -> Vec<&Launch> {
        filter::filter_by_criteria(&self.launches, &self.filter)
    }

    /// The filtered list with at most `limit` entries. The total and the
    /// success rate always cover the whole filtered set.
    #[must_use]
    pub fn launch_list(&self, limit: Option<usize>) -> LaunchList<'_> {
        let filtered = self.filtered_launches();
        let total = filtered.len();
        let success_rate = filter::success_rate(filtered.iter().copied());
        let entries = filtered
            .into_iter()
            .take(limit.unwrap_or(total))
            .map(|launch| self.details_for(launch))
            .collect();
        LaunchList {
            entries,
            total,
            success_rate,
        }
    }

    /// Look up a launch by id.
    #[must_use]
    pub fn launch(&self, id: &str) -> Option<&Launch> {
        self.launches.iter().find(|l| l.id == id)
    }

    /// Resolve a launch's rocket; `None` when the id is unknown.
    #[must_use]
    pub fn rocket_for(&self, launch: &Launch) -> Option<&Rocket> {
        self.rockets.get(&launch.rocket)
    }

    /// Resolve a launch's launch site; `None` when the id is unknown.
    #[must_use]
    pub fn launchpad_for(&self, launch: &Launch) -> Option<&Launchpad> {
        self.launchpads.get(&launch.launchpad)
    }

    /// Bundle a launch with its resolved records.
    #[must_use]
    pub fn details_for<'a>(&'a self, launch: &'a Launch) -> LaunchDetails<'a> {
        LaunchDetails {
            launch,
            rocket: self.rocket_for(launch),
            launchpad: self.launchpad_for(launch),
        }
    }

    /// Select a launch for the detail view. Returns `false`, leaving the
    /// selection unchanged, when no launch has that id.
    pub fn select(&mut self, id: &str) -> bool {
        if self.launch(id).is_none() {
            return false;
        }
        self.selected = Some(id.to_string());
        true
    }

    /// Close the detail view.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Details of the selected launch, if any.
    #[must_use]
    pub fn selected_details(&self) -> Option<LaunchDetails<'_>> {
        let launch = self.launch(self.selected.as_deref()?)?;
        Some(self.details_for(launch))
    }

    /// Flip the statistics panel on or off; returns the new state.
    pub fn toggle_stats(&mut self) -> bool {
        self.show_stats = !self.show_stats;
        self.show_stats
    }

    /// Whether the statistics panel is shown.
    #[must_use]
    pub fn show_stats(&self) -> bool {
        self.show_stats
    }

    /// Headline figures over every loaded launch.
    #[must_use]
    pub fn summary(&self) -> LaunchSummary {
        LaunchSummary::from_launches(&self.launches)
    }

    /// Per-year counts over every loaded launch.
    #[must_use]
    pub fn yearly_stats(&self) -> Vec<YearlyStats> {
        filter::yearly_aggregate(&self.launches)
    }
}

/// Treat "not found" as absence.
fn found<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(record) => Ok(Some(record)),
        Err(err) if err.is_not_found() => Ok(None),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::model::fixtures::{launch, launchpad, rocket};

    /// In-memory source; `failing` names the collection that errors.
    struct FakeSource {
        failing: Option<&'static str>,
    }

    impl FakeSource {
        fn check(&self, name: &'static str) -> Result<()> {
            if self.failing == Some(name) {
                Err(Error::http_status(format!("/{name}"), 500))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl LaunchSource for FakeSource {
        async fn launches(&self) -> Result<Vec<Launch>> {
            self.check("launches")?;
            let mut first = launch("a", Some("2021-03-04T08:24:00.000Z"), Some(true), false);
            first.rocket = "r1".to_string();
            first.launchpad = "p1".to_string();
            let mut orphan = launch("b", Some("2022-02-03T18:13:00.000Z"), None, true);
            orphan.rocket = "gone".to_string();
            orphan.launchpad = "gone".to_string();
            Ok(vec![first, orphan, launch("c", None, Some(false), false)])
        }

        async fn rockets(&self) -> Result<Vec<Rocket>> {
            self.check("rockets")?;
            Ok(vec![rocket("r1", "Falcon 9"), rocket("r1", "Falcon 9 Block 5")])
        }

        async fn launchpads(&self) -> Result<Vec<Launchpad>> {
            self.check("launchpads")?;
            Ok(vec![launchpad("p1", "Kennedy Space Center LC 39A")])
        }

        async fn launch(&self, id: &str) -> Result<Launch> {
            self.launches()
                .await?
                .into_iter()
                .find(|l| l.id == id)
                .ok_or_else(|| Error::http_status(format!("/launches/{id}"), 404))
        }

        async fn rocket(&self, id: &str) -> Result<Rocket> {
            self.rockets()
                .await?
                .into_iter()
                .rev()
                .find(|r| r.id == id)
                .ok_or_else(|| Error::http_status(format!("/rockets/{id}"), 404))
        }

        async fn launchpad(&self, id: &str) -> Result<Launchpad> {
            self.launchpads()
                .await?
                .into_iter()
                .find(|p| p.id == id)
                .ok_or_else(|| Error::http_status(format!("/launchpads/{id}"), 404))
        }
    }

    async fn loaded() -> Dashboard {
        Dashboard::load(&FakeSource { failing: None }).await
    }

    #[tokio::test]
    async fn test_load_success() {
        let dashboard = loaded().await;
        assert_eq!(dashboard.status(), &LoadStatus::Ready);
        assert!(dashboard.error_message().is_none());
        assert_eq!(dashboard.launches().len(), 3);
        assert_eq!(dashboard.available_years(), &[2021, 2022]);
    }

    #[tokio::test]
    async fn test_load_fails_as_a_whole() {
        for failing in ["launches", "rockets", "launchpads"] {
            let dashboard = Dashboard::load(&FakeSource {
                failing: Some(failing),
            })
            .await;
            assert_eq!(
                dashboard.status(),
                &LoadStatus::Failed(LOAD_FAILURE_MESSAGE.to_string())
            );
            assert_eq!(dashboard.error_message(), Some(LOAD_FAILURE_MESSAGE));
            assert!(dashboard.launches().is_empty());
            assert!(dashboard.available_years().is_empty());
        }
    }

    #[tokio::test]
    async fn test_duplicate_ids_last_write_wins() {
        let dashboard = loaded().await;
        let first = dashboard.launch("a").unwrap();
        assert_eq!(dashboard.rocket_for(first).unwrap().name, "Falcon 9 Block 5");
    }

    #[tokio::test]
    async fn test_unresolved_references_are_absent() {
        let dashboard = loaded().await;
        let orphan = dashboard.launch("b").unwrap();
        let details = dashboard.details_for(orphan);
        assert!(details.rocket.is_none());
        assert!(details.launchpad.is_none());
        assert_eq!(details.launch.id, "b");
    }

    #[tokio::test]
    async fn test_filter_state_drives_filtered_launches() {
        let mut dashboard = loaded().await;
        assert_eq!(dashboard.filtered_launches().len(), 3);

        dashboard.set_mission_type(MissionType::Past);
        let ids: Vec<&str> = dashboard
            .filtered_launches()
            .iter()
            .map(|l| l.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);

        dashboard.set_year(Some(2021));
        assert_eq!(dashboard.filtered_launches().len(), 1);

        dashboard.set_year(Some(1990));
        assert!(dashboard.filtered_launches().is_empty());

        dashboard.set_mission_type(MissionType::All);
        dashboard.set_year(None);
        assert_eq!(dashboard.filter(), FilterOptions::default());
        assert_eq!(dashboard.filtered_launches().len(), 3);
    }

    #[tokio::test]
    async fn test_selection() {
        let mut dashboard = loaded().await;
        assert!(dashboard.selected_details().is_none());

        assert!(dashboard.select("a"));
        let details = dashboard.selected_details().unwrap();
        assert_eq!(details.launch.id, "a");
        assert!(details.rocket.is_some());
        assert!(details.launchpad.is_some());

        assert!(!dashboard.select("missing"));
        assert_eq!(dashboard.selected_details().unwrap().launch.id, "a");

        dashboard.clear_selection();
        assert!(dashboard.selected_details().is_none());
    }

    #[tokio::test]
    async fn test_toggle_stats_and_summaries() {
        let mut dashboard = loaded().await;
        assert!(!dashboard.show_stats());
        assert!(dashboard.toggle_stats());
        assert!(!dashboard.toggle_stats());

        let summary = dashboard.summary();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.successful, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.upcoming, 1);

        let yearly = dashboard.yearly_stats();
        assert_eq!(yearly.len(), 2);
        assert_eq!(yearly[1].year, 2022);
        assert_eq!(yearly[1].total, 1);
    }

    #[tokio::test]
    async fn test_launch_list_limit_keeps_filtered_total() {
        let dashboard = loaded().await;

        let full = dashboard.launch_list(None);
        assert_eq!(full.entries.len(), 3);
        assert_eq!(full.total, 3);
        assert_eq!(full.success_rate, 33);

        let page = dashboard.launch_list(Some(1));
        assert_eq!(page.entries.len(), 1);
        assert_eq!(page.entries[0].launch.id, "a");
        assert_eq!(page.total, 3);
        assert_eq!(page.success_rate, 33);

        let none = dashboard.launch_list(Some(0));
        assert!(none.entries.is_empty());
        assert_eq!(none.total, 3);
    }

    #[tokio::test]
    async fn test_launch_list_follows_filter() {
        let mut dashboard = loaded().await;
        dashboard.set_year(Some(1990));
        let list = dashboard.launch_list(Some(5));
        assert_eq!(list.total, 0);
        assert_eq!(list.success_rate, 0);
        assert!(list.entries.is_empty());
    }

    #[tokio::test]
    async fn test_load_mission_selects_mission_type() {
        let source = FakeSource { failing: None };
        let dashboard = Dashboard::load_mission(&source, MissionType::Past).await;
        assert_eq!(dashboard.status(), &LoadStatus::Ready);
        assert_eq!(dashboard.filter().mission_type, MissionType::Past);
        let ids: Vec<&str> = dashboard
            .filtered_launches()
            .iter()
            .map(|l| l.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[tokio::test]
    async fn test_load_mission_failure() {
        let dashboard = Dashboard::load_mission(
            &FakeSource {
                failing: Some("rockets"),
            },
            MissionType::Upcoming,
        )
        .await;
        assert_eq!(dashboard.error_message(), Some(LOAD_FAILURE_MESSAGE));
    }

    #[tokio::test]
    async fn test_load_launch_resolves_references() {
        let source = FakeSource { failing: None };
        let dashboard = Dashboard::load_launch(&source, "a").await.unwrap();
        assert_eq!(dashboard.launches().len(), 1);
        let details = dashboard.selected_details().unwrap();
        assert_eq!(details.launch.id, "a");
        assert_eq!(details.rocket.unwrap().name, "Falcon 9 Block 5");
        assert_eq!(
            details.launchpad.unwrap().display_name(),
            "Kennedy Space Center LC 39A"
        );
    }

    #[tokio::test]
    async fn test_load_launch_leaves_unknown_references_absent() {
        let source = FakeSource { failing: None };
        let dashboard = Dashboard::load_launch(&source, "b").await.unwrap();
        let details = dashboard.selected_details().unwrap();
        assert!(details.rocket.is_none());
        assert!(details.launchpad.is_none());
    }

    #[tokio::test]
    async fn test_load_launch_unknown_id() {
        let source = FakeSource { failing: None };
        let err = Dashboard::load_launch(&source, "missing").await.unwrap_err();
        assert!(matches!(err, Error::LaunchNotFound { ref id } if id == "missing"));
    }

    #[tokio::test]
    async fn test_load_launch_propagates_fetch_errors() {
        let source = FakeSource {
            failing: Some("launchpads"),
        };
        let err = Dashboard::load_launch(&source, "a").await.unwrap_err();
        assert!(err.is_transport_error());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_load_events_fall_under_load_target() {
        assert!(module_path!().starts_with(crate::logging::LOAD_TARGET));
    }

    #[test]
    fn test_default_is_loading() {
        let dashboard = Dashboard::default();
        assert_eq!(dashboard.status(), &LoadStatus::Loading);
        assert!(dashboard.filtered_launches().is_empty());
    }
}
