//! HTTP client for the SpaceX v4 REST API.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use super::{endpoints, LaunchSource, LaunchStats};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::filter::MissionType;
use crate::model::{Launch, Launchpad, Rocket};

/// Thin wrapper around `reqwest::Client` bound to one API base URL.
#[derive(Debug, Clone)]
pub struct SpaceXClient {
    client: reqwest::Client,
    base_url: String,
}

impl SpaceXClient {
    /// Build a client from the `[api]` section of the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClientBuild`] if the TLS backend cannot be initialized.
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.api.user_agent.as_str())
            .build()
            .map_err(Error::ClientBuild)?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
        })
    }

    /// The base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch launches that have not happened yet.
    ///
    /// # Errors
    ///
    /// Returns a transport, status, or decode error.
    pub async fn upcoming_launches(&self) -> Result<Vec<Launch>> {
        self.get_json(endpoints::UPCOMING_LAUNCHES).await
    }

    /// Fetch launches that already happened.
    ///
    /// # Errors
    ///
    /// Returns a transport, status, or decode error.
    pub async fn past_launches(&self) -> Result<Vec<Launch>> {
        self.get_json(endpoints::PAST_LAUNCHES).await
    }

    /// Fetch all launches and count their raw success flags.
    ///
    /// # Errors
    ///
    /// Returns a transport, status, or decode error.
    pub async fn launch_stats(&self) -> Result<LaunchStats> {
        let launches = self.launches().await?;
        Ok(LaunchStats::from_launches(&launches))
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let result = self.fetch(endpoint).await;
        if let Err(err) = &result {
            error!(endpoint, error = %err, "Error fetching from API");
        }
        result
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}{endpoint}", self.base_url);
        debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| Error::request(endpoint, source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::http_status(endpoint, status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| Error::request(endpoint, source))?;
        debug!(endpoint, bytes = body.len(), "response received");

        serde_json::from_slice(&body).map_err(|source| Error::decode(endpoint, source))
    }
}

#[async_trait]
impl LaunchSource for SpaceXClient {
    async fn launches(&self) -> Result<Vec<Launch>> {
        self.get_json(endpoints::LAUNCHES).await
    }

    async fn rockets(&self) -> Result<Vec<Rocket>> {
        self.get_json(endpoints::ROCKETS).await
    }

    async fn launchpads(&self) -> Result<Vec<Launchpad>> {
        self.get_json(endpoints::LAUNCHPADS).await
    }

    async fn mission_launches(&self, mission: MissionType) -> Result<Vec<Launch>> {
        match mission {
            MissionType::All => self.launches().await,
            MissionType::Upcoming => self.upcoming_launches().await,
            MissionType::Past => self.past_launches().await,
        }
    }

    async fn launch(&self, id: &str) -> Result<Launch> {
        self.get_json(&format!("{}/{id}", endpoints::LAUNCHES)).await
    }

    async fn rocket(&self, id: &str) -> Result<Rocket> {
        self.get_json(&format!("{}/{id}", endpoints::ROCKETS)).await
    }

    async fn launchpad(&self, id: &str) -> Result<Launchpad> {
        self.get_json(&format!("{}/{id}", endpoints::LAUNCHPADS)).await
    }
}
