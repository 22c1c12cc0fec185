//! HTTP client for the `transport.opendata.ch` API.

use serde::de::DeserializeOwned;

use crate::config::{AppConfig, DEFAULT_TRANSPORT_BASE_URL};
use crate::geo::Position;

use super::error::TransportError;
use super::types::{BoardEntry, LocationsResponse, Station, StationBoardResponse};

/// Configuration for the transport API client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Base URL for the API, including the `/v1` prefix
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_TRANSPORT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

impl TransportConfig {
    /// Take the transport settings out of the application config.
    pub fn from_app(config: &AppConfig) -> Self {
        Self {
            base_url: config.transport_base_url.clone(),
            timeout_secs: config.transport_timeout_secs,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

/// Client for the public transport API.
#[derive(Debug, Clone)]
pub struct TransportClient {
    http: reqwest::Client,
    base_url: String,
}

impl TransportClient {
    /// Create a new transport API client.
    pub fn new(config: TransportConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch the stations near a position.
    ///
    /// The API takes `x` as longitude and `y` as latitude for this query.
    /// A null `stations` array comes back as an empty list.
    pub async fn locations(&self, position: Position) -> Result<Vec<Station>, TransportError> {
        let url = format!("{}/locations", self.base_url);
        let query = [
            ("x", position.lon.to_string()),
            ("y", position.lat.to_string()),
            ("type", "station".to_string()),
        ];

        tracing::debug!(%position, "fetching nearby stations");
        let response: LocationsResponse = self.get_json(&url, &query).await?;
        Ok(response.stations.unwrap_or_default())
    }

    /// Fetch the next departures from a station.
    pub async fn stationboard(
        &self,
        station_id: &str,
        limit: u32,
    ) -> Result<Vec<BoardEntry>, TransportError> {
        let url = format!("{}/stationboard", self.base_url);
        let query = [
            ("id", station_id.to_string()),
            ("limit", limit.to_string()),
        ];

        tracing::debug!(station_id, limit, "fetching station board");
        let response: StationBoardResponse = self.get_json(&url, &query).await?;
        Ok(response.stationboard.unwrap_or_default())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, TransportError> {
        let response = self.http.get(url).query(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| TransportError::Json {
            message: e.to_string(),
        })
    }
}
