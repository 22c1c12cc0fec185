//! Mock transport client for running without network access.
//!
//! Serves station lists and departure boards from JSON fixtures as if they
//! were live API responses.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::geo::Position;

use super::error::TransportError;
use super::types::{BoardEntry, LocationsResponse, Station, StationBoardResponse};

/// Name of the fixture file holding the `/locations` response.
const LOCATIONS_FILE: &str = "locations.json";

/// Mock client that serves data from fixtures.
///
/// The position passed to [`MockTransportClient::locations`] is ignored:
/// every query sees the same station list.
#[derive(Debug, Clone)]
pub struct MockTransportClient {
    stations: Arc<Vec<Station>>,
    /// Departure boards keyed by station ID.
    boards: Arc<HashMap<String, Vec<BoardEntry>>>,
}

impl MockTransportClient {
    /// Load fixtures from a directory.
    ///
    /// Expects `locations.json` (a `/locations` response) plus one
    /// `{station_id}.json` file per station board (e.g. `8507000.json`).
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, TransportError> {
        let data_dir = data_dir.as_ref();

        let locations: LocationsResponse = read_fixture(&data_dir.join(LOCATIONS_FILE))?;
        let stations = locations.stations.unwrap_or_default();

        let entries = std::fs::read_dir(data_dir).map_err(|e| TransportError::Fixture {
            message: format!("Failed to read mock data directory {:?}: {}", data_dir, e),
        })?;

        let mut boards = HashMap::new();
        for entry in entries {
            let entry = entry.map_err(|e| TransportError::Fixture {
                message: format!("Failed to read directory entry: {}", e),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            let Some(station_id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if path.file_name().and_then(|s| s.to_str()) == Some(LOCATIONS_FILE) {
                continue;
            }

            let board: StationBoardResponse = read_fixture(&path)?;
            boards.insert(station_id.to_string(), board.stationboard.unwrap_or_default());
        }

        tracing::info!(
            stations = stations.len(),
            boards = boards.len(),
            "loaded mock transport fixtures from {}",
            data_dir.display()
        );

        Ok(Self::from_parts(stations, boards))
    }

    /// Build a mock client from in-memory data.
    pub fn from_parts(stations: Vec<Station>, boards: HashMap<String, Vec<BoardEntry>>) -> Self {
        Self {
            stations: Arc::new(stations),
            boards: Arc::new(boards),
        }
    }

    /// Mimics [`super::TransportClient::locations`].
    pub async fn locations(&self, _position: Position) -> Result<Vec<Station>, TransportError> {
        Ok(self.stations.as_ref().clone())
    }

    /// Mimics [`super::TransportClient::stationboard`], truncating to `limit`.
    pub async fn stationboard(
        &self,
        station_id: &str,
        limit: u32,
    ) -> Result<Vec<BoardEntry>, TransportError> {
        let board = self
            .boards
            .get(station_id)
            .ok_or_else(|| TransportError::Api {
                status: 404,
                message: format!("No mock board for station {}", station_id),
            })?;

        Ok(board.iter().take(limit as usize).cloned().collect())
    }

    /// Station IDs that have a board fixture.
    pub fn available_boards(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.boards.keys().cloned().collect();
        ids.sort();
        ids
    }
}

fn read_fixture<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, TransportError> {
    let json = std::fs::read_to_string(path).map_err(|e| TransportError::Fixture {
        message: format!("Failed to read {:?}: {}", path, e),
    })?;
    serde_json::from_str(&json).map_err(|e| TransportError::Fixture {
        message: format!("Failed to parse {:?}: {}", path, e),
    })
}
