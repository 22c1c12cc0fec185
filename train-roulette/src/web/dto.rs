//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::journey::{FoundJourney, JourneyHistory, JourneyInfo};

/// Query for a random journey.
///
/// Both coordinates are omitted when the browser could not locate the user.
#[derive(Debug, Default, Deserialize)]
pub struct RandomJourneyQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// The journey currently on screen, posted back by "validate".
///
/// Every field is optional; blanks are stored as "N/A".
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateJourneyRequest {
    pub departure_station: Option<String>,
    pub departure_time: Option<String>,
    pub departure_platform: Option<String>,
    pub arrival_station: Option<String>,
    pub arrival_time: Option<String>,
    pub arrival_platform: Option<String>,
}

impl ValidateJourneyRequest {
    pub fn into_journey_info(self) -> JourneyInfo {
        JourneyInfo::from_parts(
            self.departure_station.as_deref(),
            self.departure_time.as_deref(),
            self.departure_platform.as_deref(),
            self.arrival_station.as_deref(),
            self.arrival_time.as_deref(),
            self.arrival_platform.as_deref(),
        )
    }
}

/// A random journey.
#[derive(Debug, Serialize)]
pub struct RandomJourneyResponse {
    /// Panel to show, always "details"
    pub panel: &'static str,

    pub journey: JourneyInfo,

    /// Station the journey leaves from
    pub station: StationResult,

    /// Train label, e.g. "IC 1 714"
    pub train_name: Option<String>,

    /// Final destination of the train
    pub train_to: Option<String>,
}

impl RandomJourneyResponse {
    pub fn from_found(found: &FoundJourney) -> Self {
        Self {
            panel: "details",
            journey: found.journey.clone(),
            station: StationResult {
                id: found.station.id.clone(),
                name: found.station.name.clone(),
                distance: found.station.distance,
            },
            train_name: found.train_name.clone(),
            train_to: found.train_to.clone(),
        }
    }
}

/// The station a journey leaves from.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub id: Option<String>,
    pub name: String,
    /// Metres from the user
    pub distance: Option<f64>,
}

/// The stored journey history.
#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub journeys: Vec<JourneyInfo>,
}

impl From<&JourneyHistory> for HistoryResponse {
    fn from(history: &JourneyHistory) -> Self {
        Self {
            journeys: history.entries().to_vec(),
        }
    }
}

/// Error body for JSON clients.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
