//! Transport API response DTOs.
//!
//! These types map directly to the `transport.opendata.ch` JSON responses.
//! Almost everything is `Option`: the API sends `null` freely, and
//! addresses or points of interest returned by `/locations` lack most
//! station fields.

use serde::{Deserialize, Deserializer, Serialize};

/// Response from `GET /v1/locations`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LocationsResponse {
    pub stations: Option<Vec<Station>>,
}

/// A location near the query point.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Station {
    /// Station identifier used by `/stationboard`. Null for addresses.
    pub id: Option<String>,

    #[serde(default)]
    pub name: String,

    /// Transport mode icon, e.g. `"train"`, `"bus"`, `"tram"`.
    pub icon: Option<String>,

    pub coordinate: Option<Coordinate>,

    /// Distance from the query point in metres.
    pub distance: Option<f64>,
}

impl Station {
    /// Whether this location is a train station.
    pub fn is_train(&self) -> bool {
        self.icon.as_deref() == Some("train")
    }
}

/// Coordinate as reported by the API (`x` is latitude, `y` longitude
/// for `WGS84` results).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Coordinate {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

/// Response from `GET /v1/stationboard`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StationBoardResponse {
    pub station: Option<PassStation>,
    pub stationboard: Option<Vec<BoardEntry>>,
}

/// One train on the departure board.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardEntry {
    pub capacity1st: Option<i64>,
    pub capacity2nd: Option<i64>,
    pub category: Option<String>,

    /// Numeric in live responses, but historically a string.
    pub category_code: Option<serde_json::Value>,

    pub name: Option<String>,
    pub number: Option<String>,
    pub operator: Option<String>,

    /// Final destination of the train.
    pub to: Option<String>,

    /// Departure details at the board station.
    pub stop: Option<Stop>,

    /// Stops the train visits, starting with the board station.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pass_list: Vec<Pass>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Arrival/departure details at the board station.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    pub arrival: Option<String>,
    pub arrival_timestamp: Option<i64>,
    pub delay: Option<i64>,
    pub departure: Option<String>,
    pub departure_timestamp: Option<i64>,
    pub platform: Option<String>,
}

/// One stop in a train's pass list.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pass {
    pub station: Option<PassStation>,
    pub arrival: Option<String>,
    pub arrival_timestamp: Option<i64>,
    pub departure: Option<String>,
    pub departure_timestamp: Option<i64>,
    pub delay: Option<i64>,
    pub platform: Option<String>,
    pub capacity1st: Option<i64>,
    pub capacity2nd: Option<i64>,
}

impl Pass {
    /// Name of the stop, if the API sent one.
    pub fn station_name(&self) -> Option<&str> {
        self.station.as_ref().and_then(|s| s.name.as_deref())
    }
}

/// Station reference inside a pass list.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct PassStation {
    pub id: Option<String>,
    pub name: Option<String>,
}
