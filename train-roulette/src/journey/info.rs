//! The flattened journey record shown to the user and persisted.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Placeholder for any value we do not have.
pub const NOT_AVAILABLE: &str = "N/A";

/// One departure/arrival pair, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyInfo {
    pub departure_station: String,
    pub departure_time: String,
    pub departure_platform: String,
    pub arrival_station: String,
    pub arrival_time: String,
    pub arrival_platform: String,
}

impl JourneyInfo {
    /// Build a record from optional parts, substituting `"N/A"` for
    /// anything missing or blank.
    pub fn from_parts(
        departure_station: Option<&str>,
        departure_time: Option<&str>,
        departure_platform: Option<&str>,
        arrival_station: Option<&str>,
        arrival_time: Option<&str>,
        arrival_platform: Option<&str>,
    ) -> Self {
        Self {
            departure_station: or_not_available(departure_station),
            departure_time: or_not_available(departure_time),
            departure_platform: or_not_available(departure_platform),
            arrival_station: or_not_available(arrival_station),
            arrival_time: or_not_available(arrival_time),
            arrival_platform: or_not_available(arrival_platform),
        }
    }

    /// One-line description used in the history list.
    pub fn summary(&self) -> String {
        format!(
            "From {} at {} on platform {} to {} at {} on platform {}",
            self.departure_station,
            self.departure_time,
            self.departure_platform,
            self.arrival_station,
            self.arrival_time,
            self.arrival_platform
        )
    }
}

fn or_not_available(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Format an API timestamp such as `2024-05-01T10:00:00+0200` as `10:00`.
///
/// The wall-clock time of the given offset is kept as is. Anything that
/// does not parse is returned unchanged.
pub fn display_time(raw: &str) -> String {
    DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z")
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
