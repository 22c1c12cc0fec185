//! Geographic positions and how the app obtains one.
//!
//! The browser performs the actual geolocation and forwards the result as
//! query parameters. When it cannot (permission denied, no API support),
//! the request arrives without coordinates and we fall back to the
//! configured default position, if any.

use std::fmt;
use std::str::FromStr;

/// A WGS84 latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

/// The position could not be determined.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PositionError {
    /// No coordinates were supplied and no fallback is configured.
    #[error("position unavailable: geolocation denied or unsupported")]
    Unavailable,

    /// Coordinates were supplied but are not a valid position.
    #[error("invalid position: {0}")]
    Invalid(String),
}

impl Position {
    /// Create a position, rejecting non-finite or out-of-range values.
    pub fn new(lat: f64, lon: f64) -> Result<Self, PositionError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(PositionError::Invalid(format!("latitude {lat}")));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(PositionError::Invalid(format!("longitude {lon}")));
        }
        Ok(Self { lat, lon })
    }

    /// Resolve the position for a request.
    ///
    /// Both coordinates must be present to use them; a lone latitude or
    /// longitude counts as missing.
    pub fn resolve(
        lat: Option<f64>,
        lon: Option<f64>,
        fallback: Option<Position>,
    ) -> Result<Self, PositionError> {
        match (lat, lon) {
            (Some(lat), Some(lon)) => Self::new(lat, lon),
            _ => fallback.ok_or(PositionError::Unavailable),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.lat, self.lon)
    }
}

/// Parses `"lat,lon"`, e.g. `"46.95,7.45"`.
impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| PositionError::Invalid(format!("expected \"lat,lon\", got {s:?}")))?;
        let lat = lat
            .trim()
            .parse::<f64>()
            .map_err(|e| PositionError::Invalid(format!("latitude {lat:?}: {e}")))?;
        let lon = lon
            .trim()
            .parse::<f64>()
            .map_err(|e| PositionError::Invalid(format!("longitude {lon:?}: {e}")))?;
        Self::new(lat, lon)
    }
}
