//! Journey selection errors.

use crate::geo::PositionError;
use crate::transport::TransportError;

/// Why no journey could be produced.
#[derive(Debug, thiserror::Error)]
pub enum JourneyError {
    /// The user's position is unknown or invalid
    #[error(transparent)]
    Position(#[from] PositionError),

    /// No train station among the nearby locations
    #[error("no train station found nearby")]
    NoStationFound,

    /// The station board came back empty
    #[error("no upcoming departures found")]
    NoDepartures,

    /// The chosen train has no stops at all
    #[error("no valid train found")]
    NoValidTrain,

    /// The first stop lacks a departure time or platform
    #[error("no valid departure found")]
    InvalidDeparture,

    /// There is no usable stop after the departure
    #[error("no valid destination found")]
    InvalidArrival,

    /// Talking to the transport API failed
    #[error("transport API: {0}")]
    Transport(#[from] TransportError),
}

impl JourneyError {
    /// Whether the failure came from the upstream API rather than its data.
    pub fn is_upstream(&self) -> bool {
        matches!(self, JourneyError::Transport(_))
    }
}
