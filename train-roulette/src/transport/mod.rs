//! Public transport API access.
//!
//! Two endpoints of `transport.opendata.ch` are used:
//! - `/v1/locations` finds stations near a coordinate
//! - `/v1/stationboard` lists the next departures from a station, each with
//!   the stops the train passes through
//!
//! [`TransportBackend`] lets the rest of the app run against either the live
//! API or local fixtures.

mod client;
mod error;
mod mock;
mod types;

pub use client::{TransportClient, TransportConfig};
pub use error::TransportError;
pub use mock::MockTransportClient;
pub use types::{
    BoardEntry, Coordinate, LocationsResponse, Pass, PassStation, Station, StationBoardResponse,
    Stop,
};

use crate::geo::Position;

/// Where station and departure data comes from.
#[derive(Debug, Clone)]
pub enum TransportBackend {
    Live(TransportClient),
    Mock(MockTransportClient),
}

impl TransportBackend {
    /// Stations near `position`, in API order.
    pub async fn locations(&self, position: Position) -> Result<Vec<Station>, TransportError> {
        match self {
            TransportBackend::Live(client) => client.locations(position).await,
            TransportBackend::Mock(client) => client.locations(position).await,
        }
    }

    /// Up to `limit` upcoming departures from `station_id`.
    pub async fn stationboard(
        &self,
        station_id: &str,
        limit: u32,
    ) -> Result<Vec<BoardEntry>, TransportError> {
        match self {
            TransportBackend::Live(client) => client.stationboard(station_id, limit).await,
            TransportBackend::Mock(client) => client.stationboard(station_id, limit).await,
        }
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            TransportBackend::Live(_) => "live",
            TransportBackend::Mock(_) => "mock",
        }
    }
}
