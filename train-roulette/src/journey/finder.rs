//! Produces a random journey from a position.

use rand::Rng;

use crate::geo::Position;
use crate::transport::{Station, TransportBackend};

use super::JourneyError;
use super::info::JourneyInfo;
use super::select::{pick_train, select_station};

/// A journey together with some context about the train.
#[derive(Debug, Clone, PartialEq)]
pub struct FoundJourney {
    /// The station the journey leaves from.
    pub station: Station,
    pub journey: JourneyInfo,
    /// Train label, e.g. "IC 1 714".
    pub train_name: Option<String>,
    /// Where the train ultimately goes.
    pub train_to: Option<String>,
}

/// Looks up the nearest station and draws a journey from its board.
#[derive(Debug, Clone)]
pub struct JourneyFinder {
    transport: TransportBackend,
    board_limit: u32,
}

impl JourneyFinder {
    pub fn new(transport: TransportBackend, board_limit: u32) -> Self {
        Self {
            transport,
            board_limit,
        }
    }

    /// Which transport backend is in use.
    pub fn transport(&self) -> &TransportBackend {
        &self.transport
    }

    /// Find a random journey starting near `position`.
    ///
    /// Performs the station lookup and the station board lookup one after
    /// the other, then selects with `rng`.
    pub async fn find<R>(&self, position: Position, rng: &mut R) -> Result<FoundJourney, JourneyError>
    where
        R: Rng + ?Sized,
    {
        let stations = self.transport.locations(position).await?;
        let station = select_station(&stations)?.clone();
        // The nearest train station decides; a farther one is never tried
        let Some(station_id) = station.id.as_deref() else {
            return Err(JourneyError::NoStationFound);
        };
        tracing::debug!(station = %station.name, station_id, "nearest train station");

        let board = self
            .transport
            .stationboard(station_id, self.board_limit)
            .await?;
        let picked = pick_train(&board, rng)?;
        let journey = picked.to_journey_info(&station);

        tracing::info!(
            from = %journey.departure_station,
            to = %journey.arrival_station,
            departs = %journey.departure_time,
            "picked random journey"
        );

        Ok(FoundJourney {
            train_name: picked.entry.name.clone(),
            train_to: picked.entry.to.clone(),
            station,
            journey,
        })
    }
}
