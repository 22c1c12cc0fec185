//! Station and random journey selection.
//!
//! Both steps are pure functions over API data. Randomness is injected so
//! callers and tests control the source.

use std::cmp::Ordering;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::transport::{BoardEntry, Pass, Station};

use super::JourneyError;
use super::info::{JourneyInfo, display_time};

/// Pick the closest train station.
///
/// Stations are ordered by distance (stable, unknown distances last) and
/// the first with a `"train"` icon wins. The winner may lack an ID; the
/// caller decides what that means.
pub fn select_station(stations: &[Station]) -> Result<&Station, JourneyError> {
    let mut trains: Vec<&Station> = stations.iter().filter(|s| s.is_train()).collect();

    trains.sort_by(|a, b| compare_distance(a.distance, b.distance));
    trains.first().copied().ok_or(JourneyError::NoStationFound)
}

fn compare_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// A train and two of its stops, borrowed from the departure board.
#[derive(Debug, Clone, Copy)]
pub struct PickedTrain<'a> {
    pub entry: &'a BoardEntry,
    pub departure: &'a Pass,
    pub arrival: &'a Pass,
}

/// Choose a random train and a random later stop on its route.
///
/// The first pass is where the train leaves the board station; it needs a
/// departure time and a platform. The arrival is drawn uniformly from the
/// remaining passes and needs an arrival time and a station name.
pub fn pick_train<'a, R>(board: &'a [BoardEntry], rng: &mut R) -> Result<PickedTrain<'a>, JourneyError>
where
    R: Rng + ?Sized,
{
    let entry = board.choose(rng).ok_or(JourneyError::NoDepartures)?;

    let (departure, rest) = entry
        .pass_list
        .split_first()
        .ok_or(JourneyError::NoValidTrain)?;

    if departure.departure.is_none() || departure.platform.is_none() {
        return Err(JourneyError::InvalidDeparture);
    }

    let arrival = rest.choose(rng).ok_or(JourneyError::InvalidArrival)?;
    if arrival.arrival.is_none() || arrival.station_name().is_none() {
        return Err(JourneyError::InvalidArrival);
    }

    Ok(PickedTrain {
        entry,
        departure,
        arrival,
    })
}

impl PickedTrain<'_> {
    /// Flatten into a display record, leaving from `station`.
    pub fn to_journey_info(&self, station: &Station) -> JourneyInfo {
        let departure_time = self.departure.departure.as_deref().map(display_time);
        let arrival_time = self.arrival.arrival.as_deref().map(display_time);

        JourneyInfo::from_parts(
            Some(&station.name),
            departure_time.as_deref(),
            self.departure.platform.as_deref(),
            self.arrival.station_name(),
            arrival_time.as_deref(),
            self.arrival.platform.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::transport::PassStation;

    fn station(id: &str, icon: &str, distance: Option<f64>) -> Station {
        Station {
            id: Some(id.to_string()),
            name: format!("Station {id}"),
            icon: Some(icon.to_string()),
            coordinate: None,
            distance,
        }
    }

    fn pass(name: Option<&str>, arrival: Option<&str>, departure: Option<&str>, platform: Option<&str>) -> Pass {
        Pass {
            station: Some(PassStation {
                id: None,
                name: name.map(str::to_string),
            }),
            arrival: arrival.map(str::to_string),
            arrival_timestamp: None,
            departure: departure.map(str::to_string),
            departure_timestamp: None,
            delay: None,
            platform: platform.map(str::to_string),
            capacity1st: None,
            capacity2nd: None,
        }
    }

    fn entry(passes: Vec<Pass>) -> BoardEntry {
        BoardEntry {
            capacity1st: None,
            capacity2nd: None,
            category: Some("IC".to_string()),
            category_code: None,
            name: Some("IC 1".to_string()),
            number: Some("714".to_string()),
            operator: Some("SBB".to_string()),
            to: Some("Zurich".to_string()),
            stop: None,
            pass_list: passes,
        }
    }

    fn bern_departure() -> Pass {
        pass(Some("Bern"), None, Some("2024-05-01T10:00:00+0200"), Some("3"))
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn train_beats_closer_bus() {
        let stations = vec![
            station("bus", "bus", Some(50.0)),
            station("train", "train", Some(120.0)),
        ];
        assert_eq!(select_station(&stations).unwrap().id.as_deref(), Some("train"));
    }

    #[test]
    fn closest_train_wins_regardless_of_order() {
        let stations = vec![
            station("far", "train", Some(900.0)),
            station("unknown", "train", None),
            station("near", "train", Some(300.0)),
        ];
        assert_eq!(select_station(&stations).unwrap().id.as_deref(), Some("near"));
    }

    #[test]
    fn no_train_station_is_an_error() {
        assert!(matches!(select_station(&[]), Err(JourneyError::NoStationFound)));

        let stations = vec![station("bus", "bus", Some(50.0))];
        assert!(matches!(
            select_station(&stations),
            Err(JourneyError::NoStationFound)
        ));
    }

    #[test]
    fn nearest_train_is_chosen_even_without_id() {
        let mut no_id = station("x", "train", Some(10.0));
        no_id.id = None;
        no_id.name = "Bern Bahnhof".to_string();
        let stations = vec![station("far", "train", Some(800.0)), no_id];

        let chosen = select_station(&stations).unwrap();
        assert!(chosen.id.is_none());
        assert_eq!(chosen.name, "Bern Bahnhof");
    }

    #[test]
    fn empty_board_has_no_departures() {
        assert!(matches!(pick_train(&[], &mut rng()), Err(JourneyError::NoDepartures)));
    }

    #[test]
    fn empty_pass_list_is_not_a_valid_train() {
        let board = vec![entry(Vec::new())];
        assert!(matches!(
            pick_train(&board, &mut rng()),
            Err(JourneyError::NoValidTrain)
        ));
    }

    #[test]
    fn departure_needs_time_and_platform() {
        let arrival = pass(Some("Zurich"), Some("2024-05-01T11:00:00+0200"), None, None);

        let no_platform = pass(Some("Bern"), None, Some("2024-05-01T10:00:00+0200"), None);
        let board = vec![entry(vec![no_platform, arrival.clone()])];
        assert!(matches!(
            pick_train(&board, &mut rng()),
            Err(JourneyError::InvalidDeparture)
        ));

        let no_time = pass(Some("Bern"), None, None, Some("3"));
        let board = vec![entry(vec![no_time, arrival])];
        assert!(matches!(
            pick_train(&board, &mut rng()),
            Err(JourneyError::InvalidDeparture)
        ));
    }

    #[test]
    fn single_pass_has_no_destination() {
        let board = vec![entry(vec![bern_departure()])];
        assert!(matches!(
            pick_train(&board, &mut rng()),
            Err(JourneyError::InvalidArrival)
        ));
    }

    #[test]
    fn arrival_needs_time_and_name() {
        let board = vec![entry(vec![
            bern_departure(),
            pass(None, Some("2024-05-01T11:00:00+0200"), None, None),
        ])];
        assert!(matches!(
            pick_train(&board, &mut rng()),
            Err(JourneyError::InvalidArrival)
        ));

        let board = vec![entry(vec![
            bern_departure(),
            pass(Some("Zurich"), None, None, None),
        ])];
        assert!(matches!(
            pick_train(&board, &mut rng()),
            Err(JourneyError::InvalidArrival)
        ));

        let mut unnamed = pass(None, Some("2024-05-01T11:00:00+0200"), None, None);
        unnamed.station = None;
        let board = vec![entry(vec![bern_departure(), unnamed])];
        assert!(matches!(
            pick_train(&board, &mut rng()),
            Err(JourneyError::InvalidArrival)
        ));
    }

    #[test]
    fn journey_info_from_pick() {
        let board = vec![entry(vec![
            bern_departure(),
            pass(Some("Zurich"), Some("2024-05-01T11:00:00+0200"), None, None),
        ])];
        let picked = pick_train(&board, &mut rng()).unwrap();
        let origin = Station {
            name: "Bern".to_string(),
            ..station("8507000", "train", Some(120.0))
        };

        let info = picked.to_journey_info(&origin);
        assert_eq!(
            info,
            JourneyInfo::from_parts(
                Some("Bern"),
                Some("10:00"),
                Some("3"),
                Some("Zurich"),
                Some("11:00"),
                None,
            )
        );
    }

    // ========== properties ==========

    fn station_strategy() -> impl Strategy<Value = Station> {
        (
            prop::option::of(0u32..1000),
            prop_oneof![Just("train"), Just("bus"), Just("tram")],
            prop::option::of(0.0f64..10_000.0),
        )
            .prop_map(|(id, icon, distance)| Station {
                id: id.map(|id| id.to_string()),
                ..station("", icon, distance)
            })
    }

    fn board_strategy() -> impl Strategy<Value = Vec<BoardEntry>> {
        let stop = (0u32..50).prop_map(|n| {
            pass(
                Some(&format!("Stop {n}")),
                Some("2024-05-01T11:00:00+0200"),
                Some("2024-05-01T11:02:00+0200"),
                Some("1"),
            )
        });
        let train = prop::collection::vec(stop, 2..8).prop_map(|mut passes| {
            passes.insert(0, bern_departure());
            entry(passes)
        });
        prop::collection::vec(train, 1..10)
    }

    proptest! {
        #[test]
        fn selected_station_has_minimum_train_distance(
            stations in prop::collection::vec(station_strategy(), 1..20)
        ) {
            let trains: Vec<&Station> = stations.iter().filter(|s| s.is_train()).collect();
            match select_station(&stations) {
                Ok(chosen) => {
                    prop_assert!(chosen.is_train());
                    if let Some(d) = chosen.distance {
                        for other in &trains {
                            if let Some(o) = other.distance {
                                prop_assert!(d <= o);
                            }
                        }
                    } else {
                        prop_assert!(trains.iter().all(|s| s.distance.is_none()));
                    }
                }
                Err(_) => prop_assert!(trains.is_empty()),
            }
        }

        #[test]
        fn picked_train_comes_from_the_board(board in board_strategy(), seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = pick_train(&board, &mut rng).unwrap();

            prop_assert!(board.iter().any(|e| std::ptr::eq(e, picked.entry)));
            prop_assert!(std::ptr::eq(picked.departure, &picked.entry.pass_list[0]));
            prop_assert!(
                picked.entry.pass_list[1..]
                    .iter()
                    .any(|p| std::ptr::eq(p, picked.arrival))
            );
        }
    }
}
