//! Random journeys and the history of validated ones.
//!
//! The flow is: nearest train station → its departure board → one random
//! train → one random later stop on that train. The result is flattened
//! into a [`JourneyInfo`], which is also what the history stores.

mod error;
mod finder;
mod history;
mod info;
mod select;

pub use error::JourneyError;
pub use finder::{FoundJourney, JourneyFinder};
pub use history::JourneyHistory;
pub use info::{JourneyInfo, NOT_AVAILABLE, display_time};
pub use select::{PickedTrain, pick_train, select_station};
