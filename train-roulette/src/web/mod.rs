//! Web layer for the train roulette.
//!
//! Serves the single page, the journey fragments it loads, and the
//! cookie-backed journey history.

mod cookies;
mod dto;
mod panel;
mod routes;
mod state;
pub mod templates;

pub use cookies::{HISTORY_COOKIE, HISTORY_MAX_AGE_SECS, history_from_headers};
pub use dto::*;
pub use panel::{Panel, UiEvent, Visibility};
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
