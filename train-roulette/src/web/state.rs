//! Application state for the web layer.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::geo::Position;
use crate::journey::JourneyFinder;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Looks up stations and draws journeys
    pub finder: Arc<JourneyFinder>,

    /// Used when the browser sends no coordinates
    pub default_position: Option<Position>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(finder: JourneyFinder, config: &AppConfig) -> Self {
        Self {
            finder: Arc::new(finder),
            default_position: config.default_position,
        }
    }
}
