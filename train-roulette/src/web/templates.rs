//! Askama templates for the web frontend.

use askama::Template;

use crate::journey::{FoundJourney, JourneyHistory, JourneyInfo};

use super::panel::{Panel, UiEvent, Visibility};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// The single page: intro, game area and history.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub vis: Visibility,
    /// Panel shown on first load
    pub current: &'static str,
    /// Panel while a lookup is in flight; results only apply there
    pub loading: &'static str,
    /// Regions to show when "start" is pressed
    pub on_start: String,
    /// Regions to show when "another train" is pressed
    pub on_reload: String,
    /// Regions to show when "back" is pressed
    pub on_back: String,
    /// Regions to show when the request itself fails
    pub on_failed: String,
    pub entries: Vec<String>,
}

impl IndexTemplate {
    pub fn new(history: &JourneyHistory) -> Self {
        let panel = Panel::INITIAL;
        Self {
            vis: panel.visibility(),
            current: panel.as_str(),
            loading: panel.on(UiEvent::Start).as_str(),
            on_start: panel.on(UiEvent::Start).visibility().visible_names(),
            on_reload: Panel::Details
                .on(UiEvent::Reload)
                .visibility()
                .visible_names(),
            on_back: Panel::Details.on(UiEvent::Back).visibility().visible_names(),
            on_failed: Panel::Loading
                .on(UiEvent::Failed)
                .visibility()
                .visible_names(),
            entries: history_lines(history),
        }
    }
}

// ============================================================================
// Fragment Templates (fetch responses, no base.html)
// ============================================================================

/// Outcome of a journey lookup: the details or the error section.
#[derive(Template)]
#[template(path = "journey_result.html")]
pub struct JourneyResultTemplate {
    pub vis: Visibility,
    /// Panel the page moves to when this fragment is applied
    pub panel: &'static str,
    pub visible: String,
    pub journey: Option<JourneyView>,
    pub error: Option<String>,
}

impl JourneyResultTemplate {
    pub fn loaded(found: &FoundJourney) -> Self {
        let panel = Panel::Loading.on(UiEvent::Loaded);
        let vis = panel.visibility();
        Self {
            vis,
            panel: panel.as_str(),
            visible: vis.visible_names(),
            journey: Some(JourneyView::from_found(found)),
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        let panel = Panel::Loading.on(UiEvent::Failed);
        let vis = panel.visibility();
        Self {
            vis,
            panel: panel.as_str(),
            visible: vis.visible_names(),
            journey: None,
            error: Some(message.into()),
        }
    }
}

/// The validated journeys list.
#[derive(Template)]
#[template(path = "history.html")]
pub struct HistoryTemplate {
    pub entries: Vec<String>,
}

impl HistoryTemplate {
    pub fn new(history: &JourneyHistory) -> Self {
        Self {
            entries: history_lines(history),
        }
    }
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Journey view model for templates.
#[derive(Debug, Clone)]
pub struct JourneyView {
    pub info: JourneyInfo,
    /// e.g. "IC 1 714 to Zürich HB"
    pub train: Option<String>,
}

impl JourneyView {
    pub fn from_found(found: &FoundJourney) -> Self {
        let train = match (&found.train_name, &found.train_to) {
            (Some(name), Some(to)) => Some(format!("{name} to {to}")),
            (Some(name), None) => Some(name.clone()),
            (None, Some(to)) => Some(format!("Train to {to}")),
            (None, None) => None,
        };
        Self {
            info: found.journey.clone(),
            train,
        }
    }
}

fn history_lines(history: &JourneyHistory) -> Vec<String> {
    history.entries().iter().map(JourneyInfo::summary).collect()
}
