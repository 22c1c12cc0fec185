//! Which part of the page is visible.
//!
//! The page has an intro and a game area. The game area shows exactly one
//! of loading, error or train details. The browser asks the server for
//! nothing here: the visible sets for each transition are rendered into the
//! page and the response fragments, and the script just applies them.

/// The panel currently in front of the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Intro,
    Loading,
    Error,
    Details,
}

/// Something that happened on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// "Start" on the intro.
    Start,
    /// "Another train" in the game area.
    Reload,
    /// "Back" to the intro.
    Back,
    /// A journey arrived.
    Loaded,
    /// The journey lookup failed.
    Failed,
}

impl Panel {
    /// The panel shown when the page loads.
    pub const INITIAL: Panel = Panel::Intro;

    /// Apply an event.
    ///
    /// Results that arrive when nothing is loading (the user went back in
    /// the meantime) leave the panel unchanged.
    pub fn on(self, event: UiEvent) -> Panel {
        match (self, event) {
            (_, UiEvent::Back) => Panel::Intro,
            (_, UiEvent::Start | UiEvent::Reload) => Panel::Loading,
            (Panel::Loading, UiEvent::Loaded) => Panel::Details,
            (Panel::Loading, UiEvent::Failed) => Panel::Error,
            (panel, UiEvent::Loaded | UiEvent::Failed) => panel,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Panel::Intro => "intro",
            Panel::Loading => "loading",
            Panel::Error => "error",
            Panel::Details => "details",
        }
    }

    pub fn visibility(self) -> Visibility {
        Visibility {
            intro: self == Panel::Intro,
            game: self != Panel::Intro,
            loading: self == Panel::Loading,
            error: self == Panel::Error,
            details: self == Panel::Details,
        }
    }
}

/// Visibility of each page region for one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub intro: bool,
    pub game: bool,
    pub loading: bool,
    pub error: bool,
    pub details: bool,
}

impl Visibility {
    /// Space-separated region names that are visible, e.g. `"game details"`.
    ///
    /// Regions carry matching `data-panel` attributes in the markup.
    pub fn visible_names(&self) -> String {
        [
            ("intro", self.intro),
            ("game", self.game),
            ("loading", self.loading),
            ("error", self.error),
            ("details", self.details),
        ]
        .iter()
        .filter(|(_, visible)| *visible)
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(" ")
    }
}
