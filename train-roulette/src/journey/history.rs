//! The list of validated journeys.
//!
//! The list lives in a browser cookie. Its value is the JSON array of
//! [`JourneyInfo`] records, base64url-encoded so that quotes, commas and
//! non-ASCII station names survive cookie syntax.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::info::JourneyInfo;

/// Ordered list of validated journeys, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JourneyHistory {
    entries: Vec<JourneyInfo>,
}

impl JourneyHistory {
    /// An empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a stored value.
    ///
    /// Anything that is not a valid encoded list (empty, bad base64, bad
    /// JSON, wrong shape) yields an empty history.
    pub fn decode(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() {
            return Self::new();
        }

        let Ok(bytes) = URL_SAFE_NO_PAD.decode(value) else {
            tracing::debug!("discarding journey history: not base64");
            return Self::new();
        };

        match serde_json::from_slice::<Vec<JourneyInfo>>(&bytes) {
            Ok(entries) => Self { entries },
            Err(e) => {
                tracing::debug!(error = %e, "discarding journey history: not a journey list");
                Self::new()
            }
        }
    }

    /// Encode for storage.
    pub fn encode(&self) -> String {
        // Serializing plain string fields cannot fail
        let json = serde_json::to_vec(&self.entries).unwrap_or_else(|_| b"[]".to_vec());
        URL_SAFE_NO_PAD.encode(json)
    }

    /// Append a journey at the end.
    pub fn push(&mut self, journey: JourneyInfo) {
        self.entries.push(journey);
    }

    /// Remove every journey.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[JourneyInfo] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<JourneyInfo>> for JourneyHistory {
    fn from(entries: Vec<JourneyInfo>) -> Self {
        Self { entries }
    }
}
