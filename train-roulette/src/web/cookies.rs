//! Reading and writing the journey history cookie.

use axum::http::header::{COOKIE, InvalidHeaderValue};
use axum::http::{HeaderMap, HeaderValue};

use crate::journey::JourneyHistory;

/// Cookie holding the encoded journey history.
pub const HISTORY_COOKIE: &str = "journeyInfo";

/// History cookies live for one day.
pub const HISTORY_MAX_AGE_SECS: u64 = 24 * 60 * 60;

/// Find a cookie value in the request headers.
pub fn read_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// The history stored in the request's cookie, or an empty one.
pub fn history_from_headers(headers: &HeaderMap) -> JourneyHistory {
    read_cookie(headers, HISTORY_COOKIE)
        .map(JourneyHistory::decode)
        .unwrap_or_default()
}

/// `Set-Cookie` value storing `history` for a day.
pub fn store_history(history: &JourneyHistory) -> Result<HeaderValue, InvalidHeaderValue> {
    HeaderValue::from_str(&format!(
        "{HISTORY_COOKIE}={}; Path=/; Max-Age={HISTORY_MAX_AGE_SECS}; SameSite=Lax",
        history.encode()
    ))
}

/// `Set-Cookie` value expiring the history immediately.
pub fn expire_history() -> HeaderValue {
    HeaderValue::from_static("journeyInfo=; Path=/; Max-Age=0; SameSite=Lax")
}
