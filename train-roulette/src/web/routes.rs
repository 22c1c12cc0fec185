//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tower_http::services::ServeDir;

use crate::geo::Position;
use crate::journey::{FoundJourney, JourneyError, JourneyHistory};

use super::cookies::{expire_history, history_from_headers, store_history};
use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/journey/random", get(random_journey))
        .route("/journey/validate", post(validate_journey))
        .route("/journey/clear", post(clear_journeys))
        .route("/journey/history", get(journey_history))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// The single page, starting on the intro.
async fn index_page(headers: HeaderMap) -> Result<Html<String>, AppError> {
    let history = history_from_headers(&headers);
    render(IndexTemplate::new(&history)).map(Html)
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

fn render(template: impl Template) -> Result<String, AppError> {
    template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })
}

/// Pick a random journey near the given coordinates.
///
/// HTML clients always get a fragment: the details on success, the error
/// section on failure. JSON clients get an error status on failure.
async fn random_journey(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<RandomJourneyQuery>,
) -> Result<Response, AppError> {
    let result = find_journey(&state, &req).await;

    if let Err(e) = &result {
        if e.is_upstream() {
            tracing::error!(error = %e, "journey lookup failed");
        } else {
            tracing::warn!(error = %e, "no journey available");
        }
    }

    if accepts_html(&headers) {
        let template = match &result {
            Ok(found) => JourneyResultTemplate::loaded(found),
            Err(e) => JourneyResultTemplate::failed(e.to_string()),
        };
        Ok(Html(render(template)?).into_response())
    } else {
        let found = result?;
        Ok(Json(RandomJourneyResponse::from_found(&found)).into_response())
    }
}

async fn find_journey(
    state: &AppState,
    req: &RandomJourneyQuery,
) -> Result<FoundJourney, JourneyError> {
    let position = Position::resolve(req.lat, req.lon, state.default_position)?;
    let mut rng = StdRng::from_entropy();
    state.finder.find(position, &mut rng).await
}

/// Append the displayed journey to the history cookie.
async fn validate_journey(headers: HeaderMap, body: Bytes) -> Result<Response, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: ValidateJourneyRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, body = %String::from_utf8_lossy(&body), "invalid journey JSON");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let mut history = history_from_headers(&headers);
    history.push(req.into_journey_info());
    tracing::info!(entries = history.len(), "journey validated");

    let cookie = store_history(&history).map_err(|e| AppError::Internal {
        message: format!("Cannot store history cookie: {e}"),
    })?;
    history_response(&headers, &history, Some(cookie))
}

/// Empty the history by expiring its cookie.
async fn clear_journeys(headers: HeaderMap) -> Result<Response, AppError> {
    tracing::info!("journey history cleared");
    history_response(&headers, &JourneyHistory::new(), Some(expire_history()))
}

/// The current history.
async fn journey_history(headers: HeaderMap) -> Result<Response, AppError> {
    let history = history_from_headers(&headers);
    history_response(&headers, &history, None)
}

fn history_response(
    headers: &HeaderMap,
    history: &JourneyHistory,
    set_cookie: Option<HeaderValue>,
) -> Result<Response, AppError> {
    let mut response = if accepts_html(headers) {
        Html(render(HistoryTemplate::new(history))?).into_response()
    } else {
        Json(HistoryResponse::from(history)).into_response()
    };

    if let Some(cookie) = set_cookie {
        response.headers_mut().insert(header::SET_COOKIE, cookie);
    }
    Ok(response)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unprocessable { message: String },
    BadGateway { message: String },
    Internal { message: String },
}

impl From<JourneyError> for AppError {
    fn from(e: JourneyError) -> Self {
        if e.is_upstream() {
            AppError::BadGateway {
                message: e.to_string(),
            }
        } else {
            AppError::Unprocessable {
                message: e.to_string(),
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Unprocessable { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            tracing::error!(%status, "{message}");
        } else {
            tracing::debug!(%status, "{message}");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
