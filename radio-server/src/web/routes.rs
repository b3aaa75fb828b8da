//! HTTP route handlers.

use std::path::Path;

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::Utc;
use tower_http::services::{ServeDir, ServeFile};

use crate::stations::StationError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory. Paths that
/// match neither an API route nor an asset fall back to its `index.html`
/// so client-side routing works on deep links.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    let index = Path::new(static_dir).join("index.html");
    let assets = ServeDir::new(static_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/api/stations", get(stations_json))
        .route("/radio.json", get(stations_json))
        .route("/api/health", get(health))
        .fallback_service(assets)
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Serve the station list JSON, from cache when fresh.
///
/// Also mounted at `/radio.json` for clients of the old URL. Clients may
/// cache the body for as long as we do.
async fn stations_json(State(state): State<AppState>) -> Result<Response, AppError> {
    let payload = state.stations.get().await?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        payload.as_str().to_owned(),
    )
        .into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// The station list could not be loaded from upstream.
    Upstream(StationError),
}

impl From<StationError> for AppError {
    fn from(e: StationError) -> Self {
        AppError::Upstream(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Upstream failures are logged with detail but reported to the
        // client as one generic envelope.
        match self {
            AppError::Upstream(e) => {
                tracing::error!(error = %e, "failed to load radio data");
                let body = Json(ErrorResponse {
                    error: "Failed to load radio data".to_string(),
                });
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
