//! HTTP API over a loaded [`GraveDb`].
//!
//! - `GET /api/graves` — FeatureCollection, filtered by `imie`, `nazwisko`,
//!   `data_urodzenia`, `data_smierci` query parameters
//! - `GET /api/graves/{id}` — single feature by position, 404 when out of range

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use graves_core::{Feature, FeatureCollection, FilterCriteria, GraveDb, GraveError, GraveSearch};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

pub const NOT_FOUND_DETAIL: &str = "Grave does not exist";

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<GraveDb>,
}

impl AppState {
    pub fn new(db: Arc<GraveDb>) -> Self {
        Self { db }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/graves", get(list_graves))
        .route("/api/graves/{id}", get(get_grave))
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn list_graves(
    State(state): State<AppState>,
    Query(criteria): Query<FilterCriteria>,
) -> Json<FeatureCollection> {
    let features: FeatureCollection = state.db.search(&criteria).into_iter().collect();
    debug!(?criteria, hits = features.features.len(), "list graves");
    Json(features)
}

pub async fn get_grave(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Feature>, ApiError> {
    let id = parse_grave_id(&raw_id)?;
    let feature = state.db.grave(id)?;
    Ok(Json(feature.clone()))
}

/// Parses `[+-]?[0-9]+` with no upper bound.
///
/// Integers beyond `i64` saturate, so they still reach the store and come
/// back as not found. Anything else is a 400.
pub fn parse_grave_id(raw: &str) -> Result<i64, ApiError> {
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError {
            status: StatusCode::BAD_REQUEST,
            detail: format!("Grave id must be an integer, got {raw:?}"),
        });
    }
    let id = match raw.trim_start_matches('+').parse::<i64>() {
        Ok(id) => id,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    };
    Ok(id)
}

/// Client-facing error body, `{"detail": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl From<GraveError> for ApiError {
    fn from(e: GraveError) -> Self {
        match e {
            GraveError::NotFound { .. } => {
                debug!(error = %e, "grave lookup out of range");
                ApiError {
                    status: StatusCode::NOT_FOUND,
                    detail: NOT_FOUND_DETAIL.to_owned(),
                }
            }
            other => {
                error!(error = %other, "unexpected dataset error while serving");
                ApiError {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    detail: "Internal server error".to_owned(),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { detail: self.detail })).into_response()
    }
}
