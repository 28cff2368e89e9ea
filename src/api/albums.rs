//! Album endpoints
//!
//! Three routes over the albums table: list all, create one, fetch by id.
//! Each handler translates one request into one storage call; errors map
//! deterministically onto a status code and a JSON `message` body.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::db::{self, Album};
use crate::AppState;

use super::pretty_json;

/// GET /albums
///
/// Responds 200 with a JSON array of every stored album (possibly empty).
pub async fn list_albums(State(state): State<AppState>) -> Result<Response, ApiError> {
    let albums = db::list_albums(&state.db).await?;
    Ok(pretty_json(StatusCode::OK, &albums))
}

/// POST /albums
///
/// Parses the body as a single album object and persists it. A body that
/// fails to parse gets an explicit 400 rather than a dropped connection;
/// a duplicate id gets 409.
pub async fn create_album(
    State(state): State<AppState>,
    payload: Result<Json<Album>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(album) = payload.map_err(|rejection| ApiError::Invalid(rejection.body_text()))?;

    let stored = db::insert_album(&state.db, &album).await?;
    Ok(pretty_json(StatusCode::CREATED, &stored))
}

/// GET /albums/:id
///
/// Responds 200 with the matching album, or 404 when no row matches.
pub async fn get_album_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    match db::find_album(&state.db, &id).await? {
        Some(album) => Ok(pretty_json(StatusCode::OK, &album)),
        None => Err(ApiError::NotFound),
    }
}

/// Album API errors, each mapping to one status code and payload
#[derive(Debug)]
pub enum ApiError {
    /// No album with the requested id
    NotFound,
    /// Insert collided with an existing id
    Conflict(String),
    /// Request body failed to parse as an album
    Invalid(String),
    /// Storage failure; detail is logged, not sent to the client
    Storage(String),
}

impl From<crate::Error> for ApiError {
    fn from(err: crate::Error) -> Self {
        match err {
            crate::Error::Conflict(id) => ApiError::Conflict(id),
            other => ApiError::Storage(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "album not found".to_string()),
            ApiError::Conflict(id) => (
                StatusCode::CONFLICT,
                format!("album {} already exists", id),
            ),
            ApiError::Invalid(detail) => (StatusCode::BAD_REQUEST, detail),
            ApiError::Storage(detail) => {
                error!("Storage failure: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
            }
        };

        pretty_json(status, &json!({ "message": message }))
    }
}
