//! HTTP API handlers

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

pub mod albums;
pub mod health;

pub use albums::{create_album, get_album_by_id, list_albums};
pub use health::health_routes;

/// Serialize a value as indented JSON with the given status.
///
/// Album payloads are pretty-printed, matching the service's original wire
/// format; axum's `Json` would emit compact JSON.
pub(crate) fn pretty_json<T: Serialize>(status: StatusCode, value: &T) -> Response {
    match serde_json::to_vec_pretty(value) {
        Ok(body) => (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
