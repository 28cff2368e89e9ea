//! albumd library - HTTP service over a single albums table
//!
//! Three JSON endpoints (list, create, fetch by id) backed by SQLite via
//! sqlx, plus a health probe. The router is built from an explicit
//! [`AppState`] so tests can drive it with an in-memory pool.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod config;
pub mod db;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route(
            "/albums",
            get(api::list_albums).post(api::create_album),
        )
        .route("/albums/:id", get(api::get_album_by_id))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
