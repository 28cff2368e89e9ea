//! Album model and queries

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// A record album. `id` is caller-supplied and unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Album {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

/// Return every stored album in storage order (unspecified, not stable)
pub async fn list_albums(pool: &SqlitePool) -> Result<Vec<Album>> {
    let albums = sqlx::query_as::<_, Album>("SELECT id, title, artist, price FROM albums")
        .fetch_all(pool)
        .await?;

    Ok(albums)
}

/// Persist a new album.
///
/// A primary-key collision surfaces as [`Error::Conflict`] rather than a
/// generic database error, so handlers can map it to a distinct status.
pub async fn insert_album(pool: &SqlitePool, album: &Album) -> Result<Album> {
    let result = sqlx::query("INSERT INTO albums (id, title, artist, price) VALUES (?, ?, ?, ?)")
        .bind(&album.id)
        .bind(&album.title)
        .bind(&album.artist)
        .bind(album.price)
        .execute(pool)
        .await;

    match result {
        Ok(_) => Ok(album.clone()),
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            Err(Error::Conflict(album.id.clone()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Look up one album by id; `None` means not found
pub async fn find_album(pool: &SqlitePool, id: &str) -> Result<Option<Album>> {
    let album =
        sqlx::query_as::<_, Album>("SELECT id, title, artist, price FROM albums WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;

    Ok(album)
}
