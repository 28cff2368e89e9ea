//! Database access layer for albumd
//!
//! Connection setup plus an idempotent schema step invoked once at startup.
//! Schema maintenance is additive only: missing columns are added via
//! ALTER TABLE, nothing is dropped or rewritten.

use crate::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Row, SqlitePool};
use tracing::{info, warn};

pub mod albums;

pub use albums::{find_album, insert_album, list_albums, Album};

/// Expected column for the albums table
struct ColumnDef {
    name: &'static str,
    /// SQL fragment used both in CREATE TABLE and ALTER TABLE ADD COLUMN
    decl: &'static str,
}

/// Single source of truth for the albums table schema
const ALBUM_COLUMNS: &[ColumnDef] = &[
    ColumnDef { name: "id", decl: "TEXT PRIMARY KEY" },
    ColumnDef { name: "title", decl: "TEXT NOT NULL DEFAULT ''" },
    ColumnDef { name: "artist", decl: "TEXT NOT NULL DEFAULT ''" },
    ColumnDef { name: "price", decl: "REAL NOT NULL DEFAULT 0" },
];

/// Connect to the database behind a connection string.
///
/// An in-memory database only exists for the connection that opened it, so
/// the pool is capped at one connection for `:memory:` URLs.
pub async fn connect(database_url: &str) -> Result<SqlitePool> {
    let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Ensure the albums table exists and carries every expected column.
///
/// Idempotent; safe to call on every startup. Runs in two phases:
/// 1. CREATE TABLE IF NOT EXISTS with the full expected schema
/// 2. Introspect the live table and ALTER TABLE ADD COLUMN for anything
///    missing (covers tables created by an older build)
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    let columns_sql = ALBUM_COLUMNS
        .iter()
        .map(|c| format!("{} {}", c.name, c.decl))
        .collect::<Vec<_>>()
        .join(", ");

    sqlx::query(&format!(
        "CREATE TABLE IF NOT EXISTS albums ({})",
        columns_sql
    ))
    .execute(pool)
    .await?;

    sync_album_columns(pool).await?;

    info!("✓ Schema ready: albums table");
    Ok(())
}

/// Add any expected column missing from the live albums table
async fn sync_album_columns(pool: &SqlitePool) -> Result<()> {
    let rows = sqlx::query("PRAGMA table_info(albums)")
        .fetch_all(pool)
        .await?;

    let actual: Vec<String> = rows
        .iter()
        .map(|row| row.get::<String, _>("name"))
        .collect();

    for column in ALBUM_COLUMNS {
        if actual.iter().any(|name| name == column.name) {
            continue;
        }

        // ADD COLUMN cannot introduce a PRIMARY KEY; a pre-existing table
        // missing its key column needs manual attention
        if column.decl.contains("PRIMARY KEY") {
            warn!(
                "albums table is missing key column '{}'; cannot add it automatically",
                column.name
            );
            continue;
        }

        info!("Adding missing column albums.{}", column.name);
        sqlx::query(&format!(
            "ALTER TABLE albums ADD COLUMN {} {}",
            column.name, column.decl
        ))
        .execute(pool)
        .await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_pool() -> SqlitePool {
        connect("sqlite::memory:").await.expect("connect in-memory")
    }

    async fn column_names(pool: &SqlitePool) -> Vec<String> {
        sqlx::query("PRAGMA table_info(albums)")
            .fetch_all(pool)
            .await
            .unwrap()
            .iter()
            .map(|row| row.get::<String, _>("name"))
            .collect()
    }

    #[tokio::test]
    async fn ensure_schema_creates_albums_table() {
        let pool = memory_pool().await;
        ensure_schema(&pool).await.unwrap();

        let names = column_names(&pool).await;
        assert_eq!(names, vec!["id", "title", "artist", "price"]);
    }

    #[tokio::test]
    async fn ensure_schema_is_idempotent() {
        let pool = memory_pool().await;
        ensure_schema(&pool).await.unwrap();
        ensure_schema(&pool).await.unwrap();

        assert_eq!(column_names(&pool).await.len(), 4);
    }

    #[tokio::test]
    async fn ensure_schema_adds_missing_columns_without_touching_data() {
        let pool = memory_pool().await;

        // Table shape from an older build, missing the price column
        sqlx::query("CREATE TABLE albums (id TEXT PRIMARY KEY, title TEXT, artist TEXT)")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO albums (id, title, artist) VALUES ('1', 'Blue Train', 'John Coltrane')")
            .execute(&pool)
            .await
            .unwrap();

        ensure_schema(&pool).await.unwrap();

        let names = column_names(&pool).await;
        assert!(names.contains(&"price".to_string()));

        let (title, price): (String, f64) =
            sqlx::query_as("SELECT title, price FROM albums WHERE id = '1'")
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(title, "Blue Train");
        assert_eq!(price, 0.0);
    }
}
