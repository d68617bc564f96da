//! Startup schema creation
//!
//! The table pair is fixed, so this is a static pass of idempotent
//! CREATE TABLE statements rather than entity-driven sync.

use anyhow::Result;
use sqlx::SqlitePool;
use tracing::debug;

/// Create the genres and movies tables if they do not exist.
///
/// `movies.genre_id` declares a foreign key, but the `foreign_keys` pragma
/// stays off: a movie may outlive its genre.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS genres (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS movies (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT,
            release_year INTEGER,
            genre_id INTEGER NOT NULL REFERENCES genres(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    debug!("Database schema ensured");

    Ok(())
}
