//! Movie database repository

use anyhow::Result;
use sqlx::SqlitePool;

/// Movie record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MovieRecord {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i64>,
    pub genre_id: i64,
}

/// Input for creating a movie
#[derive(Debug)]
pub struct CreateMovie {
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i64>,
    pub genre_id: i64,
}

/// Input for updating a movie.
///
/// Updates replace every mutable column: an absent optional clears the
/// stored value instead of keeping it.
#[derive(Debug)]
pub struct UpdateMovie {
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i64>,
    pub genre_id: i64,
}

pub struct MovieRepository {
    pool: SqlitePool,
}

impl MovieRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List a page of movies along with the total row count
    pub async fn list_paginated(&self, offset: i64, limit: i64) -> Result<(Vec<MovieRecord>, i64)> {
        let records = sqlx::query_as::<_, MovieRecord>(
            r#"
            SELECT id, title, description, release_year, genre_id
            FROM movies
            ORDER BY id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies")
            .fetch_one(&self.pool)
            .await?;

        Ok((records, total))
    }

    /// List all movies in a genre
    pub async fn list_by_genre(&self, genre_id: i64) -> Result<Vec<MovieRecord>> {
        let records = sqlx::query_as::<_, MovieRecord>(
            r#"
            SELECT id, title, description, release_year, genre_id
            FROM movies
            WHERE genre_id = ?
            ORDER BY id
            "#,
        )
        .bind(genre_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Get a movie by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Option<MovieRecord>> {
        let record = sqlx::query_as::<_, MovieRecord>(
            r#"
            SELECT id, title, description, release_year, genre_id
            FROM movies
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Create a new movie
    pub async fn create(&self, input: CreateMovie) -> Result<MovieRecord> {
        let record = sqlx::query_as::<_, MovieRecord>(
            r#"
            INSERT INTO movies (title, description, release_year, genre_id)
            VALUES (?, ?, ?, ?)
            RETURNING id, title, description, release_year, genre_id
            "#,
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.release_year)
        .bind(input.genre_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    /// Replace a movie's fields; returns None when the id does not exist
    pub async fn update(&self, id: i64, input: UpdateMovie) -> Result<Option<MovieRecord>> {
        let record = sqlx::query_as::<_, MovieRecord>(
            r#"
            UPDATE movies SET
                title = ?,
                description = ?,
                release_year = ?,
                genre_id = ?
            WHERE id = ?
            RETURNING id, title, description, release_year, genre_id
            "#,
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.release_year)
        .bind(input.genre_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Delete a movie
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM movies WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
