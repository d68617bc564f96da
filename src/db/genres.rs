//! Genre database repository

use anyhow::Result;
use sqlx::SqlitePool;

/// Genre record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct GenreRecord {
    pub id: i64,
    pub name: String,
}

pub struct GenreRepository {
    pool: SqlitePool,
}

impl GenreRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List a page of genres along with the total row count
    pub async fn list_paginated(&self, offset: i64, limit: i64) -> Result<(Vec<GenreRecord>, i64)> {
        let records = sqlx::query_as::<_, GenreRecord>(
            r#"
            SELECT id, name
            FROM genres
            ORDER BY id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM genres")
            .fetch_one(&self.pool)
            .await?;

        Ok((records, total))
    }

    /// Get a genre by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Option<GenreRecord>> {
        let record = sqlx::query_as::<_, GenreRecord>(
            r#"
            SELECT id, name
            FROM genres
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Create a new genre
    pub async fn create(&self, name: &str) -> Result<GenreRecord> {
        let record = sqlx::query_as::<_, GenreRecord>(
            r#"
            INSERT INTO genres (name)
            VALUES (?)
            RETURNING id, name
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    /// Replace a genre's fields; returns None when the id does not exist
    pub async fn update(&self, id: i64, name: &str) -> Result<Option<GenreRecord>> {
        let record = sqlx::query_as::<_, GenreRecord>(
            r#"
            UPDATE genres SET
                name = ?
            WHERE id = ?
            RETURNING id, name
            "#,
        )
        .bind(name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Delete a genre
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM genres WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
