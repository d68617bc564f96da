//! GraphQL type definitions
//!
//! These types mirror the database records but are decorated with
//! async-graphql attributes and carry the relationship fields.

use async_graphql::{ComplexObject, Context, Interface, Result, SimpleObject};

use crate::db::Database;
use crate::define_connection;

use super::helpers::{genre_record_to_graphql, movie_record_to_graphql};

/// A movie genre
#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex)]
pub struct Genre {
    pub id: i64,
    /// Genre name (not required to be unique)
    pub name: String,
}

#[ComplexObject]
impl Genre {
    /// Movies belonging to this genre
    async fn movies(&self, ctx: &Context<'_>) -> Result<Vec<Movie>> {
        let db = ctx.data_unchecked::<Database>();

        let records = db
            .movies()
            .list_by_genre(self.id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(records.into_iter().map(movie_record_to_graphql).collect())
    }
}

/// A movie in the catalog
#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i64>,
    /// Id of the genre this movie belongs to
    pub genre_id: i64,
}

#[ComplexObject]
impl Movie {
    /// The genre this movie belongs to, null when the reference is dangling
    async fn genre(&self, ctx: &Context<'_>) -> Result<Option<Genre>> {
        let db = ctx.data_unchecked::<Database>();

        let record = db
            .genres()
            .get_by_id(self.genre_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(record.map(genre_record_to_graphql))
    }
}

/// An addressable entity, resolvable through the `node` root field
#[derive(Interface)]
#[graphql(field(name = "id", ty = "&i64"))]
pub enum Node {
    Genre(Genre),
    Movie(Movie),
}

/// Result of a genre create/update mutation
#[derive(Debug, Clone, SimpleObject)]
pub struct GenrePayload {
    /// The affected genre, null when the id did not match a row
    pub genre: Option<Genre>,
}

/// Result of a movie create/update mutation
#[derive(Debug, Clone, SimpleObject)]
pub struct MoviePayload {
    /// The affected movie, null when the id did not match a row
    pub movie: Option<Movie>,
}

/// Result of a delete mutation
#[derive(Debug, Clone, SimpleObject)]
pub struct DeletePayload {
    /// True when a row was deleted, false when the id did not exist
    pub ok: bool,
}

define_connection!(GenreConnection, GenreEdge, Genre);
define_connection!(MovieConnection, MovieEdge, Movie);
