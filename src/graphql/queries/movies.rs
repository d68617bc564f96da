use super::prelude::*;

#[derive(Default)]
pub struct MovieQueries;

#[Object]
impl MovieQueries {
    /// Get all movies with cursor-based pagination
    async fn all_movies(
        &self,
        ctx: &Context<'_>,
        first: Option<i32>,
        after: Option<String>,
    ) -> Result<MovieConnection> {
        let db = ctx.data_unchecked::<Database>();

        let (offset, limit) =
            parse_pagination_args(first, after).map_err(async_graphql::Error::new)?;

        let (records, total) = db
            .movies()
            .list_paginated(offset, limit)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        let movies: Vec<Movie> = records.into_iter().map(movie_record_to_graphql).collect();
        let connection = Connection::from_items(movies, offset, limit, total);

        Ok(MovieConnection::from_connection(connection))
    }

    /// Get a specific movie by id
    async fn movie(&self, ctx: &Context<'_>, id: i64) -> Result<Option<Movie>> {
        let db = ctx.data_unchecked::<Database>();

        let record = db
            .movies()
            .get_by_id(id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(record.map(movie_record_to_graphql))
    }

    /// Get all movies in a genre; empty when the genre has none
    async fn get_movies_by_genre(&self, ctx: &Context<'_>, genre_id: i64) -> Result<Vec<Movie>> {
        let db = ctx.data_unchecked::<Database>();

        let records = db
            .movies()
            .list_by_genre(genre_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(records.into_iter().map(movie_record_to_graphql).collect())
    }
}
