use super::prelude::*;

#[derive(Default)]
pub struct GenreQueries;

#[Object]
impl GenreQueries {
    /// Get all genres with cursor-based pagination
    async fn all_genres(
        &self,
        ctx: &Context<'_>,
        first: Option<i32>,
        after: Option<String>,
    ) -> Result<GenreConnection> {
        let db = ctx.data_unchecked::<Database>();

        let (offset, limit) =
            parse_pagination_args(first, after).map_err(async_graphql::Error::new)?;

        let (records, total) = db
            .genres()
            .list_paginated(offset, limit)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        let genres: Vec<Genre> = records.into_iter().map(genre_record_to_graphql).collect();
        let connection = Connection::from_items(genres, offset, limit, total);

        Ok(GenreConnection::from_connection(connection))
    }

    /// Get a specific genre by id
    async fn genre(&self, ctx: &Context<'_>, id: i64) -> Result<Option<Genre>> {
        let db = ctx.data_unchecked::<Database>();

        let record = db
            .genres()
            .get_by_id(id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(record.map(genre_record_to_graphql))
    }

    /// Get the genre of a movie as a list: one element, or empty when the
    /// movie does not exist
    async fn get_genres_by_movie(&self, ctx: &Context<'_>, movie_id: i64) -> Result<Vec<Genre>> {
        let db = ctx.data_unchecked::<Database>();

        let movie = db
            .movies()
            .get_by_id(movie_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        let Some(movie) = movie else {
            return Ok(Vec::new());
        };

        let genre = db
            .genres()
            .get_by_id(movie.genre_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(genre.into_iter().map(genre_record_to_graphql).collect())
    }
}
