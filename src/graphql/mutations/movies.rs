use super::prelude::*;

#[derive(Default)]
pub struct MovieMutations;

#[Object]
impl MovieMutations {
    /// Create a movie. The genre id is not checked against the genres
    /// table.
    async fn create_movie(
        &self,
        ctx: &Context<'_>,
        title: String,
        description: Option<String>,
        release_year: Option<i64>,
        genre_id: i64,
    ) -> Result<MoviePayload> {
        let db = ctx.data_unchecked::<Database>();

        let record = db
            .movies()
            .create(CreateMovie {
                title,
                description,
                release_year,
                genre_id,
            })
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        tracing::info!(movie_id = record.id, movie_title = %record.title, "Movie created");

        Ok(MoviePayload {
            movie: Some(movie_record_to_graphql(record)),
        })
    }

    /// Replace all of a movie's fields; omitted optionals clear the stored
    /// value. Returns a null movie when the id does not exist; this is not
    /// an error.
    async fn update_movie(
        &self,
        ctx: &Context<'_>,
        id: i64,
        title: String,
        description: Option<String>,
        release_year: Option<i64>,
        genre_id: i64,
    ) -> Result<MoviePayload> {
        let db = ctx.data_unchecked::<Database>();

        let record = db
            .movies()
            .update(
                id,
                UpdateMovie {
                    title,
                    description,
                    release_year,
                    genre_id,
                },
            )
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        if record.is_some() {
            tracing::info!(movie_id = id, "Movie updated");
        }

        Ok(MoviePayload {
            movie: record.map(movie_record_to_graphql),
        })
    }

    /// Delete a movie. `ok` is false when the id does not exist.
    async fn delete_movie(&self, ctx: &Context<'_>, id: i64) -> Result<DeletePayload> {
        let db = ctx.data_unchecked::<Database>();

        let deleted = db
            .movies()
            .delete(id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        if deleted {
            tracing::info!(movie_id = id, "Movie deleted");
        }

        Ok(DeletePayload { ok: deleted })
    }
}
