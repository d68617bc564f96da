use super::prelude::*;

#[derive(Default)]
pub struct GenreMutations;

#[Object]
impl GenreMutations {
    /// Create a genre
    async fn create_genre(&self, ctx: &Context<'_>, name: String) -> Result<GenrePayload> {
        let db = ctx.data_unchecked::<Database>();

        let record = db
            .genres()
            .create(&name)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        tracing::info!(genre_id = record.id, genre_name = %record.name, "Genre created");

        Ok(GenrePayload {
            genre: Some(genre_record_to_graphql(record)),
        })
    }

    /// Replace a genre's fields. Returns a null genre when the id does not
    /// exist; this is not an error.
    async fn update_genre(
        &self,
        ctx: &Context<'_>,
        id: i64,
        name: String,
    ) -> Result<GenrePayload> {
        let db = ctx.data_unchecked::<Database>();

        let record = db
            .genres()
            .update(id, &name)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        if record.is_some() {
            tracing::info!(genre_id = id, "Genre updated");
        }

        Ok(GenrePayload {
            genre: record.map(genre_record_to_graphql),
        })
    }

    /// Delete a genre. `ok` is false when the id does not exist.
    async fn delete_genre(&self, ctx: &Context<'_>, id: i64) -> Result<DeletePayload> {
        let db = ctx.data_unchecked::<Database>();

        let deleted = db
            .genres()
            .delete(id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        if deleted {
            tracing::info!(genre_id = id, "Genre deleted");
        }

        Ok(DeletePayload { ok: deleted })
    }
}
