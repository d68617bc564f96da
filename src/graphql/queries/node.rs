use async_graphql::ID;

use super::prelude::*;

#[derive(Default)]
pub struct NodeQueries;

#[Object]
impl NodeQueries {
    /// Resolve a typed node handle of the form "genre:3" or "movie:7"
    async fn node(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Node>> {
        let db = ctx.data_unchecked::<Database>();

        let node_ref = parse_node_id(&id)
            .ok_or_else(|| async_graphql::Error::new(format!("Invalid node id: {}", id.0)))?;

        match node_ref {
            NodeRef::Genre(genre_id) => {
                let record = db
                    .genres()
                    .get_by_id(genre_id)
                    .await
                    .map_err(|e| async_graphql::Error::new(e.to_string()))?;

                Ok(record.map(|r| Node::Genre(genre_record_to_graphql(r))))
            }
            NodeRef::Movie(movie_id) => {
                let record = db
                    .movies()
                    .get_by_id(movie_id)
                    .await
                    .map_err(|e| async_graphql::Error::new(e.to_string()))?;

                Ok(record.map(|r| Node::Movie(movie_record_to_graphql(r))))
            }
        }
    }
}
