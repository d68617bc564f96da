//! GraphQL schema definition

use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::db::Database;

use super::mutations::{GenreMutations, MovieMutations};
use super::queries::{GenreQueries, MovieQueries, NodeQueries, SystemQueries};

/// The GraphQL schema type
pub type MarqueeSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Combined query root
#[derive(MergedObject, Default)]
pub struct QueryRoot(GenreQueries, MovieQueries, NodeQueries, SystemQueries);

/// Combined mutation root
#[derive(MergedObject, Default)]
pub struct MutationRoot(GenreMutations, MovieMutations);

/// Build the GraphQL schema with all resolvers
pub fn build_schema(db: Database) -> MarqueeSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(db)
    .finish()
}
