pub mod genres;
pub mod movies;

pub use genres::GenreMutations;
pub use movies::MovieMutations;

pub(crate) mod prelude {
    pub(crate) use async_graphql::{Context, Object, Result};

    pub(crate) use crate::db::{CreateMovie, Database, UpdateMovie};
    pub(crate) use crate::graphql::helpers::*;
    pub(crate) use crate::graphql::types::*;
}
