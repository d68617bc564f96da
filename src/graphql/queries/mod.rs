pub mod genres;
pub mod movies;
pub mod node;
pub mod system;

pub use genres::GenreQueries;
pub use movies::MovieQueries;
pub use node::NodeQueries;
pub use system::SystemQueries;

pub(crate) mod prelude {
    pub(crate) use async_graphql::{Context, Object, Result};

    pub(crate) use crate::db::Database;
    pub(crate) use crate::graphql::helpers::*;
    pub(crate) use crate::graphql::pagination::{Connection, parse_pagination_args};
    pub(crate) use crate::graphql::types::*;
}
