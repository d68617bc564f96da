// Helper functions shared across GraphQL query/mutation modules.

use crate::db::{GenreRecord, MovieRecord};
use crate::graphql::types::{Genre, Movie};

/// Convert a GenreRecord from the database to a GraphQL Genre type
pub(crate) fn genre_record_to_graphql(r: GenreRecord) -> Genre {
    Genre {
        id: r.id,
        name: r.name,
    }
}

/// Convert a MovieRecord from the database to a GraphQL Movie type
pub(crate) fn movie_record_to_graphql(r: MovieRecord) -> Movie {
    Movie {
        id: r.id,
        title: r.title,
        description: r.description,
        release_year: r.release_year,
        genre_id: r.genre_id,
    }
}

/// A parsed node handle: entity kind plus row id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeRef {
    Genre(i64),
    Movie(i64),
}

/// Parse a node handle of the form "genre:3" or "movie:7"
pub(crate) fn parse_node_id(id: &str) -> Option<NodeRef> {
    let (kind, raw) = id.split_once(':')?;
    let row_id = raw.parse().ok()?;

    match kind {
        "genre" => Some(NodeRef::Genre(row_id)),
        "movie" => Some(NodeRef::Movie(row_id)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_node_id() {
        assert_eq!(parse_node_id("genre:3"), Some(NodeRef::Genre(3)));
        assert_eq!(parse_node_id("movie:7"), Some(NodeRef::Movie(7)));
    }

    #[test]
    fn test_parse_node_id_rejects_malformed() {
        assert_eq!(parse_node_id("genre"), None);
        assert_eq!(parse_node_id("genre:abc"), None);
        assert_eq!(parse_node_id("actor:1"), None);
        assert_eq!(parse_node_id(""), None);
    }
}
