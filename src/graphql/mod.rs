//! GraphQL API
//!
//! This module provides the GraphQL API using async-graphql. The query and
//! mutation roots are merged from per-domain modules under `queries/` and
//! `mutations/`.
//!
//! This is the single API surface for the Marquee backend.

pub mod helpers;
pub mod mutations;
pub mod pagination;
pub mod queries;
mod schema;
pub mod types;

pub use schema::{MarqueeSchema, MutationRoot, QueryRoot, build_schema};
