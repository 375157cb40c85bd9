//! Convenience re-exports for common artisan usage.
//!
//! ```rust
//! use artisan::prelude::*;
//! ```
//!
//! This imports the top-level constructors, the pattern and builder types,
//! both derive macros with their traits, the error type, and the driver
//! bridge types.

pub use crate::{alias, assign, edge, node, query_builder, Labeled, ToProps};
pub use artisan_core::{
    ArtisanError, Direction, GraphEdge, GraphNode, Hops, Layout, PropValue, PropertySet,
    QueryBuilder,
};
pub use crate::query::{query, CypherQuery, IntoQuery};
pub use crate::stream::RowStream;
