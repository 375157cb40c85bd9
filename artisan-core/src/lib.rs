//! Pattern rendering and query assembly for artisan.
//!
//! This crate is not meant to be used directly. Use the [`artisan`] facade
//! crate instead, which re-exports everything you need.

pub mod builder;
pub mod error;
pub mod pattern;
pub mod traits;
pub mod value;

pub use builder::{alias, assign, Layout, QueryBuilder};
pub use error::ArtisanError;
pub use pattern::{Direction, GraphEdge, GraphNode, Hops, PropValue, PropertySet};
pub use traits::{Labeled, ToProps};
