//! Error types for artisan.
//!
//! Pattern rendering and query assembly never fail. Everything in here is
//! either raised at the driver boundary or kept for callers that expect a
//! fallible `execute`.

use thiserror::Error;

/// Unified error type for all artisan operations.
#[derive(Error, Debug)]
pub enum ArtisanError {
    /// Generic execution failure reported by [`QueryBuilder::try_execute`].
    ///
    /// Assembly has no validation step, so the builder never produces this
    /// variant itself.
    ///
    /// [`QueryBuilder::try_execute`]: crate::builder::QueryBuilder::try_execute
    #[error("failed to execute query")]
    Execute,

    /// A query that must yield a row yielded none.
    #[error("no row returned by {operation}")]
    MissingRow { operation: String },

    /// A driver value could not be converted into a [`PropValue`](crate::pattern::PropValue).
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    /// Wraps an inner error with additional context.
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<ArtisanError>,
    },

    /// A `neo4rs::Error` from the underlying driver, passed through untouched.
    #[error("neo4j error: {0}")]
    Neo4j(#[from] neo4rs::Error),
}

impl ArtisanError {
    /// Create a [`MissingRow`](ArtisanError::MissingRow) error.
    pub fn missing_row(operation: &str) -> Self {
        ArtisanError::MissingRow {
            operation: operation.to_owned(),
        }
    }

    /// Create a [`TypeMismatch`](ArtisanError::TypeMismatch) error.
    pub fn type_mismatch(expected: &str, got: &str) -> Self {
        ArtisanError::TypeMismatch {
            expected: expected.to_owned(),
            got: got.to_owned(),
        }
    }

    /// Wrap this error with additional context, producing a [`Context`](ArtisanError::Context) variant.
    ///
    /// ```rust
    /// # use artisan_core::ArtisanError;
    /// let err = ArtisanError::type_mismatch("scalar", "List");
    /// let wrapped = err.with_context("property 'tags'");
    /// assert!(wrapped.to_string().starts_with("property 'tags'"));
    /// ```
    pub fn with_context(self, ctx: impl Into<String>) -> Self {
        ArtisanError::Context {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}
