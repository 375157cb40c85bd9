//! Streaming query results.

use std::pin::Pin;
use futures::stream::Stream;
use artisan_core::error::ArtisanError;

/// Rows pulled one at a time from the server.
///
/// Created by [`CypherQuery::fetch_stream`](crate::query::CypherQuery::fetch_stream).
pub struct RowStream {
    inner: Pin<Box<dyn Stream<Item = Result<neo4rs::Row, neo4rs::Error>> + Send>>,
}

impl RowStream {
    pub(crate) fn new(inner: Pin<Box<dyn Stream<Item = Result<neo4rs::Row, neo4rs::Error>> + Send>>) -> Self {
        Self { inner }
    }

    /// Pull the next row. Returns `None` when the stream is exhausted.
    pub async fn next(&mut self) -> Option<Result<neo4rs::Row, ArtisanError>> {
        use futures::StreamExt;
        self.inner.next().await.map(|res| res.map_err(ArtisanError::from))
    }
}
