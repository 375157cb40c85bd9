//! Bridge from finished query text to the `neo4rs` driver.
//!
//! The builder only ever produces text. This module pairs that text with a
//! caller-supplied parameter map and runs it, passing driver errors through
//! as [`ArtisanError::Neo4j`].

use neo4rs::{BoltType as Value, Graph, Query, Row, Txn};
use artisan_core::builder::QueryBuilder;
use artisan_core::error::ArtisanError;
use artisan_core::traits::ToProps;
use crate::stream::RowStream;

/// A runnable query: Cypher text plus bound parameters.
///
/// # Examples
///
/// ```rust,no_run
/// # use artisan::query::CypherQuery;
/// # async fn example(graph: &neo4rs::Graph) -> Result<(), artisan::ArtisanError> {
/// let rows = CypherQuery::new("MATCH (w:Wallet {address: $address}) RETURN w")
///     .param("address", "0xabc")
///     .fetch_all(graph)
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct CypherQuery {
    text: String,
    inner: Query,
}

impl CypherQuery {
    /// Create a new query from Cypher text.
    pub fn new(text: impl Into<String>) -> Self {
        let text: String = text.into();
        let inner = neo4rs::query(&text);
        Self { text, inner }
    }

    /// Bind a named parameter. Accepts any type that converts to `BoltType`.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let k: String = key.into();
        self.inner = self.inner.param(&k, value.into());
        self
    }

    /// Bind every property of `source` as a named parameter.
    ///
    /// ```rust,no_run
    /// # use artisan::query::CypherQuery;
    /// # #[derive(artisan::ToProps)]
    /// # struct NewWallet { address: String, balance: i64 }
    /// let w = NewWallet { address: "0xabc".into(), balance: 10 };
    /// let q = CypherQuery::new("CREATE (w:Wallet {address: $address, balance: $balance})")
    ///     .params_from(&w);
    /// ```
    pub fn params_from<T: ToProps + ?Sized>(mut self, source: &T) -> Self {
        for (k, v) in source.to_props() {
            self.inner = self.inner.param(&k, Value::from(v));
        }
        self
    }

    /// The Cypher text that will be sent to the server.
    pub fn text(&self) -> &str {
        &self.text
    }

    fn trace_run(&self, operation: &'static str) {
        tracing::debug!(operation, query = %self.text, "running cypher query");
    }

    /// Execute against a [`Graph`] and return exactly one row.
    ///
    /// Returns [`ArtisanError::MissingRow`] if the result set is empty.
    pub async fn fetch_one(self, graph: &Graph) -> Result<Row, ArtisanError> {
        self.trace_run("fetch_one");
        let mut stream = graph.execute(self.inner).await?;
        stream.next().await?
            .ok_or_else(|| ArtisanError::missing_row("fetch_one"))
    }

    /// Execute against a [`Graph`] and return zero or one row.
    pub async fn fetch_optional(self, graph: &Graph) -> Result<Option<Row>, ArtisanError> {
        self.trace_run("fetch_optional");
        let mut stream = graph.execute(self.inner).await?;
        Ok(stream.next().await?)
    }

    /// Execute against a [`Graph`] and collect all rows.
    pub async fn fetch_all(self, graph: &Graph) -> Result<Vec<Row>, ArtisanError> {
        self.trace_run("fetch_all");
        let mut stream = graph.execute(self.inner).await?;
        let mut out = Vec::new();
        while let Some(row) = stream.next().await? {
            out.push(row);
        }
        Ok(out)
    }

    /// Execute within a [`Txn`] and return exactly one row.
    pub async fn fetch_one_in(self, txn: &mut Txn) -> Result<Row, ArtisanError> {
        self.trace_run("fetch_one_in");
        let mut stream = txn.execute(self.inner).await?;
        stream.next(txn.handle()).await?
            .ok_or_else(|| ArtisanError::missing_row("fetch_one_in"))
    }

    /// Execute within a [`Txn`] and collect all rows.
    pub async fn fetch_all_in(self, txn: &mut Txn) -> Result<Vec<Row>, ArtisanError> {
        self.trace_run("fetch_all_in");
        let mut stream = txn.execute(self.inner).await?;
        let mut out = Vec::new();
        while let Some(row) = stream.next(txn.handle()).await? {
            out.push(row);
        }
        Ok(out)
    }

    /// Execute against a [`Graph`] and return rows as they arrive.
    ///
    /// Only available for [`Graph`] connections; use
    /// [`fetch_all_in`](Self::fetch_all_in) inside a transaction.
    pub async fn fetch_stream(self, graph: &Graph) -> Result<RowStream, ArtisanError> {
        use futures::TryStreamExt;
        self.trace_run("fetch_stream");
        let detached = graph.execute(self.inner).await?;
        let stream = detached.into_stream().into_stream();
        Ok(RowStream::new(Box::pin(stream)))
    }
}

impl std::fmt::Debug for CypherQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CypherQuery").field("text", &self.text).finish_non_exhaustive()
    }
}

/// Hands the text of a [`QueryBuilder`] to the driver bridge.
pub trait IntoQuery {
    fn into_query(&self) -> CypherQuery;
}

impl IntoQuery for QueryBuilder {
    fn into_query(&self) -> CypherQuery {
        CypherQuery::new(self.execute())
    }
}

impl From<QueryBuilder> for CypherQuery {
    fn from(builder: QueryBuilder) -> Self {
        builder.into_query()
    }
}

/// Convenience constructor, equivalent to [`CypherQuery::new`].
pub fn query(text: impl Into<String>) -> CypherQuery {
    CypherQuery::new(text)
}
