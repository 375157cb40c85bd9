//! Clause-by-clause Cypher text assembly.
//!
//! [`QueryBuilder`] is an append-only accumulator. Every clause method
//! borrows the current builder and returns a new one with the clause
//! appended, so any intermediate state can be kept and extended into
//! independent queries. Clause bodies are opaque text: nothing is parsed,
//! validated, reordered or deduplicated.
//!
//! ```rust
//! use artisan_core::builder::QueryBuilder;
//! use artisan_core::pattern::GraphNode;
//!
//! let query = QueryBuilder::new()
//!     .match_([GraphNode::new("a").add_label("Person").render()])
//!     .where_("a.from = \"Sweden\"")
//!     .return_(["a"])
//!     .execute();
//!
//! assert_eq!(
//!     query,
//!     "\n\t\tMATCH \n\t\t\t(a:Person)\n\t\tWHERE \n\t\t\ta.from = \"Sweden\"\n\t\tRETURN \n\t\t\ta",
//! );
//! ```

use crate::error::ArtisanError;

/// Indentation used when laying out clauses.
///
/// Each clause is written as `\n<clause_indent>KEYWORD \n<body_indent><body>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub clause_indent: String,
    pub body_indent: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            clause_indent: "\t\t".to_string(),
            body_indent: "\t\t\t".to_string(),
        }
    }
}

impl Layout {
    /// No indentation at all; clauses and bodies start at column zero.
    pub fn flat() -> Self {
        Self {
            clause_indent: String::new(),
            body_indent: String::new(),
        }
    }
}

/// Immutable Cypher query accumulator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryBuilder {
    query: String,
    clauses: usize,
    layout: Layout,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an empty builder that lays clauses out with `layout`.
    pub fn with_layout(layout: Layout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    fn append(&self, keyword: &str, body: &str) -> Self {
        let mut query = String::with_capacity(self.query.len() + keyword.len() + body.len() + 16);
        query.push_str(&self.query);
        query.push('\n');
        query.push_str(&self.layout.clause_indent);
        query.push_str(keyword);
        query.push_str(" \n");
        query.push_str(&self.layout.body_indent);
        query.push_str(body);
        Self {
            query,
            clauses: self.clauses + 1,
            layout: self.layout.clone(),
        }
    }

    fn pattern_list<I>(&self, patterns: I) -> String
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let separator = format!(",\n{}", self.layout.body_indent);
        join(patterns, &separator)
    }

    /// `MATCH` block; patterns go one per line, comma separated, in order.
    ///
    /// Patterns may be rendered fragments or raw text such as
    /// `shortestPath((a)-[*]-(b))`.
    pub fn match_<I>(&self, patterns: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.append("MATCH", &self.pattern_list(patterns))
    }

    /// `OPTIONAL MATCH` block, laid out like [`match_`](Self::match_).
    pub fn optional_match<I>(&self, patterns: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.append("OPTIONAL MATCH", &self.pattern_list(patterns))
    }

    pub fn where_(&self, expr: impl AsRef<str>) -> Self {
        self.append("WHERE", expr.as_ref())
    }

    /// `WITH` block; projections joined with `, `.
    pub fn with<I>(&self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.append("WITH", &join(items, ", "))
    }

    /// `RETURN` block; projections joined with `, `.
    pub fn return_<I>(&self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.append("RETURN", &join(items, ", "))
    }

    pub fn order_by(&self, expr: impl AsRef<str>) -> Self {
        self.append("ORDER BY", expr.as_ref())
    }

    pub fn order_by_desc(&self, expr: impl AsRef<str>) -> Self {
        self.append("ORDER BY", &format!("{} DESC", expr.as_ref()))
    }

    pub fn skip(&self, n: u64) -> Self {
        self.append("SKIP", &n.to_string())
    }

    pub fn limit(&self, n: u64) -> Self {
        self.append("LIMIT", &n.to_string())
    }

    /// Number of clauses appended so far.
    pub fn clause_count(&self) -> usize {
        self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses == 0
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The accumulated query text. Reading it does not consume or change
    /// the builder.
    pub fn execute(&self) -> String {
        tracing::trace!(clauses = self.clauses, len = self.query.len(), "assembled cypher query");
        self.query.clone()
    }

    /// Fallible form of [`execute`](Self::execute) for callers written
    /// against a `Result` interface. There is no validation step, so this
    /// always returns `Ok`.
    pub fn try_execute(&self) -> Result<String, ArtisanError> {
        Ok(self.execute())
    }
}

fn join<I>(items: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(item.as_ref());
    }
    out
}

/// `"<expression> AS <name>"`.
///
/// ```rust
/// # use artisan_core::builder::alias;
/// assert_eq!(alias("w2.address", "recipient"), "w2.address AS recipient");
/// ```
pub fn alias(expression: impl AsRef<str>, name: impl AsRef<str>) -> String {
    format!("{} AS {}", expression.as_ref(), name.as_ref())
}

/// `"<name> = <pattern>"`, binding a path variable to a pattern.
///
/// ```rust
/// # use artisan_core::builder::assign;
/// assert_eq!(assign("p", "(a)-[*]-(b)"), "p = (a)-[*]-(b)");
/// ```
pub fn assign(name: impl AsRef<str>, pattern: impl AsRef<str>) -> String {
    format!("{} = {}", name.as_ref(), pattern.as_ref())
}
