#![doc = r#"
A small fluent toolkit for composing Cypher query text.

`artisan` renders node and relationship patterns such as
`(w1:Person:Wallet {age: 22, name: 'Theo Gauchoux'})` and
`-[tx:SENT]->`, and assembles them clause by clause into a query string.
Nothing is parsed or validated: patterns and clause bodies are plain text,
and the finished query is handed to [`neo4rs`] 0.8 as-is.

# Quick start

## Render patterns

```rust
use artisan::prelude::*;

let a = node("a").add_labels(["Person"]);
assert_eq!(a.render(), "(a:Person)");

let w1 = node("w1")
    .add_labels(["Person", "Wallet"])
    .add_properties([("name", PropValue::from("Theo Gauchoux")), ("age", PropValue::from(22))]);
assert_eq!(w1.render(), "(w1:Person:Wallet {age: 22, name: 'Theo Gauchoux'})");

let sent = edge("tx").add_label("SENT").set_direction(Direction::Outgoing);
assert_eq!(sent.relationship(&node("a"), &node("b")), "(a)-[tx:SENT]->(b)");
```

Properties always render in ascending key order.

## Build a query

```rust
use artisan::prelude::*;

let base = query_builder()
    .match_([node("a").add_label("Person").render()])
    .where_("a.from = \"Sweden\"");

// Every clause returns a new builder; `base` is still usable.
let names = base.return_([alias("a.name", "name")]).order_by("name").execute();
let count = base.return_(["count(a)"]).execute();

assert!(names.contains("ORDER BY"));
assert!(!count.contains("ORDER BY"));
```

The default layout reproduces the tab-indented form:

```text
		MATCH 
			(a:Person)
		WHERE 
			a.from = "Sweden"
		RETURN 
			a
```

Use [`QueryBuilder::with_layout`] with [`Layout::flat`] to drop the
indentation.

## Derive labels and properties

```rust
use artisan::prelude::*;

#[derive(Labeled, ToProps)]
#[artisan(label = "Wallet")]
struct Wallet {
    address: String,
    #[artisan(skip)]
    cached_balance: i64,
}

let w = Wallet { address: "0xabc".into(), cached_balance: 0 };
let n = GraphNode::labeled::<Wallet>("w").add_props_from(&w);
assert_eq!(n.render(), "(w:Wallet {address: '0xabc'})");
```

## Execute queries

```rust,no_run
use artisan::prelude::*;

# async fn example(graph: &neo4rs::Graph) -> Result<(), ArtisanError> {
let rows = query_builder()
    .match_(["(w:Wallet)"])
    .where_("w.address = $address")
    .return_(["w"])
    .limit(20)
    .into_query()
    .param("address", "0xabc")
    .fetch_all(graph)
    .await?;
# Ok(())
# }
```

`$param` placeholders are bound by the driver from the parameters passed
to [`CypherQuery`](query::CypherQuery). The builder itself never binds
or rewrites them.

# Error handling

Rendering and assembly never fail. Driver errors surface as
[`ArtisanError::Neo4j`]; [`QueryBuilder::try_execute`] exists for callers
that expect a `Result` and always returns `Ok`.

[`neo4rs`]: https://docs.rs/neo4rs
"#]

pub mod prelude;
pub mod query;
pub mod stream;

pub use artisan_core as core;
pub use artisan_core::traits::{Labeled, ToProps};
pub use artisan_macros::{Labeled, ToProps};

pub use artisan_core::builder::{alias, assign, Layout, QueryBuilder};
pub use artisan_core::pattern::{Direction, GraphEdge, GraphNode, Hops, PropValue, PropertySet};
pub use artisan_core::ArtisanError;

/// New node pattern `()`. Pass an empty string for an anonymous node.
pub fn node(name: impl Into<String>) -> GraphNode {
    GraphNode::new(name)
}

/// New relationship pattern `-[]-`. Pass an empty string for an anonymous
/// relationship.
pub fn edge(name: impl Into<String>) -> GraphEdge {
    GraphEdge::new(name)
}

/// New empty query builder with the default layout.
pub fn query_builder() -> QueryBuilder {
    QueryBuilder::new()
}
