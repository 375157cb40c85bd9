//! Pattern rendering: nodes `(a:Person {name: 'Ann'})`, relationships
//! `-[r:KNOWS]->` and inline relationship patterns built from both.

mod edge;
mod node;
mod props;

pub use edge::{Direction, GraphEdge, Hops};
pub use node::GraphNode;
pub use props::{PropValue, PropertySet};

use std::fmt;

/// Writes `<name><:label1:label2><hops>< {props}>`, the part shared by
/// the bracketed forms of nodes and edges.
fn write_inner(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    labels: &[String],
    hops: Option<&Hops>,
    props: &PropertySet,
) -> fmt::Result {
    f.write_str(name)?;
    if !labels.is_empty() {
        write!(f, ":{}", labels.join(":"))?;
    }
    if let Some(hops) = hops {
        write!(f, "{hops}")?;
    }
    if let Some(block) = props.render_block() {
        write!(f, " {block}")?;
    }
    Ok(())
}
