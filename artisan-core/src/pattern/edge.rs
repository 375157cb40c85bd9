use std::fmt;

use crate::pattern::{write_inner, GraphNode, PropValue, PropertySet};
use crate::traits::{Labeled, ToProps};

/// Traversal direction of a relationship pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `--`
    #[default]
    Plain,
    /// `-->`
    Outgoing,
    /// `<--`
    Incoming,
    /// `<-->`
    Bidirectional,
}

impl Direction {
    /// The bare arrow for this direction, e.g. `-->`.
    pub fn marker(self) -> &'static str {
        match self {
            Direction::Plain => "--",
            Direction::Outgoing => "-->",
            Direction::Incoming => "<--",
            Direction::Bidirectional => "<-->",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// Variable-length marker placed after the relationship types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hops {
    /// `*`
    Any,
    /// `*n`
    Exactly(u32),
    /// `*n..`
    AtLeast(u32),
    /// `*..n`
    AtMost(u32),
    /// `*min..max`
    Between(u32, u32),
}

impl fmt::Display for Hops {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hops::Any => f.write_str("*"),
            Hops::Exactly(n) => write!(f, "*{n}"),
            Hops::AtLeast(n) => write!(f, "*{n}.."),
            Hops::AtMost(n) => write!(f, "*..{n}"),
            Hops::Between(min, max) => write!(f, "*{min}..{max}"),
        }
    }
}

/// A relationship pattern such as `-[tx:SENT {amount: 10}]->`.
///
/// Labels are joined with `:` exactly like node labels. They double as
/// literal template text, so a label like `|*DEPTH*|` is emitted untouched.
///
/// ```rust
/// # use artisan_core::pattern::{Direction, GraphEdge, GraphNode};
/// let tx = GraphEdge::new("tx").set_direction(Direction::Outgoing);
/// assert_eq!(tx.render(), "-[tx]->");
///
/// let rel = GraphEdge::new("").add_label("KNOWS")
///     .relationship(&GraphNode::new("a"), &GraphNode::new("b"));
/// assert_eq!(rel, "(a)-[:KNOWS]-(b)");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphEdge {
    name: String,
    labels: Vec<String>,
    props: PropertySet,
    direction: Direction,
    hops: Option<Hops>,
}

impl GraphEdge {
    /// Create a plain (`--`) edge bound to `name`. Pass an empty string for
    /// an anonymous relationship.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            labels: Vec::new(),
            props: PropertySet::new(),
            direction: Direction::Plain,
            hops: None,
        }
    }

    /// Create an edge already carrying the relationship type of model `T`.
    pub fn labeled<T: Labeled>(name: impl Into<String>) -> Self {
        Self::new(name).add_label(T::LABEL)
    }

    pub fn add_label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    /// Append labels in iteration order. Duplicates are kept.
    pub fn add_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels.extend(labels.into_iter().map(Into::into));
        self
    }

    pub fn add_property(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(key, value);
        self
    }

    /// Insert each `(key, value)` pair, overwriting existing keys.
    pub fn add_properties<I, K, V>(mut self, props: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<PropValue>,
    {
        self.props.extend(props);
        self
    }

    /// Merge the properties of a model, overwriting existing keys.
    pub fn add_props_from<T: ToProps + ?Sized>(mut self, model: &T) -> Self {
        self.props.extend(model.to_props());
        self
    }

    pub fn set_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Mark the relationship as variable length.
    pub fn hops(mut self, hops: Hops) -> Self {
        self.hops = Some(hops);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn properties(&self) -> &PropertySet {
        &self.props
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Inline relationship pattern `left + self + right`, no separators.
    pub fn relationship(&self, left: &GraphNode, right: &GraphNode) -> String {
        format!("{}{}{}", left, self, right)
    }
}

impl fmt::Display for GraphEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if matches!(self.direction, Direction::Incoming | Direction::Bidirectional) {
            f.write_str("<")?;
        }
        f.write_str("-[")?;
        write_inner(f, &self.name, &self.labels, self.hops.as_ref(), &self.props)?;
        f.write_str("]-")?;
        if matches!(self.direction, Direction::Outgoing | Direction::Bidirectional) {
            f.write_str(">")?;
        }
        Ok(())
    }
}
