use std::fmt;

use crate::pattern::{write_inner, PropValue, PropertySet};
use crate::traits::{Labeled, ToProps};

/// A node pattern such as `(w1:Person:Wallet {age: 22, name: 'Theo'})`.
///
/// Built by value: every `add_*` call takes the node, extends it and hands
/// it back, so a node is usually assembled in one expression and then
/// rendered.
///
/// ```rust
/// # use artisan_core::pattern::GraphNode;
/// let n = GraphNode::new("a").add_labels(["Person"]).add_property("from", "Sweden");
/// assert_eq!(n.render(), "(a:Person {from: 'Sweden'})");
/// assert_eq!(GraphNode::new("").render(), "()");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphNode {
    name: String,
    labels: Vec<String>,
    props: PropertySet,
}

impl GraphNode {
    /// Create a node bound to `name`. Pass an empty string for an anonymous node.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            labels: Vec::new(),
            props: PropertySet::new(),
        }
    }

    /// Create a node already carrying the label of model type `T`.
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

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn properties(&self) -> &PropertySet {
        &self.props
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GraphNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        write_inner(f, &self.name, &self.labels, None, &self.props)?;
        f.write_str(")")
    }
}
