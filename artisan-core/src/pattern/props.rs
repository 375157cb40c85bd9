//! Property values and property maps rendered inside `{...}` blocks.

use std::collections::BTreeMap;
use std::fmt;

/// A scalar property value.
///
/// Strings render single-quoted, everything else in its literal form.
/// No escaping is performed: the text is emitted exactly as given.
/// Non-finite floats render as Cypher's `Infinity`, `-Infinity` and `NaN`.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::String(s) => write!(f, "'{s}'"),
            PropValue::Integer(i) => write!(f, "{i}"),
            PropValue::Float(x) if x.is_nan() => f.write_str("NaN"),
            PropValue::Float(x) if x.is_infinite() => {
                f.write_str(if *x > 0.0 { "Infinity" } else { "-Infinity" })
            }
            // Debug keeps the fractional part, so `2.0` stays a float in Cypher.
            PropValue::Float(x) => write!(f, "{x:?}"),
            PropValue::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for PropValue {
    fn from(v: &str) -> Self {
        PropValue::String(v.to_owned())
    }
}

impl From<String> for PropValue {
    fn from(v: String) -> Self {
        PropValue::String(v)
    }
}

impl From<&String> for PropValue {
    fn from(v: &String) -> Self {
        PropValue::String(v.clone())
    }
}

impl From<bool> for PropValue {
    fn from(v: bool) -> Self {
        PropValue::Boolean(v)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for PropValue {
                fn from(v: $t) -> Self {
                    PropValue::Integer(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i64, i32, i16, i8, u32, u16, u8);

impl From<f64> for PropValue {
    fn from(v: f64) -> Self {
        PropValue::Float(v)
    }
}

impl From<f32> for PropValue {
    fn from(v: f32) -> Self {
        PropValue::Float(f64::from(v))
    }
}

/// Property map of a node or relationship pattern.
///
/// Keys iterate in ascending order, which makes rendering deterministic:
/// `{age: 22, name: 'Theo'}` regardless of insertion order. Inserting an
/// existing key overwrites its value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertySet {
    entries: BTreeMap<String, PropValue>,
}

impl PropertySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the value for `key`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Option<PropValue> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render the block, or `None` when there is nothing to render.
    pub(crate) fn render_block(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

/// Renders `{key: value, key2: value2}`. An empty set renders as `{}`;
/// node and edge rendering skip the block entirely in that case.
impl fmt::Display for PropertySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str("}")
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for PropertySet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = PropertySet::new();
        set.extend(iter);
        set
    }
}

impl<K: Into<String>, V: Into<PropValue>> Extend<(K, V)> for PropertySet {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for PropertySet {
    type Item = (String, PropValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, PropValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
