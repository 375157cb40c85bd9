//! Traits connecting Rust model types to pattern fragments.

use crate::pattern::PropertySet;

/// A model type with a fixed node label or relationship type.
///
/// Automatically implemented by `#[derive(Labeled)]`.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Labeled)]
/// #[artisan(label = "Wallet")]
/// struct Wallet {
///     address: String,
/// }
///
/// assert_eq!(Wallet::LABEL, "Wallet");
/// ```
pub trait Labeled {
    /// The label (e.g. `"Wallet"`) or relationship type (e.g. `"SENT"`).
    const LABEL: &'static str;
}

/// Converts a model into the property map of a pattern fragment.
///
/// Automatically implemented by `#[derive(ToProps)]`. Each field value must
/// convert into [`PropValue`](crate::pattern::PropValue).
///
/// # Example
///
/// ```rust,ignore
/// #[derive(ToProps)]
/// struct Person {
///     name: String,
///     #[artisan(skip)]
///     cached_score: f64,
///     #[artisan(prop = "born")]
///     birth_year: i64,
/// }
///
/// let node = GraphNode::new("p").add_props_from(&person);
/// ```
pub trait ToProps {
    fn to_props(&self) -> PropertySet;
}

impl ToProps for PropertySet {
    fn to_props(&self) -> PropertySet {
        self.clone()
    }
}
