//! Procedural macros for artisan.
//!
//! This crate is not meant to be used directly. Use the [`artisan`] facade
//! crate which re-exports all macros.

extern crate proc_macro;

use proc_macro::TokenStream;

mod labeled;
mod to_props;

/// Derive [`Labeled`](artisan_core::traits::Labeled) for a type.
///
/// # Attributes
///
/// **Type-level:**
/// - `#[artisan(label = "...")]`: set the node label or relationship type.
///   Defaults to the type name.
///
/// # Example
///
/// ```rust,ignore
/// use artisan::prelude::*;
///
/// #[derive(Labeled)]
/// #[artisan(label = "Wallet")]
/// struct Wallet {
///     address: String,
/// }
///
/// let w = GraphNode::labeled::<Wallet>("w1");
/// assert_eq!(w.render(), "(w1:Wallet)");
/// ```
#[proc_macro_derive(Labeled, attributes(artisan))]
pub fn labeled(input: TokenStream) -> TokenStream {
    labeled::expand(input)
}

/// Derive [`ToProps`](artisan_core::traits::ToProps) for a struct.
///
/// Converts each field into a property via `Into<PropValue>`, so field
/// types must be strings, integers, floats or booleans.
///
/// # Attributes
///
/// **Field-level:**
/// - `#[artisan(skip)]`: exclude the field from the property map.
/// - `#[artisan(prop = "...")]`: override the property name (default: field name).
///
/// `Option<T>` fields are included only when they are `Some`.
///
/// # Example
///
/// ```rust,ignore
/// use artisan::prelude::*;
///
/// #[derive(ToProps)]
/// struct Person {
///     name: String,
///     #[artisan(prop = "born")]
///     birth_year: i64,
///     nickname: Option<String>,
///     #[artisan(skip)]
///     cached_rank: u32,
/// }
/// ```
#[proc_macro_derive(ToProps, attributes(artisan))]
pub fn to_props(input: TokenStream) -> TokenStream {
    to_props::expand(input)
}
