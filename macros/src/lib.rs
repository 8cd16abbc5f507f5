//! Procedural macros for the data-object crate
//!
//! This crate provides the `DataObject` derive, which turns a newtype around
//! `data_object::Record` into a declared record type.

use proc_macro::TokenStream;

// Import modules
mod data_object_impl;
mod utils;

// Tests
#[cfg(test)]
mod tests;

/// Derive macro for declared data object types
///
/// Generates the static schema, the `DataObject` implementation, `Deref` to
/// `Record`, and a typed getter plus `has_*` check for every declared name.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(DataObject)]
/// #[data_object(name = "Order")]
/// #[data_object(field(name = "customer", ty = "Customer"))]
/// #[data_object(list(name = "items", ty = "LineItem"))]
/// #[data_object(list(name = "tags"))]
/// #[data_object(init(field = "total"))]
/// #[data_object(accessor = "status")]
/// struct Order(Record);
///
/// impl Order {
///     fn init_total(&mut self) {
///         // runs after every field is hydrated, when the input has `total`
///     }
/// }
/// ```
///
/// `field` declares a nested object hydrated into `ty`; `list` declares a
/// list whose elements are hydrated into `ty`, or kept as they are when `ty`
/// is omitted; `init` binds a method (default `init_<field>`) run after
/// hydration when the input contains the field.
#[proc_macro_derive(DataObject, attributes(data_object))]
pub fn derive_data_object(input: TokenStream) -> TokenStream {
    data_object_impl::process_derive_data_object(input)
}
