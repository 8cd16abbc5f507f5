//! Utility functions for procedural macros
//!
//! Name conversion and identifier checks used when generating accessors.

use syn::Ident;

/// Convert `myField` or `my_field` to `my_field`
///
/// Words start before every ASCII uppercase letter, matching the runtime
/// name reconciliation of `data_object::Record`.
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Build a method identifier from `name`, spanned at `owner`
pub fn method_ident(name: &str, owner: &Ident) -> darling::Result<Ident> {
    let snake = to_snake_case(name);
    match syn::parse_str::<Ident>(&snake) {
        Ok(_) => Ok(Ident::new(&snake, owner.span())),
        Err(_) => Err(darling::Error::custom(format!(
            "`{name}` cannot be used as a method name; rename it or drop the accessor"
        ))
        .with_span(owner)),
    }
}

/// The `has_*` identifier for a declared field name
pub fn has_ident(name: &str, owner: &Ident) -> darling::Result<Ident> {
    method_ident(&format!("has_{}", to_snake_case(name)), owner)
}

/// Default init hook method for a field: `init_<snake_name>`
pub fn init_method_ident(field: &str, owner: &Ident) -> darling::Result<Ident> {
    method_ident(&format!("init_{}", to_snake_case(field)), owner)
}
