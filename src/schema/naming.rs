//! Field name reconciliation between camelCase and snake_case.
//!
//! Names are split into words before every ASCII uppercase letter and at
//! every underscore. Digits never start a word, so `line1` and `addressLine1`
//! keep their digits attached (`address_line1`).

/// Split a name into words, dropping underscores.
///
/// A boundary at the very start yields an empty first word, so
/// `"MyField"` splits into `["", "My", "Field"]`.
pub fn split_words(name: &str) -> Vec<String> {
    let mut words = vec![String::new()];
    for c in name.chars() {
        if c.is_ascii_uppercase() || c == '_' {
            words.push(String::new());
        }
        if c != '_' {
            if let Some(word) = words.last_mut() {
                word.push(c);
            }
        }
    }
    words
}

/// Convert `my_field` (or `myField`) to `myField`.
///
/// The first word keeps its case; later words get an uppercase first letter.
pub fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (i, word) in split_words(name).iter().enumerate() {
        if i == 0 {
            out.push_str(word);
        } else {
            out.push_str(&ucfirst(word));
        }
    }
    out
}

/// Convert `myField` (or `my_field`) to `my_field`.
pub fn to_snake_case(name: &str) -> String {
    split_words(name).join("_").to_ascii_lowercase()
}

/// Uppercase the first ASCII letter
pub fn ucfirst(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Lowercase the first ASCII letter
pub fn lcfirst(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Spellings a requested accessor name is looked up under, in preference order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCandidates {
    /// The requested name with a lowercase first letter
    pub normalized: String,
    /// lowerCamelCase spelling
    pub camel: String,
    /// snake_case spelling
    pub snake: String,
}

impl NameCandidates {
    /// Build all spellings for `name`
    pub fn new(name: &str) -> Self {
        let normalized = lcfirst(name);
        Self {
            camel: to_camel_case(&normalized),
            snake: to_snake_case(&normalized),
            normalized,
        }
    }
}

/// The canonical name an input key is matched against init hooks with.
///
/// `total_price`, `totalPrice` and `TotalPrice` all map to `TotalPrice`.
pub fn hook_name(key: &str) -> String {
    ucfirst(&to_camel_case(key))
}
