//! Identifier case helpers available to the templates.

use convert_case::{Case, Casing};

/// Upper-cases every character.
pub fn to_upper(s: &str) -> String {
    s.to_uppercase()
}

/// Lower-cases every character.
pub fn to_lower(s: &str) -> String {
    s.to_lowercase()
}

/// Lower-cases the first character only.
pub fn lc_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `LightBlue` -> `light_blue`
pub fn snake(s: &str) -> String {
    s.to_case(Case::Snake)
}

/// `light_blue` -> `LightBlue`
pub fn pascal(s: &str) -> String {
    s.to_case(Case::Pascal)
}
