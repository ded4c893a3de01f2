//! Declaration naming: property key → candidate type name, plus registry dedup.

use indexmap::IndexMap;

/// Fallback when a key capitalizes to nothing (empty key, unnamed array element).
pub const FALLBACK_NAME: &str = "Item";

/// Singularize then capitalize a property key into a candidate declaration
/// name. First match wins: `ies` → `y`, else strip `es`, else strip a trailing
/// `s` unless the key ends in `ss`.
pub fn suggest(key: &str) -> String {
    let singular = if let Some(stem) = key.strip_suffix("ies") {
        format!("{stem}y")
    } else if let Some(stem) = key.strip_suffix("es") {
        stem.to_string()
    } else if key.ends_with('s') && !key.ends_with("ss") {
        key[..key.len() - 1].to_string()
    } else {
        key.to_string()
    };
    capitalize(&singular)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => FALLBACK_NAME.to_string(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Resolve `candidate` against the registry: free names are returned as-is,
/// taken names get integer suffixes starting at 1 until a free one is found.
pub fn reserve(candidate: &str, registry: &IndexMap<String, String>) -> String {
    if !registry.contains_key(candidate) {
        return candidate.to_string();
    }
    let mut counter = 1usize;
    loop {
        let name = format!("{candidate}{counter}");
        if !registry.contains_key(&name) {
            return name;
        }
        counter += 1;
    }
}
