//! Declaration text assembly: property lines, declaration bodies, final output.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::ConvertOptions;

// A key needs quoting if it starts with a digit or contains anything outside
// [A-Za-z0-9_].
static NEEDS_QUOTING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]|[^A-Za-z0-9_]").unwrap());

/// Emit a key bare when it is a valid identifier, otherwise wrap it in single
/// quotes verbatim.
pub fn property_name(key: &str) -> String {
    if NEEDS_QUOTING.is_match(key) {
        format!("'{key}'")
    } else {
        key.to_string()
    }
}

/// One `  key<?>: Type;` line. The optional marker applies object-wide;
/// there is no per-key optionality inference.
pub fn property_line(key: &str, ty: &str, options: &ConvertOptions) -> String {
    let marker = if options.use_optional_fields { "?" } else { "" };
    format!("  {}{marker}: {ty};", property_name(key))
}

/// Assemble header + property lines + footer per the active declaration style.
pub fn declaration(name: &str, properties: &[String], options: &ConvertOptions) -> String {
    let mut out = if options.use_interfaces {
        format!("export interface {name} {{\n")
    } else {
        format!("export type {name} = {{\n")
    };
    for line in properties {
        out.push_str(line);
        out.push('\n');
    }
    out.push('}');
    if !options.use_interfaces {
        out.push(';');
    }
    out
}

/// Serialize the registry: declaration texts in insertion order, one blank
/// line apart, trailing whitespace trimmed.
pub fn output(registry: &IndexMap<String, String>) -> String {
    let mut out = String::new();
    for text in registry.values() {
        out.push_str(text);
        out.push_str("\n\n");
    }
    out.trim_end().to_string()
}
