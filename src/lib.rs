//! Infer TypeScript type declarations from arbitrary JSON documents.
//!
//! One depth-first pass over a parsed `serde_json::Value` (with
//! `preserve_order`, so properties come out in document order), accumulating
//! declarations in an insertion-ordered registry that lives for exactly one
//! conversion.
//!
//! Design goals:
//! - Deterministic: same input + same options → byte-identical output.
//! - No hidden state: every `convert` call allocates its own registry.
//! - Lossy on purpose where JSON underdetermines the type (`any`, `any[]`).

pub mod cli;
pub mod error;
pub mod generate;
pub mod render;

use serde::{Deserialize, Serialize};

pub use error::{ConvertError, ConvertResult};
pub use generate::Generator;

/// Fixed name of the top-level declaration.
pub const ROOT_TYPE_NAME: &str = "Root";

/// Per-run switches. Two independent booleans, nothing else is dynamic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// `export interface Name {…}` when true, `export type Name = {…};` when false.
    pub use_interfaces: bool,
    /// Mark every property optional instead of required.
    pub use_optional_fields: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            use_interfaces: true,
            use_optional_fields: false,
        }
    }
}

/// Parse `input` as JSON, generate declarations under [`ROOT_TYPE_NAME`], and
/// render them. A top-level scalar or array of scalars yields empty output —
/// there is no object shape to declare.
pub fn convert(input: &str, options: &ConvertOptions) -> ConvertResult<String> {
    let document = error::parse_json(input)?;
    Ok(convert_value(&document, options))
}

/// Convert an already-parsed document. Infallible: generation and rendering
/// are total over well-formed JSON values.
pub fn convert_value(document: &serde_json::Value, options: &ConvertOptions) -> String {
    let mut generator = Generator::new(options);
    generator.generate(ROOT_TYPE_NAME, document);
    generator.into_output()
}
