//! Error surface of the conversion core.
//!
//! Two kinds only: the input wasn't JSON, or generation/rendering failed on a
//! well-formed document (which should not happen). Callers treat any error as
//! "no output" — partial output is never returned.

use thiserror::Error;

pub type ConvertResult<T> = Result<T, ConvertError>;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input text is not valid JSON. Carries the JSON path at which
    /// deserialization failed plus the parser's own message.
    #[error("invalid JSON at {} → {}", .0.path(), .0.inner())]
    Parse(serde_path_to_error::Error<serde_json::Error>),

    /// Unexpected failure while generating or rendering declarations.
    #[error("conversion failed: {0}")]
    Conversion(String),
}

/// Parse with JSON-path context in error messages.
pub fn parse_json(src: &str) -> ConvertResult<serde_json::Value> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize(de).map_err(ConvertError::Parse)
}
