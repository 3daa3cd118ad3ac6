//! # Payload Decoding
//!
//! Decodes JSON text into a top-level object map. The decoder carries no
//! state; one instance is built at startup and shared by reference.

use serde_json::{Map, Value};
use thiserror::Error;

/// Why a JSON body could not be decoded into an object.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// No text body was supplied.
    #[error("request body is missing")]
    MissingBody,

    /// The text is not valid JSON.
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    /// The text is valid JSON but the top level is not an object.
    #[error("expected a JSON object at top level, found {found}")]
    NotAnObject {
        /// JSON type name of the top-level value.
        found: &'static str,
    },
}

/// Stateless JSON object decoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadDecoder {
    _private: (),
}

impl PayloadDecoder {
    /// Create a decoder.
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Decode `text` into a top-level JSON object.
    pub fn decode_object(&self, text: Option<&str>) -> Result<Map<String, Value>, DecodeError> {
        let text = text.ok_or(DecodeError::MissingBody)?;
        match serde_json::from_str::<Value>(text)? {
            Value::Object(map) => Ok(map),
            other => Err(DecodeError::NotAnObject {
                found: json_type_name(&other),
            }),
        }
    }
}

/// JSON type name of a value, for diagnostics.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
