//! JSON encoding and prototype-merging decoding.
//!
//! These are thin wrappers over `serde_json`. [`decode_onto`] mirrors
//! assigning parsed fields onto an existing object: fields present in the
//! text override the prototype, everything else keeps the prototype's value.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Errors produced while encoding or decoding.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The text was not valid JSON, or the merged value did not fit the target type.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Only objects can be merged onto a prototype.
    #[error("expected a JSON object to merge onto the prototype, found {found}")]
    NotAnObject {
        /// JSON type name of the offending value.
        found: &'static str,
    },
}

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Encode a value as compact JSON text.
///
/// # Errors
///
/// Returns [`CodecError::Json`] if the value's `Serialize` impl fails
/// (for example a map with non-string keys).
pub fn encode<T: Serialize + ?Sized>(value: &T) -> CodecResult<String> {
    Ok(serde_json::to_string(value)?)
}

/// Encode a value as indented JSON text.
///
/// # Errors
///
/// Same as [`encode`].
pub fn encode_pretty<T: Serialize + ?Sized>(value: &T) -> CodecResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Decode `text` and merge its top-level fields onto `prototype`.
///
/// # Errors
///
/// - [`CodecError::Json`] if `text` is not valid JSON or the merged value
///   cannot be deserialized into `T`.
/// - [`CodecError::NotAnObject`] if either `text` or the serialized
///   prototype is not a JSON object.
pub fn decode_onto<T>(text: &str, prototype: &T) -> CodecResult<T>
where
    T: Serialize + DeserializeOwned,
{
    let mut merged = into_object(serde_json::to_value(prototype)?)?;
    let fields = into_object(serde_json::from_str(text)?)?;

    merged.extend(fields);
    Ok(serde_json::from_value(Value::Object(merged))?)
}

fn into_object(value: Value) -> CodecResult<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(CodecError::NotAnObject {
            found: type_name(&other),
        }),
    }
}

const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
