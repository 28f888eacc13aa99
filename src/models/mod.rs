use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

pub mod campaign;

/// An update payload as supplied by the caller: field name to loosely typed
/// value. A missing key is never validated; a key holding the wrong type is
/// reported as invalid, not skipped.
pub type UpdatePayload = Map<String, Value>;

/// Outcome of validating one update payload.
///
/// `is_valid` is true exactly when `errors` is empty; both lists are built
/// fresh on every call and never shared between calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// A result with no errors and no warnings.
    pub fn valid() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

/// Parses a JSON document into an [`UpdatePayload`].
///
/// The document must be a JSON object; anything else (arrays, scalars,
/// malformed JSON) is rejected.
pub fn payload_from_str(raw: &str) -> Result<UpdatePayload> {
    let value: Value = serde_json::from_str(raw)?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(Error::InvalidInput(format!(
            "update payload must be a JSON object, got {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
