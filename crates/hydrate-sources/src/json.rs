//! Records from JSON objects.
//!
//! Object members become record fields. Strings are taken verbatim, numbers
//! and booleans by their JSON text, and `null` leaves the field absent.
//! Repeated member names keep the last value.

use crate::{Error, Result};
use hydrate_core::Record;
use serde_json::Value;
use tracing::debug;

/// Parse JSON text into a record.
///
/// # Errors
///
/// Returns [`Error::Json`] for invalid JSON and the errors of
/// [`record_from_value`] for valid JSON that is not a flat object.
pub fn record_from_str(text: &str) -> Result<Record> {
    let value: Value = serde_json::from_str(text).map_err(|source| Error::Json { source })?;
    record_from_value(&value)
}

/// Convert a parsed JSON object into a record.
///
/// # Errors
///
/// Returns [`Error::NotAnObject`] if `value` is not an object and
/// [`Error::NonScalarField`] if a member is an array or object.
pub fn record_from_value(value: &Value) -> Result<Record> {
    let Value::Object(members) = value else {
        return Err(Error::NotAnObject {
            found: kind(value),
        });
    };

    let mut record = Record::new();
    for (name, member) in members {
        let text = match member {
            Value::Null => continue,
            Value::String(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Array(_) | Value::Object(_) => {
                return Err(Error::NonScalarField {
                    field: name.clone(),
                    found: kind(member),
                });
            }
        };
        record.insert(name.clone(), text);
    }

    debug!(fields = record.len(), "Built record from JSON object");
    Ok(record)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
