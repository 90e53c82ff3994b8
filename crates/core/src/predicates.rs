//! Classification and comparison of untyped JSON values
//!
//! The dynamic collection entry points classify their input with these before
//! deciding whether it can be traversed at all, and `where` matching on JSON
//! records compares fields with [`strictly_equal`].

use serde_json::Value;

/// Whether the value is traversed by index
pub fn is_indexed(value: &Value) -> bool {
    value.is_array()
}

/// Whether the value is traversed by key
pub fn is_mapping(value: &Value) -> bool {
    value.is_object()
}

/// Whether the value can be traversed at all
pub fn is_container(value: &Value) -> bool {
    is_indexed(value) || is_mapping(value)
}

/// Short name of the value's kind, for error messages
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Equality where numbers compare by value: `1` equals `1.0`.
///
/// Integers are compared exactly when both sides fit the same integer type,
/// so large values do not lose precision through `f64`. Everything else
/// falls back to structural equality.
pub fn strictly_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => {
            if let (Some(l), Some(r)) = (l.as_i64(), r.as_i64()) {
                return l == r;
            }
            if let (Some(l), Some(r)) = (l.as_u64(), r.as_u64()) {
                return l == r;
            }
            match (l.as_f64(), r.as_f64()) {
                (Some(l), Some(r)) => l == r,
                _ => false,
            }
        }
        _ => left == right,
    }
}
