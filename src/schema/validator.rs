//! The recursive validation walk
//!
//! Validation semantics:
//! - The candidate flows bottom-up through primitive, composite, keyed-map,
//!   and asserted validators
//! - The first violation found aborts the call (fail-fast, not accumulate-all)
//! - The candidate is only read; on success the same value is returned
//! - Assertions run only after structural validation of their inner validator
//!   has succeeded, in declaration order

use serde_json::Value;

use super::errors::{ValidationError, ValidationResult};
use super::types::{KeyValidator, Validator};

impl Validator {
    /// Validates a candidate value.
    ///
    /// Returns the same value, semantically unchanged, if every rule passes.
    /// Re-validating an already-validated value therefore returns an equal
    /// value: validation is a projection, not a one-shot transform.
    pub fn validate<'a>(&self, candidate: &'a Value) -> ValidationResult<&'a Value> {
        self.check(candidate, "")?;
        Ok(candidate)
    }

    fn check(&self, value: &Value, path: &str) -> ValidationResult<()> {
        match self {
            Validator::String => {
                if !value.is_string() {
                    return Err(type_error(path, "string", value));
                }
                Ok(())
            }
            Validator::Boolean => {
                if !value.is_boolean() {
                    return Err(type_error(path, "bool", value));
                }
                Ok(())
            }
            Validator::Integer(bounds) => {
                // Must be an integer, never a float
                let n = value
                    .as_i64()
                    .map(|i| i as f64)
                    .or_else(|| value.as_u64().map(|u| u as f64))
                    .ok_or_else(|| type_error(path, "int", value))?;
                bounds
                    .check(n)
                    .map_err(|desc| ValidationError::out_of_range(path, desc, value.to_string()))
            }
            Validator::Number(bounds) => {
                let n = value
                    .as_f64()
                    .ok_or_else(|| type_error(path, "number", value))?;
                bounds
                    .check(n)
                    .map_err(|desc| ValidationError::out_of_range(path, desc, value.to_string()))
            }
            Validator::Enum(permitted) => match value.as_str() {
                Some(s) if permitted.iter().any(|p| p == s) => Ok(()),
                Some(s) => Err(ValidationError::not_in_set(path, permitted, s)),
                None => Err(type_error(path, "string", value)),
            },
            Validator::Nullable(inner) => {
                if value.is_null() {
                    Ok(())
                } else {
                    inner.check(value, path)
                }
            }
            Validator::Any => Ok(()),
            Validator::Sequence(element) => {
                let arr = value
                    .as_array()
                    .ok_or_else(|| type_error(path, "array", value))?;
                for (i, elem) in arr.iter().enumerate() {
                    element.check(elem, &format!("{}[{}]", path, i))?;
                }
                Ok(())
            }
            Validator::Object(shape) => {
                let obj = value
                    .as_object()
                    .ok_or_else(|| type_error(path, "object", value))?;

                if shape.is_sealed() {
                    for key in obj.keys() {
                        if !shape.declares(key) {
                            return Err(ValidationError::unknown_field(make_path(path, key)));
                        }
                    }
                }

                for (name, spec) in shape.fields() {
                    let field_path = make_path(path, name);
                    match obj.get(name) {
                        Some(v) => spec.validator.check(v, &field_path)?,
                        None if spec.required => {
                            return Err(ValidationError::missing_field(field_path));
                        }
                        None => {}
                    }
                }
                Ok(())
            }
            Validator::KeyedMap(map) => {
                let obj = value
                    .as_object()
                    .ok_or_else(|| type_error(path, "object", value))?;

                // Entries are checked in candidate insertion order
                for (key, entry) in obj {
                    map.key
                        .check_key(key)
                        .map_err(|e| ValidationError::structural(key.as_str(), e))?;
                    map.value
                        .check(entry, "")
                        .map_err(|e| ValidationError::structural(key.as_str(), e))?;
                }
                Ok(())
            }
            Validator::Asserted(layer) => {
                layer.inner.check(value, path)?;
                for assertion in &layer.assertions {
                    if !(assertion.predicate)(value) {
                        return Err(ValidationError::assertion((assertion.message)(value)));
                    }
                }
                Ok(())
            }
        }
    }
}

impl KeyValidator {
    fn check_key(&self, key: &str) -> ValidationResult<()> {
        match self {
            KeyValidator::Any => Ok(()),
            KeyValidator::InSet(permitted) => {
                if permitted.iter().any(|p| p == key) {
                    Ok(())
                } else {
                    Err(ValidationError::not_in_set("", permitted, key))
                }
            }
            KeyValidator::Json(inner) => {
                let parsed: Value = serde_json::from_str(key).map_err(|_| {
                    ValidationError::type_mismatch("", "a JSON-encoded key", "unparseable string")
                })?;
                inner.check(&parsed, "")?;
                Ok(())
            }
        }
    }
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Creates a field path from prefix and field name.
fn make_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}

/// Creates a type mismatch error.
fn type_error(path: &str, expected: &str, actual: &Value) -> ValidationError {
    ValidationError::type_mismatch(path, expected, json_type_name(actual))
}
