//! Validator type definitions
//!
//! The engine is a small closed set of composable tagged variants:
//! - Primitives: string, boolean, integer/number (bound-checked), enum
//! - Combinators: nullable, any
//! - Composites: sequence, object (optionally sealed)
//! - Keyed map: per-entry key and value validators
//! - Asserted: structural validator plus ordered cross-field assertions
//!
//! Schemas are static descriptions; validation itself lives in `validator.rs`.

use serde_json::Value;

use super::bounds::Bounds;

/// Pure predicate evaluated against a structurally valid value.
pub type Predicate = fn(&Value) -> bool;

/// Produces the diagnostic for a failed predicate, given the value.
pub type MessageFn = fn(&Value) -> String;

/// A named cross-field rule attached to a structural validator.
///
/// Predicates receive the value after structural validation has succeeded,
/// must be pure, and must not mutate the candidate.
#[derive(Debug, Clone, Copy)]
pub struct Assertion {
    /// Rule name, for schema readability only
    pub name: &'static str,
    pub predicate: Predicate,
    pub message: MessageFn,
}

impl Assertion {
    pub fn new(name: &'static str, predicate: Predicate, message: MessageFn) -> Self {
        Self {
            name,
            predicate,
            message,
        }
    }
}

/// Two-stage pipeline: structural validation, then assertions in declaration
/// order. The first failing assertion's message is reported.
#[derive(Debug, Clone)]
pub struct Asserted {
    pub inner: Validator,
    pub assertions: Vec<Assertion>,
}

/// One field of an object shape: its validator plus a required flag.
/// Optional fields accept absence as valid.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub validator: Validator,
    pub required: bool,
}

impl FieldSpec {
    /// Field that must be present
    pub fn required(validator: Validator) -> Self {
        Self {
            validator,
            required: true,
        }
    }

    /// Field that may be absent
    pub fn optional(validator: Validator) -> Self {
        Self {
            validator,
            required: false,
        }
    }
}

/// Fixed-shape object schema.
///
/// Fields are kept in declaration order so validation is deterministic.
/// Sealed shapes reject any candidate field not declared here.
#[derive(Debug, Clone)]
pub struct ObjectShape {
    fields: Vec<(String, FieldSpec)>,
    sealed: bool,
}

impl ObjectShape {
    /// Shape that rejects undeclared fields
    pub fn sealed(fields: Vec<(&str, FieldSpec)>) -> Self {
        Self {
            fields: fields.into_iter().map(|(n, s)| (n.to_string(), s)).collect(),
            sealed: true,
        }
    }

    /// Shape that ignores undeclared fields
    pub fn open(fields: Vec<(&str, FieldSpec)>) -> Self {
        Self {
            fields: fields.into_iter().map(|(n, s)| (n.to_string(), s)).collect(),
            sealed: false,
        }
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    pub fn declares(&self, name: &str) -> bool {
        self.fields.iter().any(|(n, _)| n == name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.fields.iter().map(|(n, s)| (n.as_str(), s))
    }
}

/// Rule each key of a keyed map must satisfy on its own.
#[derive(Debug, Clone)]
pub enum KeyValidator {
    /// Any key accepted
    Any,
    /// Key must be one of the listed strings
    InSet(Vec<String>),
    /// Key is a JSON-encoded document: parse it, then validate the parsed
    /// value. The original key string stays as a display-only identifier.
    Json(Validator),
}

/// Mapping whose every key must satisfy `key` and every value must satisfy
/// `value`, with no assumed relationship between entries.
#[derive(Debug, Clone)]
pub struct KeyedMap {
    pub key: KeyValidator,
    pub value: Validator,
}

/// The closed set of validator variants.
#[derive(Debug, Clone)]
pub enum Validator {
    /// UTF-8 string
    String,
    /// Boolean
    Boolean,
    /// Integer (floats rejected), bound-checked
    Integer(Bounds),
    /// Any JSON number, bound-checked
    Number(Bounds),
    /// String drawn from a fixed set
    Enum(Vec<String>),
    /// `null` or a value matching the inner validator
    Nullable(Box<Validator>),
    /// Accepts anything; for interiors owned by collaborators
    Any,
    /// Ordered sequence with one element validator
    Sequence(Box<Validator>),
    /// Fixed-shape object
    Object(ObjectShape),
    /// Map with independent per-entry key/value validation
    KeyedMap(Box<KeyedMap>),
    /// Structural validator with cross-field assertions layered on top
    Asserted(Box<Asserted>),
}

impl Validator {
    pub fn string() -> Self {
        Validator::String
    }

    pub fn boolean() -> Self {
        Validator::Boolean
    }

    pub fn integer(bounds: Bounds) -> Self {
        Validator::Integer(bounds)
    }

    /// Integer strictly greater than zero
    pub fn positive_integer() -> Self {
        Validator::Integer(Bounds::greater_than(0.0))
    }

    pub fn number(bounds: Bounds) -> Self {
        Validator::Number(bounds)
    }

    /// Number strictly greater than zero
    pub fn positive_number() -> Self {
        Validator::Number(Bounds::greater_than(0.0))
    }

    pub fn enumeration(permitted: &[&str]) -> Self {
        Validator::Enum(permitted.iter().map(|s| s.to_string()).collect())
    }

    pub fn nullable(inner: Validator) -> Self {
        Validator::Nullable(Box::new(inner))
    }

    pub fn any() -> Self {
        Validator::Any
    }

    pub fn sequence(element: Validator) -> Self {
        Validator::Sequence(Box::new(element))
    }

    pub fn sealed_object(fields: Vec<(&str, FieldSpec)>) -> Self {
        Validator::Object(ObjectShape::sealed(fields))
    }

    pub fn open_object(fields: Vec<(&str, FieldSpec)>) -> Self {
        Validator::Object(ObjectShape::open(fields))
    }

    pub fn keyed_map(key: KeyValidator, value: Validator) -> Self {
        Validator::KeyedMap(Box::new(KeyedMap { key, value }))
    }

    pub fn asserted(inner: Validator, assertions: Vec<Assertion>) -> Self {
        Validator::Asserted(Box::new(Asserted { inner, assertions }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_shape_declares() {
        let shape = ObjectShape::sealed(vec![
            ("bit_rate", FieldSpec::required(Validator::positive_integer())),
            ("height", FieldSpec::optional(Validator::positive_integer())),
        ]);
        assert!(shape.is_sealed());
        assert!(shape.declares("bit_rate"));
        assert!(shape.declares("height"));
        assert!(!shape.declares("width"));
    }

    #[test]
    fn test_field_order_is_declaration_order() {
        let shape = ObjectShape::open(vec![
            ("z", FieldSpec::required(Validator::string())),
            ("a", FieldSpec::required(Validator::string())),
        ]);
        let names: Vec<&str> = shape.fields().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["z", "a"]);
    }

    #[test]
    fn test_enumeration_builder_owns_choices() {
        let validator = Validator::enumeration(&["audio", "video"]);
        match validator {
            Validator::Enum(choices) => assert_eq!(choices, vec!["audio", "video"]),
            other => panic!("expected Enum, got {:?}", other),
        }
    }
}
