//! Validation Engine Invariant Tests
//!
//! Engine-wide guarantees, independent of any one profile:
//! - Validation is deterministic
//! - Validation is fail-fast: exactly one violation is reported
//! - Validation never mutates the candidate
//! - Re-validation of a validated value is a no-op (projection)

use abr_profile::schema::{
    Assertion, Bounds, ErrorKind, FieldSpec, KeyValidator, Validator,
};
use serde_json::{json, Value};

// =============================================================================
// Helper Functions
// =============================================================================

fn person_schema() -> Validator {
    Validator::sealed_object(vec![
        ("name", FieldSpec::required(Validator::string())),
        ("age", FieldSpec::optional(Validator::integer(Bounds::between(0.0, 150.0)))),
        ("tags", FieldSpec::optional(Validator::sequence(Validator::string()))),
    ])
}

// =============================================================================
// Determinism Tests
// =============================================================================

/// Same candidate validates the same way every time.
#[test]
fn test_validation_is_deterministic() {
    let schema = person_schema();
    let candidate = json!({"name": "Alice", "age": 30});

    for _ in 0..100 {
        assert!(schema.validate(&candidate).is_ok());
    }
}

/// Invalid candidate fails consistently with the same error.
#[test]
fn test_invalid_candidate_fails_consistently() {
    let schema = person_schema();
    let candidate = json!({"name": "Alice", "age": 200});

    let first = schema.validate(&candidate).unwrap_err();
    for _ in 0..100 {
        assert_eq!(schema.validate(&candidate).unwrap_err(), first);
    }
}

// =============================================================================
// Fail-Fast Tests
// =============================================================================

/// A candidate violating two independent assertions reports exactly the first
/// one in declaration order, never both.
#[test]
fn test_two_failing_assertions_report_first_only() {
    fn fails(_: &Value) -> bool {
        false
    }
    let schema = Validator::asserted(
        Validator::any(),
        vec![
            Assertion::new("a", fails, |_: &Value| "rule a violated".into()),
            Assertion::new("b", fails, |_: &Value| "rule b violated".into()),
        ],
    );

    let err = schema.validate(&json!(1)).unwrap_err();
    assert_eq!(err.to_string(), "rule a violated");
}

/// Structural failures win over assertions: the assertion layer only sees
/// structurally valid values.
#[test]
fn test_structural_failure_preempts_assertions() {
    fn panics(_: &Value) -> bool {
        panic!("assertion evaluated against structurally invalid value");
    }
    let schema = Validator::asserted(
        Validator::sealed_object(vec![("n", FieldSpec::required(Validator::positive_integer()))]),
        vec![Assertion::new("never_reached", panics, |_: &Value| String::new())],
    );

    let err = schema.validate(&json!({"n": "not a number"})).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
}

/// A candidate with several structural problems reports only one of them.
#[test]
fn test_multiple_structural_violations_report_one() {
    let schema = person_schema();
    // Missing "name" AND carries an unknown field
    let candidate = json!({"unknown": 1});

    let err = schema.validate(&candidate).unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::UnknownField | ErrorKind::MissingField
    ));
}

// =============================================================================
// Projection / Immutability Tests
// =============================================================================

/// Validation returns the candidate unchanged and re-validating the result
/// succeeds with an equal value.
#[test]
fn test_validation_is_a_projection() {
    let schema = person_schema();
    let candidate = json!({"name": "Alice", "tags": ["ops", "video"]});

    let once = schema.validate(&candidate).unwrap().clone();
    assert_eq!(once, candidate);

    let twice = schema.validate(&once).unwrap();
    assert_eq!(twice, &candidate);
}

// =============================================================================
// Keyed-Map Tests
// =============================================================================

/// Entries are checked in candidate insertion order; the first bad entry wins.
#[test]
fn test_keyed_map_checks_entries_in_insertion_order() {
    let schema = Validator::keyed_map(KeyValidator::Any, Validator::string());
    let candidate = json!({"z": 1, "a": 2});

    let err = schema.validate(&candidate).unwrap_err();
    assert!(err.to_string().starts_with("entry 'z':"));
}

/// Key and value failures both carry the offending key.
#[test]
fn test_keyed_map_failures_name_the_key() {
    let schema = Validator::keyed_map(
        KeyValidator::InSet(vec!["audio".into(), "video".into()]),
        Validator::sealed_object(vec![("n", FieldSpec::required(Validator::positive_integer()))]),
    );

    let err = schema.validate(&json!({"subtitles": {"n": 1}})).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Structural);
    assert!(err.to_string().contains("subtitles"));

    let err = schema.validate(&json!({"audio": {"n": 0}})).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Structural);
    assert!(err.to_string().contains("audio"));
    assert!(err.to_string().contains("must be > 0"));
}
