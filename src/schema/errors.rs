//! Validation error types
//!
//! Error taxonomy:
//! - TypeMismatch: value has the wrong scalar or container kind
//! - OutOfRange: numeric value violates its bounds
//! - NotInSet: value is not one of the permitted choices
//! - UnknownField: sealed object carries an undeclared field
//! - MissingField: required field is absent
//! - Structural: keyed-map key or value failed, tagged with the offending key
//! - AssertionFailed: a cross-field predicate rejected a structurally valid value
//!
//! Every error is terminal for the validation call that produced it. Messages
//! are suitable for direct display to the operator authoring the profile.

use thiserror::Error;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Discriminant for [`ValidationError`], used by callers that branch on the
/// failure class without matching the full variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    TypeMismatch,
    OutOfRange,
    NotInSet,
    UnknownField,
    MissingField,
    Structural,
    AssertionFailed,
}

impl ErrorKind {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::TypeMismatch => "TYPE_MISMATCH",
            ErrorKind::OutOfRange => "OUT_OF_RANGE",
            ErrorKind::NotInSet => "NOT_IN_SET",
            ErrorKind::UnknownField => "UNKNOWN_FIELD",
            ErrorKind::MissingField => "MISSING_FIELD",
            ErrorKind::Structural => "STRUCTURAL",
            ErrorKind::AssertionFailed => "ASSERTION_FAILED",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single validation failure.
///
/// Validation is fail-fast, so one call surfaces at most one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value has the wrong kind entirely
    #[error("field '{path}': expected {expected}, got {actual}")]
    TypeMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    /// Numeric value outside its declared bounds
    #[error("field '{path}': {bounds}, got {value}")]
    OutOfRange {
        path: String,
        bounds: String,
        value: String,
    },

    /// Value not a member of the permitted set
    #[error("field '{path}': must be one of [{permitted}], got '{actual}'")]
    NotInSet {
        path: String,
        permitted: String,
        actual: String,
    },

    /// Sealed object carries a field absent from its shape
    #[error("unknown field '{path}'")]
    UnknownField { path: String },

    /// Required field absent from the candidate
    #[error("missing required field '{path}'")]
    MissingField { path: String },

    /// Keyed-map entry failed; wraps the underlying failure with its key
    #[error("entry '{key}': {source}")]
    Structural {
        key: String,
        #[source]
        source: Box<ValidationError>,
    },

    /// Cross-field predicate rejected the value; carries the full message
    #[error("{0}")]
    AssertionFailed(String),
}

impl ValidationError {
    /// Create a type mismatch error
    pub fn type_mismatch(
        path: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            path: display_path(path),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an out-of-range error; `bounds` is the bound description
    pub fn out_of_range(
        path: impl Into<String>,
        bounds: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::OutOfRange {
            path: display_path(path),
            bounds: bounds.into(),
            value: value.into(),
        }
    }

    /// Create a not-in-set error listing the permitted values
    pub fn not_in_set(
        path: impl Into<String>,
        permitted: &[String],
        actual: impl Into<String>,
    ) -> Self {
        Self::NotInSet {
            path: display_path(path),
            permitted: permitted.join(", "),
            actual: actual.into(),
        }
    }

    /// Create an unknown field error
    pub fn unknown_field(path: impl Into<String>) -> Self {
        Self::UnknownField {
            path: display_path(path),
        }
    }

    /// Create a missing field error
    pub fn missing_field(path: impl Into<String>) -> Self {
        Self::MissingField {
            path: display_path(path),
        }
    }

    /// Wrap a keyed-map key/value failure with the offending key
    pub fn structural(key: impl Into<String>, source: ValidationError) -> Self {
        Self::Structural {
            key: key.into(),
            source: Box::new(source),
        }
    }

    /// Create an assertion failure carrying a precomputed message
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::AssertionFailed(message.into())
    }

    /// Returns the failure class
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            ValidationError::OutOfRange { .. } => ErrorKind::OutOfRange,
            ValidationError::NotInSet { .. } => ErrorKind::NotInSet,
            ValidationError::UnknownField { .. } => ErrorKind::UnknownField,
            ValidationError::MissingField { .. } => ErrorKind::MissingField,
            ValidationError::Structural { .. } => ErrorKind::Structural,
            ValidationError::AssertionFailed(_) => ErrorKind::AssertionFailed,
        }
    }

    /// Returns the display-ready message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Empty paths refer to the value being validated itself.
fn display_path(path: impl Into<String>) -> String {
    let path = path.into();
    if path.is_empty() {
        "$root".into()
    } else {
        path
    }
}
