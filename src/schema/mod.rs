//! Composable validation engine for structured configuration documents
//!
//! The engine certifies the shape and cross-field consistency of parsed JSON
//! before it is handed to downstream consumers.
//!
//! # Design Principles
//!
//! - A small closed set of composable validator variants
//! - Structural validation first, cross-field assertions second
//! - Fail-fast: the first violation found aborts the validation call
//! - No coercion, no defaults, no mutation of the candidate
//! - Deterministic validation

mod bounds;
mod errors;
mod types;
mod validator;

pub use bounds::{Bound, Bounds};
pub use errors::{ErrorKind, ValidationError, ValidationResult};
pub use types::{Assertion, Asserted, FieldSpec, KeyValidator, KeyedMap, ObjectShape, Validator};
