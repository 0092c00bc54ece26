//! abr-profile - strict, fail-fast validation for ABR encoding profiles
//!
//! An ABR (adaptive-bitrate) profile tells a transcoding pipeline which
//! bitrate/resolution ladders, playout formats, segment policies, watermarks,
//! and post-processing steps to apply to a piece of media. This crate
//! certifies that a profile document is well-formed before it reaches the
//! pipeline; it never interprets or executes the configuration.
//!
//! # Design Principles
//!
//! - Validation is a pure function from candidate value to validated value
//! - Fail-fast: the first violation found is reported, never an aggregate
//! - No coercion, defaults, or silent repair of invalid input
//! - Validation never mutates the candidate
//! - Deterministic: the same document validates the same way every time

pub mod profile;
pub mod schema;
