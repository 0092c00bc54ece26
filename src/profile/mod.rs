//! ABR profile schema built on the validation engine
//!
//! Public surface:
//! - [`validate_profile`] — the root entry point for whole documents
//! - [`validate_ladder_key`], [`validate_rung_specs`], [`validate_ladder_specs`]
//!   — ladder-level entry points for callers that assemble profiles piecewise
//!
//! Each takes a parsed candidate and returns either a validated, strongly
//! typed value or a descriptive [`crate::schema::ValidationError`].

mod abr;
mod ladder;
mod model;
mod siblings;

pub use abr::{abr_profile_schema, validate_profile};
pub use ladder::{
    ladder_key_schema, ladder_specs_schema, rung_spec_schema, rung_specs_schema,
    validate_ladder_key, validate_ladder_specs, validate_rung_specs,
};
pub use model::{
    AbrProfile, AdditionalOfferingSpecs, DrmSpec, ImageWatermark, LadderKey, LadderSpecs,
    MediaType, PatchOpKind, PatchOperation, PlayoutFormat, PlayoutFormats, ProtocolSpec, RungSpec,
    RungSpecs, SegmentSpec, SegmentSpecs, TextWatermark, VideoParametricLadder,
};
pub use siblings::{
    additional_offering_specs_schema, comments_schema, image_watermark_schema,
    playout_formats_schema, segment_specs_schema, text_watermark_schema,
    video_parametric_ladder_schema,
};
