//! The root ABR profile schema and its single public entry point
//!
//! The profile is a sealed composite: every field is declared below and any
//! undeclared field is rejected. All cross-field enforcement lives in the
//! sub-schemas; the root adds none of its own.

use serde_json::Value;

use crate::schema::{FieldSpec, ValidationResult, Validator};

use super::ladder::ladder_specs_schema;
use super::model::AbrProfile;
use super::siblings::{
    additional_offering_specs_schema, comments_schema, image_watermark_schema,
    playout_formats_schema, segment_specs_schema, text_watermark_schema,
    video_parametric_ladder_schema,
};

/// Schema for the full sealed profile.
///
/// Known gaps, documented but not enforced:
/// - `store_clear: true` is incompatible with `drm_optional: false`, and both
///   interact with which `playout_formats` entries are usable
/// - `image_watermark` and `simple_watermark` cannot be used at the same time
// TODO: enforce drm_optional vs store_clear vs playout_formats, mutex watermarks
pub fn abr_profile_schema() -> Validator {
    Validator::sealed_object(vec![
        ("comments", FieldSpec::optional(comments_schema())),
        ("drm_optional", FieldSpec::required(Validator::boolean())),
        ("store_clear", FieldSpec::required(Validator::boolean())),
        ("ladder_specs", FieldSpec::required(ladder_specs_schema())),
        ("playout_formats", FieldSpec::required(playout_formats_schema())),
        ("segment_specs", FieldSpec::required(segment_specs_schema())),
        ("image_watermark", FieldSpec::optional(image_watermark_schema())),
        ("simple_watermark", FieldSpec::optional(text_watermark_schema())),
        (
            "additional_offering_specs",
            FieldSpec::optional(additional_offering_specs_schema()),
        ),
        (
            "video_parametric_ladder",
            FieldSpec::optional(video_parametric_ladder_schema()),
        ),
    ])
}

/// Validates a candidate profile document.
///
/// Returns the fully validated, strongly typed profile, or the first
/// violation found. The candidate is never mutated; serializing the returned
/// profile reproduces a document structurally equal to the input.
pub fn validate_profile(candidate: &Value) -> ValidationResult<AbrProfile> {
    abr_profile_schema().validate(candidate)?;
    // Shape fully constrained by the schema above
    Ok(serde_json::from_value(candidate.clone()).expect("profile already validated"))
}
