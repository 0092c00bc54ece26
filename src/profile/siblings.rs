//! Sibling sub-schemas of the profile root
//!
//! These cover the non-ladder profile fields: comments, playout formats,
//! segment policies, watermarks, offering patches, and the parametric video
//! ladder. The parametric ladder interior is owned by the ladder generator,
//! so only its outer shape is checked here.

use crate::schema::{Bounds, FieldSpec, KeyValidator, Validator};

/// `comments`: an ordered sequence of strings.
pub fn comments_schema() -> Validator {
    Validator::sequence(Validator::string())
}

/// `playout_formats`: map from format name to a protocol/DRM pairing.
/// `drm: null` means clear playout.
pub fn playout_formats_schema() -> Validator {
    Validator::keyed_map(KeyValidator::Any, playout_format_schema())
}

fn playout_format_schema() -> Validator {
    Validator::sealed_object(vec![
        ("drm", FieldSpec::required(Validator::nullable(drm_schema()))),
        ("protocol", FieldSpec::required(protocol_schema())),
    ])
}

fn drm_schema() -> Validator {
    Validator::sealed_object(vec![
        ("type", FieldSpec::required(Validator::string())),
        ("enc_scheme_name", FieldSpec::required(Validator::string())),
        ("content_id", FieldSpec::optional(Validator::string())),
        (
            "license_servers",
            FieldSpec::optional(Validator::sequence(Validator::string())),
        ),
    ])
}

fn protocol_schema() -> Validator {
    Validator::sealed_object(vec![
        (
            "type",
            FieldSpec::required(Validator::enumeration(&["ProtoDash", "ProtoHls"])),
        ),
        (
            "min_buffer_length",
            FieldSpec::optional(Validator::positive_integer()),
        ),
    ])
}

/// `segment_specs`: per-media-type segment policy.
pub fn segment_specs_schema() -> Validator {
    Validator::keyed_map(
        KeyValidator::InSet(vec!["audio".into(), "video".into()]),
        Validator::sealed_object(vec![
            ("segs_per_chunk", FieldSpec::required(Validator::positive_integer())),
            ("target_dur", FieldSpec::required(Validator::positive_number())),
        ]),
    )
}

/// `image_watermark`: image overlay placement.
pub fn image_watermark_schema() -> Validator {
    Validator::sealed_object(vec![
        ("image", FieldSpec::required(Validator::string())),
        ("align_h", FieldSpec::optional(alignment_h())),
        ("align_v", FieldSpec::optional(alignment_v())),
        ("margin_h", FieldSpec::optional(Validator::number(Bounds::unbounded()))),
        ("margin_v", FieldSpec::optional(Validator::number(Bounds::unbounded()))),
        (
            "target_video_height",
            FieldSpec::optional(Validator::positive_integer()),
        ),
    ])
}

/// `simple_watermark`: text overlay placement and styling.
pub fn text_watermark_schema() -> Validator {
    Validator::sealed_object(vec![
        ("text", FieldSpec::required(Validator::string())),
        ("align_h", FieldSpec::optional(alignment_h())),
        ("align_v", FieldSpec::optional(alignment_v())),
        ("font_color", FieldSpec::optional(Validator::string())),
        (
            "font_relative_size",
            FieldSpec::optional(Validator::positive_number()),
        ),
        ("shadow", FieldSpec::optional(Validator::boolean())),
        ("shadow_color", FieldSpec::optional(Validator::string())),
    ])
}

fn alignment_h() -> Validator {
    Validator::enumeration(&["left", "center", "right"])
}

fn alignment_v() -> Validator {
    Validator::enumeration(&["top", "middle", "bottom"])
}

/// `additional_offering_specs`: JSON Patch operations applied, in order, to a
/// copy of the mezzanine offering created during ingest.
pub fn additional_offering_specs_schema() -> Validator {
    Validator::sequence(patch_operation_schema())
}

fn patch_operation_schema() -> Validator {
    Validator::sealed_object(vec![
        (
            "op",
            FieldSpec::required(Validator::enumeration(&[
                "add", "remove", "replace", "move", "copy", "test",
            ])),
        ),
        ("path", FieldSpec::required(Validator::string())),
        ("value", FieldSpec::optional(Validator::any())),
        ("from", FieldSpec::optional(Validator::string())),
    ])
}

/// `video_parametric_ladder`: any object; the interior belongs to the
/// parametric ladder generator.
pub fn video_parametric_ladder_schema() -> Validator {
    Validator::open_object(vec![])
}
