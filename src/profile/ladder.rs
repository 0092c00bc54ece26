//! Ladder schemas: keys, rungs, and the ladder_specs map
//!
//! A ladder map key is a serialized JSON object naming a media category
//! (audio channel count or video aspect ratio); its value holds the rung
//! sequence for that category. Beyond per-entry structure, ladder_specs
//! carries two cross-field rules:
//! - the map must not be empty
//! - each key's media_type must agree with its ladder's rung_specs entries

use serde_json::Value;

use crate::schema::{Assertion, FieldSpec, KeyValidator, ValidationError, ValidationResult, Validator};

use super::model::{LadderKey, LadderSpecs, RungSpecs};

/// Schema for a decoded ladder map key.
///
/// Sealed object discriminated on `media_type`: audio keys carry `channels`,
/// video keys carry both aspect-ratio fields, and neither kind may carry the
/// other's fields.
pub fn ladder_key_schema() -> Validator {
    Validator::asserted(
        Validator::sealed_object(vec![
            (
                "media_type",
                FieldSpec::required(Validator::enumeration(&["audio", "video"])),
            ),
            ("channels", FieldSpec::optional(Validator::positive_integer())),
            (
                "aspect_ratio_width",
                FieldSpec::optional(Validator::positive_integer()),
            ),
            (
                "aspect_ratio_height",
                FieldSpec::optional(Validator::positive_integer()),
            ),
        ]),
        vec![
            Assertion::new("audio_key_shape", audio_key_shape, |_: &Value| {
                "audio ladder keys must specify channels and no aspect ratio".into()
            }),
            Assertion::new("video_key_shape", video_key_shape, |_: &Value| {
                "video ladder keys must specify aspect_ratio_width and aspect_ratio_height and no channels"
                    .into()
            }),
        ],
    )
}

/// Schema for one encoding rung.
pub fn rung_spec_schema() -> Validator {
    Validator::asserted(
        Validator::sealed_object(vec![
            ("bit_rate", FieldSpec::required(Validator::positive_integer())),
            (
                "media_type",
                FieldSpec::required(Validator::enumeration(&["audio", "video"])),
            ),
            ("pregenerate", FieldSpec::required(Validator::boolean())),
            ("height", FieldSpec::optional(Validator::positive_integer())),
            ("width", FieldSpec::optional(Validator::positive_integer())),
        ]),
        vec![
            Assertion::new("video_rung_dimensions", video_rung_has_dimensions, |_: &Value| {
                "video rung_specs entries must specify height and width".into()
            }),
            Assertion::new("audio_rung_dimensions", audio_rung_has_no_dimensions, |_: &Value| {
                "audio rung_specs entries may not specify height or width".into()
            }),
        ],
    )
}

/// Schema for the value side of one ladder entry.
pub fn rung_specs_schema() -> Validator {
    Validator::asserted(
        Validator::sealed_object(vec![(
            "rung_specs",
            FieldSpec::required(Validator::sequence(rung_spec_schema())),
        )]),
        vec![
            Assertion::new("rungs_not_empty", rungs_not_empty, |_: &Value| {
                "rung_specs must not be empty".into()
            }),
            Assertion::new("rungs_share_media_type", rungs_share_media_type, |_: &Value| {
                "rung_specs entries must all have the same media_type".into()
            }),
        ],
    )
}

/// Schema for the full ladder_specs map.
pub fn ladder_specs_schema() -> Validator {
    Validator::asserted(
        Validator::keyed_map(KeyValidator::Json(ladder_key_schema()), rung_specs_schema()),
        vec![
            Assertion::new("not_empty", ladder_specs_not_empty, |_: &Value| {
                "ladder_specs must not be empty".into()
            }),
            Assertion::new(
                "key_value_media_type_agreement",
                ladder_keys_match_rungs,
                |_: &Value| {
                    "ladder_specs key and ladder rung_specs entries must have same media_type".into()
                },
            ),
        ],
    )
}

/// Validates a serialized ladder key and returns its decoded form.
pub fn validate_ladder_key(candidate: &str) -> ValidationResult<LadderKey> {
    let parsed: Value = serde_json::from_str(candidate).map_err(|_| {
        ValidationError::type_mismatch("", "a JSON-encoded ladder key", "unparseable string")
    })?;
    ladder_key_schema().validate(&parsed)?;
    // Shape fully constrained by the schema above
    Ok(serde_json::from_value(parsed).expect("ladder key already validated"))
}

/// Validates the value side of one ladder entry.
pub fn validate_rung_specs(candidate: &Value) -> ValidationResult<RungSpecs> {
    rung_specs_schema().validate(candidate)?;
    Ok(serde_json::from_value(candidate.clone()).expect("rung specs already validated"))
}

/// Validates a full ladder_specs map, including its cross-field assertions.
pub fn validate_ladder_specs(candidate: &Value) -> ValidationResult<LadderSpecs> {
    ladder_specs_schema().validate(candidate)?;
    Ok(serde_json::from_value(candidate.clone()).expect("ladder specs already validated"))
}

fn media_type_of(value: &Value) -> Option<&str> {
    value.get("media_type").and_then(Value::as_str)
}

fn audio_key_shape(key: &Value) -> bool {
    if media_type_of(key) != Some("audio") {
        return true;
    }
    key.get("channels").is_some()
        && key.get("aspect_ratio_width").is_none()
        && key.get("aspect_ratio_height").is_none()
}

fn video_key_shape(key: &Value) -> bool {
    if media_type_of(key) != Some("video") {
        return true;
    }
    key.get("channels").is_none()
        && key.get("aspect_ratio_width").is_some()
        && key.get("aspect_ratio_height").is_some()
}

fn video_rung_has_dimensions(rung: &Value) -> bool {
    if media_type_of(rung) != Some("video") {
        return true;
    }
    rung.get("height").is_some() && rung.get("width").is_some()
}

fn audio_rung_has_no_dimensions(rung: &Value) -> bool {
    if media_type_of(rung) != Some("audio") {
        return true;
    }
    rung.get("height").is_none() && rung.get("width").is_none()
}

fn rungs_not_empty(ladder: &Value) -> bool {
    ladder
        .pointer("/rung_specs")
        .and_then(Value::as_array)
        .map(|rungs| !rungs.is_empty())
        .unwrap_or(false)
}

fn rungs_share_media_type(ladder: &Value) -> bool {
    let rungs = match ladder.pointer("/rung_specs").and_then(Value::as_array) {
        Some(rungs) => rungs,
        None => return true,
    };
    let mut media_types = rungs.iter().map(media_type_of);
    match media_types.next() {
        Some(first) => media_types.all(|media_type| media_type == first),
        None => true,
    }
}

fn ladder_specs_not_empty(specs: &Value) -> bool {
    specs.as_object().map(|map| !map.is_empty()).unwrap_or(false)
}

/// Each key's media_type must agree with its ladder's rungs. Only
/// `rung_specs[0]` is compared against the key; the rung_specs schema already
/// guarantees all rungs of one ladder agree with each other.
fn ladder_keys_match_rungs(specs: &Value) -> bool {
    let map = match specs.as_object() {
        Some(map) => map,
        None => return true,
    };
    map.iter().all(|(key, ladder)| {
        let key_media_type = serde_json::from_str::<Value>(key)
            .ok()
            .and_then(|key| key.get("media_type").cloned());
        let rung_media_type = ladder.pointer("/rung_specs/0/media_type").cloned();
        key_media_type == rung_media_type
    })
}
