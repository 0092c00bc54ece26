//! Validated ABR profile entities
//!
//! These are the strongly typed views returned once schema validation has
//! succeeded. All of them are plain immutable data; serializing a validated
//! entity reproduces a document structurally equal to the input.
//!
//! Ladder maps stay keyed by the original serialized key string, which acts as
//! a display-only identifier; [`LadderKey`] is the decoded form.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

/// Media stream category a ladder or rung applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Audio,
    Video,
}

impl MediaType {
    /// Returns the wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Audio => "audio",
            MediaType::Video => "video",
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Decoded form of a ladder map key.
///
/// Keys are serialized JSON objects discriminated on `media_type`: audio keys
/// carry a channel count, video keys an aspect ratio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "media_type", rename_all = "lowercase")]
pub enum LadderKey {
    Audio {
        channels: u64,
    },
    Video {
        aspect_ratio_width: u64,
        aspect_ratio_height: u64,
    },
}

impl LadderKey {
    pub fn media_type(&self) -> MediaType {
        match self {
            LadderKey::Audio { .. } => MediaType::Audio,
            LadderKey::Video { .. } => MediaType::Video,
        }
    }
}

/// One encoding rung: a single bitrate/resolution variant within a ladder.
///
/// Video rungs carry both dimensions; audio rungs carry neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RungSpec {
    pub bit_rate: u64,
    pub media_type: MediaType,
    pub pregenerate: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u64>,
}

/// The value side of one ladder entry: a non-empty rung sequence sharing one
/// media type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RungSpecs {
    pub rung_specs: Vec<RungSpec>,
}

impl RungSpecs {
    /// Media type shared by the rungs, if any are present
    pub fn media_type(&self) -> Option<MediaType> {
        self.rung_specs.first().map(|rung| rung.media_type)
    }
}

/// All ladders of a profile, keyed by their serialized ladder key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LadderSpecs {
    pub ladders: BTreeMap<String, RungSpecs>,
}

impl LadderSpecs {
    pub fn len(&self) -> usize {
        self.ladders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ladders.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&RungSpecs> {
        self.ladders.get(key)
    }
}

/// DRM description inside a playout format; `type` names the DRM standard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrmSpec {
    #[serde(rename = "type")]
    pub kind: String,
    pub enc_scheme_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_servers: Option<Vec<String>>,
}

/// Streaming protocol description inside a playout format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolSpec {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_buffer_length: Option<u64>,
}

/// One playout format: a protocol plus a DRM standard (`None` = clear playout).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutFormat {
    pub drm: Option<DrmSpec>,
    pub protocol: ProtocolSpec,
}

/// Playout formats to make available, keyed by format name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayoutFormats {
    pub formats: BTreeMap<String, PlayoutFormat>,
}

/// Segment policy for one media type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentSpec {
    pub segs_per_chunk: u64,
    pub target_dur: Number,
}

/// Segment policies, keyed by media type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentSpecs {
    pub specs: BTreeMap<MediaType, SegmentSpec>,
}

/// Image watermark information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageWatermark {
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_h: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_v: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_h: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_v: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_video_height: Option<u64>,
}

/// Text watermark information (the profile field is `simple_watermark`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextWatermark {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_h: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_v: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_relative_size: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<String>,
}

/// JSON Patch operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOpKind {
    Add,
    Remove,
    Replace,
    Move,
    Copy,
    Test,
}

/// One JSON Patch operation applied to a copy of the mezzanine offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchOperation {
    pub op: PatchOpKind,
    pub path: String,
    /// `None` means the field was absent; an explicit JSON `null` is
    /// `Some(Value::Null)` and survives re-serialization.
    #[serde(
        default,
        deserialize_with = "patch_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

/// Keeps a present `null` distinct from an absent `value` field.
fn patch_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Post-transcode offering patches, in application order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdditionalOfferingSpecs {
    pub operations: Vec<PatchOperation>,
}

/// Parametric video ladder; interior owned by the ladder generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoParametricLadder {
    pub fields: Map<String, Value>,
}

/// The validated root profile. Sealed: no fields beyond those below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbrProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<String>>,
    /// If `true`, clear playout is allowed
    pub drm_optional: bool,
    /// If `true`, storing parts without encryption is allowed
    pub store_clear: bool,
    pub ladder_specs: LadderSpecs,
    pub playout_formats: PlayoutFormats,
    pub segment_specs: SegmentSpecs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_watermark: Option<ImageWatermark>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simple_watermark: Option<TextWatermark>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_offering_specs: Option<AdditionalOfferingSpecs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_parametric_ladder: Option<VideoParametricLadder>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ladder_key_is_discriminated_on_media_type() {
        let key: LadderKey =
            serde_json::from_value(json!({"media_type": "audio", "channels": 2})).unwrap();
        assert_eq!(key, LadderKey::Audio { channels: 2 });
        assert_eq!(key.media_type(), MediaType::Audio);

        let key: LadderKey = serde_json::from_value(json!({
            "media_type": "video",
            "aspect_ratio_width": 16,
            "aspect_ratio_height": 9
        }))
        .unwrap();
        assert_eq!(key.media_type(), MediaType::Video);
    }

    #[test]
    fn test_audio_rung_serializes_without_dimensions() {
        let rung = RungSpec {
            bit_rate: 128000,
            media_type: MediaType::Audio,
            pregenerate: true,
            height: None,
            width: None,
        };
        assert_eq!(
            serde_json::to_value(&rung).unwrap(),
            json!({"bit_rate": 128000, "media_type": "audio", "pregenerate": true})
        );
    }

    #[test]
    fn test_rung_specs_media_type_is_first_rung() {
        let specs: RungSpecs = serde_json::from_value(json!({
            "rung_specs": [
                {"bit_rate": 4900000, "media_type": "video", "pregenerate": true, "height": 1080, "width": 1920},
                {"bit_rate": 3375000, "media_type": "video", "pregenerate": false, "height": 720, "width": 1280}
            ]
        }))
        .unwrap();
        assert_eq!(specs.media_type(), Some(MediaType::Video));

        let empty = RungSpecs { rung_specs: vec![] };
        assert_eq!(empty.media_type(), None);
    }

    #[test]
    fn test_segment_specs_keyed_by_media_type() {
        let specs: SegmentSpecs = serde_json::from_value(json!({
            "audio": {"segs_per_chunk": 15, "target_dur": 30},
            "video": {"segs_per_chunk": 15, "target_dur": 30}
        }))
        .unwrap();
        assert_eq!(specs.specs.len(), 2);
        assert!(specs.specs.contains_key(&MediaType::Audio));

        // Round trip preserves the string keys
        let back = serde_json::to_value(&specs).unwrap();
        assert!(back.get("audio").is_some());
        assert!(back.get("video").is_some());
    }

    #[test]
    fn test_clear_playout_format_round_trips() {
        let doc = json!({"drm": null, "protocol": {"type": "ProtoDash"}});
        let format: PlayoutFormat = serde_json::from_value(doc.clone()).unwrap();
        assert!(format.drm.is_none());
        assert_eq!(serde_json::to_value(&format).unwrap(), doc);
    }
}
