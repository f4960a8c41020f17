/// Segmentation records and their JSON shape
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::obb::OrientedBox;

/// Art & Architecture Thesaurus id given to every freshly parsed record
pub const DEFAULT_AAT_ID: u32 = 0;

/// Art & Architecture Thesaurus link given to every freshly parsed record
pub const DEFAULT_AAT_LINK: &str = "UNDEFINED";

/// One object of a segmented scene with its oriented bounding box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "RecordJson", from = "RecordJson")]
pub struct SegmentationRecord {
    pub name: String,
    pub room: String,
    pub aat_id: u32,
    pub aat_link: String,
    pub bbox: OrientedBox,
}

impl SegmentationRecord {
    pub fn new(room: impl Into<String>, name: impl Into<String>, bbox: OrientedBox) -> Self {
        Self {
            name: name.into(),
            room: room.into(),
            aat_id: DEFAULT_AAT_ID,
            aat_link: DEFAULT_AAT_LINK.to_string(),
            bbox,
        }
    }
}

/// Split a `room_object` token at its first underscore.
///
/// Returns `None` when the token has no underscore. The object part keeps
/// any further underscores.
pub fn split_compound_name(token: &str) -> Option<(&str, &str)> {
    token.split_once('_')
}

#[derive(Serialize, Deserialize)]
struct RecordJson {
    name: String,
    room: String,
    #[serde(default)]
    aat_id: u32,
    #[serde(default = "default_aat_link")]
    aat_link: String,
    bbox_position: [f32; 3],
    bbox_scale: [f32; 3],
    bbox_axis_x: [f32; 3],
    bbox_axis_y: [f32; 3],
    bbox_axis_z: [f32; 3],
}

fn default_aat_link() -> String {
    DEFAULT_AAT_LINK.to_string()
}

fn to_array(v: Vector3<f32>) -> [f32; 3] {
    [v.x, v.y, v.z]
}

impl From<SegmentationRecord> for RecordJson {
    fn from(record: SegmentationRecord) -> Self {
        let bbox = record.bbox;
        Self {
            name: record.name,
            room: record.room,
            aat_id: record.aat_id,
            aat_link: record.aat_link,
            bbox_position: to_array(bbox.position),
            bbox_scale: to_array(bbox.scale),
            bbox_axis_x: to_array(bbox.axis(0)),
            bbox_axis_y: to_array(bbox.axis(1)),
            bbox_axis_z: to_array(bbox.axis(2)),
        }
    }
}

impl From<RecordJson> for SegmentationRecord {
    fn from(json: RecordJson) -> Self {
        Self {
            name: json.name,
            room: json.room,
            aat_id: json.aat_id,
            aat_link: json.aat_link,
            bbox: OrientedBox::from_axis_rows(
                Vector3::from(json.bbox_position),
                Vector3::from(json.bbox_scale),
                [
                    Vector3::from(json.bbox_axis_x),
                    Vector3::from(json.bbox_axis_y),
                    Vector3::from(json.bbox_axis_z),
                ],
            ),
        }
    }
}
