/// segmeta core library - oriented bounding boxes from segmentation transforms
///
/// Reads the whitespace separated per-object transforms of a segmented
/// scene, rebuilds an oriented bounding box for every `room_object` record
/// and writes the records out as a JSON array.

pub mod axes;
pub mod error;
pub mod json;
pub mod obb;
pub mod parser;
pub mod record;

// Re-export commonly used types
pub use axes::{Axis, FILE_AXIS_ORDER, FILE_POSITION_ORDER};
pub use error::{Error, Result};
pub use json::{read_records, to_json_string, write_records, JsonStyle};
pub use obb::{OrientedBox, RawTransform};
pub use parser::{parse_records, parse_records_with_stats, ParseOutcome};
pub use record::SegmentationRecord;
