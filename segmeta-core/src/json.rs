/// JSON emission of segmentation records
use std::io::Write;

use crate::error::Result;
use crate::record::SegmentationRecord;

/// Layout of the emitted JSON array
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonStyle {
    /// One field per line
    #[default]
    Pretty,
    /// Whole array on a single line
    Compact,
}

/// Write `records` as one JSON array followed by a newline.
pub fn write_records<W: Write>(
    mut writer: W,
    records: &[SegmentationRecord],
    style: JsonStyle,
) -> Result<()> {
    match style {
        JsonStyle::Pretty => serde_json::to_writer_pretty(&mut writer, records)?,
        JsonStyle::Compact => serde_json::to_writer(&mut writer, records)?,
    }
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Render `records` as a JSON array string.
pub fn to_json_string(records: &[SegmentationRecord], style: JsonStyle) -> Result<String> {
    let mut json = match style {
        JsonStyle::Pretty => serde_json::to_string_pretty(records)?,
        JsonStyle::Compact => serde_json::to_string(records)?,
    };
    json.push('\n');
    Ok(json)
}

/// Read back an array written by [`write_records`].
pub fn read_records(json: &str) -> Result<Vec<SegmentationRecord>> {
    Ok(serde_json::from_str(json)?)
}
