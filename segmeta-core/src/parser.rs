/// Tokenizer for whitespace separated segmentation transform files
///
/// Each record is a `room_object` name token followed by four padded
/// 3-vectors: the scaled local axes in [`FILE_AXIS_ORDER`] and the
/// translation in [`FILE_POSITION_ORDER`], each vector followed by one
/// padding scalar.
///
/// [`FILE_AXIS_ORDER`]: crate::axes::FILE_AXIS_ORDER
/// [`FILE_POSITION_ORDER`]: crate::axes::FILE_POSITION_ORDER
use nalgebra::Vector3;
use nom::{
    bytes::complete::{take_till1, take_while},
    combinator::verify,
    number::complete::float,
    sequence::preceded,
    IResult,
};

use crate::obb::{OrientedBox, RawTransform};
use crate::record::{split_compound_name, SegmentationRecord};

/// Records read from an input together with what was left out
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOutcome {
    pub records: Vec<SegmentationRecord>,
    /// Name tokens skipped because they had no room separator
    pub skipped_tokens: usize,
    /// Whether an incomplete record at the end of the input was dropped
    pub truncated: bool,
}

/// Parse every complete record in `input`.
pub fn parse_records(input: &str) -> Vec<SegmentationRecord> {
    parse_records_with_stats(input).records
}

/// Parse every complete record in `input`, also reporting skipped tokens
/// and a dropped trailing record.
///
/// A name token without an underscore consumes only itself. A record whose
/// numbers run out, or hit a token that is not a number, ends the parse and
/// is discarded.
pub fn parse_records_with_stats(input: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();
    let mut rest = input;

    while let Ok((after_name, token)) = name_token(rest) {
        rest = after_name;

        let Some((room, name)) = split_compound_name(token) else {
            tracing::warn!("Skipping token \"{}\": no room separator", token);
            outcome.skipped_tokens += 1;
            continue;
        };

        match raw_transform(rest) {
            Ok((after_record, raw)) => {
                rest = after_record;
                let record = SegmentationRecord::new(room, name, OrientedBox::from_raw(&raw));
                tracing::debug!("Read record \"{}\" in room \"{}\"", record.name, record.room);
                outcome.records.push(record);
            }
            Err(_) => {
                tracing::warn!("Dropping incomplete record \"{}\" at end of input", token);
                outcome.truncated = true;
                break;
            }
        }
    }

    tracing::info!("Read {} records", outcome.records.len());
    outcome
}

fn separator(input: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace)(input)
}

fn name_token(input: &str) -> IResult<&str, &str> {
    preceded(separator, take_till1(char::is_whitespace))(input)
}

// nan, inf and out of range values do not count as numbers
fn scalar(input: &str) -> IResult<&str, f32> {
    preceded(separator, verify(float, |v: &f32| v.is_finite()))(input)
}

fn padded_vector3(input: &str) -> IResult<&str, Vector3<f32>> {
    let (input, x) = scalar(input)?;
    let (input, y) = scalar(input)?;
    let (input, z) = scalar(input)?;
    let (input, _padding) = scalar(input)?;
    Ok((input, Vector3::new(x, y, z)))
}

fn raw_transform(input: &str) -> IResult<&str, RawTransform> {
    let (input, first) = padded_vector3(input)?;
    let (input, second) = padded_vector3(input)?;
    let (input, third) = padded_vector3(input)?;
    let (input, translation) = padded_vector3(input)?;
    Ok((input, RawTransform::new([first, second, third], translation)))
}
