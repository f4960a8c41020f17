/// Error types for record emission

use std::io;
use thiserror::Error;

/// Result type for segmeta operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while writing or re-reading record JSON
///
/// Parsing the segmentation text itself never fails; malformed input is
/// skipped or truncated instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Serializing or deserializing JSON failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the output failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
