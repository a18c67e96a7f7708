//! Error types for `MaxMesh`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `MaxMesh` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A source, replacement or output file could not be opened.
    #[error("unable to open {}: {source}", .path.display())]
    FileOpen {
        /// The path that failed to open.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    // ==================== Index Errors ====================
    /// One or more requested record indices do not name a record.
    #[error("{}", describe_invalid_indices(.invalid, .count))]
    IndexOutOfRange {
        /// Every rejected index, in request order.
        invalid: Vec<i64>,
        /// Number of records in the container.
        count: usize,
    },

    /// A replace request carried no indices at all.
    #[error("no record indices specified")]
    NoIndices,

    // ==================== Malformed Input Errors ====================
    /// A fixed-size field would extend past the end of the buffer.
    #[error("truncated data: {needed} bytes at offset {offset} exceed buffer of {len} bytes")]
    Truncated {
        /// Offset of the field.
        offset: usize,
        /// Width of the field in bytes.
        needed: usize,
        /// Length of the buffer that was read.
        len: usize,
    },

    /// The container is too short to hold the aggregate counter block.
    #[error("container too short for header counters: {len} bytes, need at least {needed}")]
    HeaderTooShort {
        /// Actual container length.
        len: usize,
        /// Minimum length required.
        needed: usize,
    },

    /// A record is too short to carry its fixed header and identity signature.
    #[error("record {index} is only {len} bytes, need at least {needed}")]
    RecordTooShort {
        /// Index of the record.
        index: usize,
        /// Actual record length.
        len: usize,
        /// Minimum length required.
        needed: usize,
    },

    /// The replacement data is too short to be a record.
    #[error("replacement data is only {len} bytes, need at least {needed}")]
    ReplacementTooShort {
        /// Actual replacement length.
        len: usize,
        /// Minimum length required.
        needed: usize,
    },

    // ==================== Serialization Errors ====================
    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn describe_invalid_indices(invalid: &[i64], count: &usize) -> String {
    let count = *count;
    let list = invalid
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    if count == 0 {
        format!("invalid index {list}: the container holds no meshes")
    } else {
        format!(
            "invalid index {list}: there are only {count} meshes (valid indices are 0 to {})",
            count - 1
        )
    }
}

/// A specialized Result type for `MaxMesh` operations.
pub type Result<T> = std::result::Result<T, Error>;
