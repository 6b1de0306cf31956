//! Error types for the autopaging library.

use std::io;
use thiserror::Error;

/// Result type alias for autopaging operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading settings or handling block markup.
///
/// Pagination itself never fails; these surface from the edges (option
/// snapshots, block codecs) and are turned into no-ops by the filter.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading an options file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Options snapshot is not valid JSON or has the wrong shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Block markup could not be parsed.
    #[error("Block parsing error at byte {offset}: {message}")]
    BlockParse {
        /// Byte offset of the offending delimiter
        offset: usize,
        /// What went wrong
        message: String,
    },

    /// An option value was outside anything we can interpret.
    #[error("Invalid option {name}: {value}")]
    InvalidOption {
        /// Option name
        name: &'static str,
        /// Offending value
        value: String,
    },
}
