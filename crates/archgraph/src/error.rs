//! Error types for archgraph operations.
//!
//! Building and laying out a graph cannot fail. [`ArchGraphError`] covers
//! the surrounding steps: decoding the input, reading configuration, and
//! exporting the result.

use std::io;

use thiserror::Error;

/// The main error type for archgraph operations.
///
/// The `Decode` variant keeps the source text next to the JSON error so
/// callers can point at the failing line and column.
#[derive(Debug, Error)]
pub enum ArchGraphError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid architecture description: {err}")]
    Decode { err: serde_json::Error, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl ArchGraphError {
    /// Create a new `Decode` error with the associated source text.
    pub fn new_decode_error(err: serde_json::Error, src: impl Into<String>) -> Self {
        Self::Decode {
            err,
            src: src.into(),
        }
    }
}
