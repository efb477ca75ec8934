//! Error types for rs-boilerpipe.
//!
//! This module defines the error types returned by document construction
//! and extraction operations.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A filter stage failed while processing a document.
    ///
    /// Extractors propagate this unchanged; stages are never retried.
    #[error("Processing failed: {0}")]
    ProcessingError(String),

    /// Block statistics supplied by the producer are inconsistent.
    #[error("Invalid text block: {0}")]
    InvalidBlock(String),

    /// The given name does not identify a known extractor.
    #[error("Unknown extractor: {0}")]
    UnknownExtractor(String),

    /// Reading or writing a document failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decoding or encoding failed.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
