//! Error types for the paperdigest library.

use std::io;
use thiserror::Error;

/// Result type alias for paperdigest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while structuring and summarizing a paper.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The source document could not be read or parsed into page blocks.
    #[error("Parse failure: {0}")]
    ParseFailure(String),

    /// A model capability failed to load.
    #[error("{capability} capability unavailable: {reason}")]
    ModelUnavailable {
        /// Which capability failed ("embedding", "generation", "keywords").
        capability: &'static str,
        /// Underlying reason reported by the provider.
        reason: String,
    },

    /// The embedding capability failed while encoding sentences.
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// The generation capability failed while producing a summary.
    #[error("Generation error: {0}")]
    Generation(String),

    /// Keyword extraction failed.
    #[error("Keyword extraction error: {0}")]
    Keyword(String),

    /// Document-level failure, reported with the document identifier and a
    /// reason instead of a raw backtrace.
    #[error("Failed to summarize document '{id}': {reason}")]
    Document {
        /// Document identifier (usually the file path).
        id: String,
        /// Short reason code or message.
        reason: String,
    },

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Build a document-level error from an identifier and reason.
    pub fn document(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Document {
            id: id.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ModelUnavailable {
            capability: "embedding",
            reason: "weights not found".into(),
        };
        assert_eq!(
            err.to_string(),
            "embedding capability unavailable: weights not found"
        );

        let err = Error::document("paper.pdf", "no extractable text");
        assert_eq!(
            err.to_string(),
            "Failed to summarize document 'paper.pdf': no extractable text"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
