//! Error types for decoding, encoding and pipeline operations.
//!
//! The merge itself cannot fail; every variant here comes from turning text
//! into a tree or a tree back into text.

use thiserror::Error;

/// Errors that can occur while decoding, encoding or merging documents.
#[derive(Error, Debug)]
pub enum YmergeError {
    /// The input was not valid JSON, or the tree could not be written as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input was not valid YAML. Carries the parser's message, which
    /// includes the location when the parser knows it.
    #[error("YAML parse error: {0}")]
    Yaml(String),

    /// The tree could not be written in the requested format.
    #[error("Encoding error: {0}")]
    Encode(String),

    /// A format name that is neither `yaml` nor `json`.
    #[error("Unknown format: '{0}'. Available formats: yaml, json")]
    UnknownFormat(String),

    /// Decoding the document at `index` (zero-based) failed.
    #[error("document {index}: {source}")]
    Document {
        index: usize,
        #[source]
        source: Box<YmergeError>,
    },

    /// A merge was requested over an empty list of documents.
    #[error("no documents to merge")]
    NoDocuments,
}

/// Convenience alias used throughout ymerge-core.
pub type Result<T> = std::result::Result<T, YmergeError>;
