//! Error types for rs-readability.
//!
//! Only failures that leave the caller with nothing usable surface as errors.
//! A document without a content candidate is still a successful extraction
//! whose `content` is `None`.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document could not be turned into a tree.
    #[error("HTML parsing failed: {0}")]
    ParseError(String),

    /// The fetch collaborator could not retrieve the document.
    #[error("Fetching document failed: {0}")]
    FetchError(String),

    /// A location identifier could not be parsed as a URL.
    #[error("Invalid document location: {0}")]
    InvalidLocation(String),
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidLocation(err.to_string())
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
