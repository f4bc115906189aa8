//! Error types for document loading.

use std::fmt;

/// Which knowledge document failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentKind {
    /// The detailed knowledge base.
    KnowledgeBase,
    /// The general university summary.
    Summary,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::KnowledgeBase => "knowledge base",
            Self::Summary => "university summary",
        })
    }
}

/// A knowledge document could not be loaded.
#[derive(Debug, thiserror::Error)]
#[error("Failed to load {document} from {location}")]
pub struct LoadError {
    /// Document that failed.
    pub document: DocumentKind,
    /// Location as configured.
    pub location: String,
    /// Underlying failure.
    #[source]
    pub cause: FetchError,
}

/// Failure reading a single location.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Reading a local file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] ureq::Error),

    /// Server returned an error status.
    #[error("HTTP error: {status}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
    },

    /// The document holds no text.
    #[error("document is empty")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_shows_cause() {
        let err = FetchError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        assert_eq!(err.to_string(), "I/O error: no such file");
    }
}
