//! Error handling for the floor plan editor
//!
//! Command application never fails: invalid references and degenerate
//! geometry surface as an unchanged plan. The only fallible surface of the
//! core is reading a plan document, which is described here.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Plan document error type
///
/// Returned when an exported plan document cannot be turned back into a plan.
#[derive(Error, Debug)]
pub enum PlanDocumentError {
    /// The document has no schema version tag
    #[error("Plan document has no version tag")]
    MissingVersion,

    /// The text is not valid JSON or does not match the plan schema
    #[error("Invalid plan JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The document parsed but is not a JSON object
    #[error("Invalid plan document: {reason}")]
    InvalidDocument {
        /// Why the document was rejected.
        reason: String,
    },
}

/// Main error type
#[derive(Error, Debug)]
pub enum Error {
    /// Plan document error
    #[error(transparent)]
    Document(#[from] PlanDocumentError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a plan document error
    pub fn is_document_error(&self) -> bool {
        matches!(self, Error::Document(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
