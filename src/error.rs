//! Error types for distmodel
//!
//! Uses `thiserror` for library errors. Non-fatal conditions (reference
//! cycles, duplicate descriptors) are not errors; they are reported through
//! the diagnostics port instead.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for distmodel operations
pub type DistResult<T> = Result<T, DistError>;

/// Main error type for distmodel operations
#[derive(Error, Debug)]
pub enum DistError {
    /// The VFS document does not have the expected structure
    #[error("malformed VFS document: {message}")]
    MalformedDocument { message: String },

    /// A copy element points at an identity that no node in the document has
    #[error("dangling reference to '{id}' from copy element in '{referenced_from}'")]
    DanglingReference { id: String, referenced_from: String },

    /// A content element carries an unknown `@type` tag
    #[error("unsupported content @type '{type_tag}' in '{node}'")]
    UnsupportedContentType { type_tag: String, node: String },

    /// Two nodes of one document claim the same `@id`
    #[error("duplicate node identity '{id}'")]
    DuplicateIdentity { id: String },

    /// A path could not be resolved against the overlay tree
    #[error("error while processing path `{path}`, element `{component}`: {reason}")]
    InvalidPath {
        path: String,
        component: String,
        reason: String,
    },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DistError {
    /// Build a `MalformedDocument` error from any displayable cause
    pub fn malformed(message: impl std::fmt::Display) -> Self {
        DistError::MalformedDocument {
            message: message.to_string(),
        }
    }
}
