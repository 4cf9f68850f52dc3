//! Error kinds raised while reading repository state
//!
//! Every decoding failure aborts the status computation, so each kind carries enough
//! context to tell the operator which object, path or field was at fault.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used by the readers and decoders
pub type Result<T> = std::result::Result<T, StatusError>;

#[derive(Debug, Error)]
pub enum StatusError {
    /// No loose object file exists for the hash
    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    /// Stored bytes are not a valid zlib stream
    #[error("Unable to decompress object {oid}: {source}")]
    DecompressionError {
        oid: String,
        #[source]
        source: std::io::Error,
    },

    /// Commit payload carries no `tree <hash>` line
    #[error("Malformed commit {0}: missing tree reference")]
    MalformedCommit(String),

    /// Tree entry with a mode other than a regular file
    #[error("Unsupported tree entry mode {mode:?} for {path:?}")]
    UnsupportedMode { mode: String, path: String },

    /// Working tree entry that is not a plain file
    #[error("Unsupported subdirectory in working tree: {0}")]
    UnsupportedSubdirectory(PathBuf),

    /// An expected field could not be extracted from decoded data
    #[error("Undefined field: {0}")]
    UndefinedField(String),

    #[error("Invalid object ID: {0}")]
    InvalidObjectId(String),

    #[error("Invalid reference pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Not a git repository: {0}")]
    NotARepository(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StatusError {
    /// Build an `UndefinedField` error for a named field
    pub fn undefined(field: impl Into<String>) -> Self {
        StatusError::UndefinedField(field.into())
    }
}
