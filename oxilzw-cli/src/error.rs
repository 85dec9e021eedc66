//! Error type for CLI operations.

use oxilzw::LzwError;
use std::io;
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Compression or decompression failed.
    #[error(transparent)]
    Lzw(#[from] LzwError),

    /// I/O error while reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Session file could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A token in a code stream is not a non-negative integer.
    #[error("Invalid code {token:?} at index {index}")]
    InvalidCode {
        /// The offending token.
        token: String,
        /// Token index in the stream.
        index: usize,
    },

    /// Session id that cannot be used as a file name.
    #[error("Invalid session id {id:?}: use ASCII letters, digits, '-' or '_'")]
    InvalidSessionId {
        /// The rejected id.
        id: String,
    },

    /// No session stored under this id.
    #[error("Session not found: {id}")]
    SessionNotFound {
        /// The missing id.
        id: String,
    },

    /// Encoding label not known to the WHATWG encoding standard.
    #[error("Unknown encoding {label:?}")]
    UnknownEncoding {
        /// The rejected label.
        label: String,
    },

    /// Text that cannot be converted to or from the requested encoding.
    #[error("{path} is not representable as {encoding}")]
    MalformedText {
        /// File being read or written.
        path: String,
        /// Encoding name.
        encoding: String,
    },

    /// Decompressed text differs from the reference text.
    #[error("Decompressed text does not match {reference}: first difference at character {position}")]
    VerificationFailed {
        /// What the text was compared against.
        reference: String,
        /// Character index of the first difference.
        position: usize,
    },
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

impl CliError {
    /// Create an invalid code error.
    pub fn invalid_code(token: impl Into<String>, index: usize) -> Self {
        Self::InvalidCode {
            token: token.into(),
            index,
        }
    }

    /// Create a malformed text error.
    pub fn malformed_text(path: &std::path::Path, encoding: &str) -> Self {
        Self::MalformedText {
            path: path.display().to_string(),
            encoding: encoding.to_string(),
        }
    }

    /// Create a session not found error.
    pub fn session_not_found(id: impl Into<String>) -> Self {
        Self::SessionNotFound { id: id.into() }
    }
}
