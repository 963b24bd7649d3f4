//! Error types for record and binary decoding.

use std::fmt;
use std::io;

/// Errors that can occur while encoding or decoding gridpoint values.
#[derive(Debug)]
pub enum SerialError {
    /// The text was not valid JSON, or did not describe the requested type
    /// (wrong arity, missing, unknown or duplicate fields, integers outside
    /// `i32`).
    Json(serde_json::Error),
    /// An I/O error occurred during binary read or write.
    Io(io::Error),
    /// Binary data ended partway through a value.
    Malformed {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// A binary stream does not start with the expected magic bytes.
    InvalidMagic,
    /// A binary stream's format version is not supported by this build.
    UnsupportedVersion {
        /// The version found in the stream.
        found: u8,
    },
}

impl fmt::Display for SerialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Malformed { detail } => write!(f, "malformed data: {detail}"),
            Self::InvalidMagic => write!(f, "invalid magic bytes (expected b\"GRPT\")"),
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported format version {found}")
            }
        }
    }
}

impl std::error::Error for SerialError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SerialError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<io::Error> for SerialError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
