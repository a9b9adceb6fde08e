//! Error types for the binary storage backend.

use std::fmt;
use std::io;

use bloch_io::IoError;

/// Errors that can occur while encoding or decoding a store file.
#[derive(Debug)]
pub enum StoreError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// The file does not start with the expected `b"BLCH"` magic bytes.
    InvalidMagic,
    /// The format version is not supported by this build.
    UnsupportedVersion {
        /// The version found in the file.
        found: u8,
    },
    /// A section could not be decoded (truncated or corrupt data).
    MalformedSection {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// The file contains no section answering the request.
    MissingSection {
        /// The requested field or namespace name.
        name: String,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidMagic => write!(f, "invalid magic bytes (expected b\"BLCH\")"),
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported format version {found}")
            }
            Self::MalformedSection { detail } => write!(f, "malformed section: {detail}"),
            Self::MissingSection { name } => write!(f, "no section named '{name}' in file"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<StoreError> for IoError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Io(io) => IoError::Io(io),
            other => IoError::Backend {
                detail: other.to_string(),
            },
        }
    }
}
