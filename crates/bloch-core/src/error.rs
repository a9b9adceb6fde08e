//! Error types shared across the registry machinery.

use std::error::Error;
use std::fmt;

/// Errors from [`Registry`](crate::Registry) operations.
///
/// Registration is additive for the lifetime of the registry, so the
/// only failure modes are binding a name twice and looking up a name
/// that was never bound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// `register` was called with a name that is already bound.
    AlreadyRegistered {
        /// The name that was bound before.
        name: String,
    },
    /// `create` was called with a name that is not bound.
    NotFound {
        /// The name that was looked up.
        name: String,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyRegistered { name } => {
                write!(f, "'{name}' is already registered")
            }
            Self::NotFound { name } => write!(f, "'{name}' is not registered"),
        }
    }
}

impl Error for RegistryError {}
