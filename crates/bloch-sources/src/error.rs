//! Error types for source configuration.

use std::error::Error;
use std::fmt;

/// Errors surfaced when a source is bound to a timestep.
///
/// The checks here are deferred by design: a source does not know the
/// solver's timestep at construction time, so bounds that depend on it
/// can only be verified in `set_timestep_size`.
#[derive(Clone, Debug, PartialEq)]
pub enum SourceError {
    /// A thermal-noise source was configured with a maximum frequency
    /// above the Nyquist limit implied by the timestep.
    AboveNyquist {
        /// The configured maximum frequency (Hz).
        requested: f64,
        /// The Nyquist limit `1 / (2 * timestep_size)` (Hz).
        limit: f64,
    },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AboveNyquist { requested, limit } => write!(
                f,
                "max frequency {requested:.3e} Hz exceeds the Nyquist limit \
                 {limit:.3e} Hz implied by the timestep"
            ),
        }
    }
}

impl Error for SourceError {}
