//! Reader and writer contracts for the Bloch simulation framework.
//!
//! Storage backends implement [`Reader`] and [`Writer`] and register
//! zero-argument factories into the [`ReaderRegistry`] and
//! [`WriterRegistry`]. The core treats the persisted encoding as
//! opaque; backends only promise the format-agnostic namespace layout:
//! a setup namespace of scenario/device scalars, one namespace per
//! result trace, and a density namespace for autosaved state.
//!
//! Backend failures surface as [`IoError`] and are not interpreted
//! further — a failed call is a failed call.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use std::error::Error;
use std::fmt;
use std::io;
use std::path::Path;

use bloch_core::{QmOperator, Registry, SimState, Trace};
use bloch_scenario::{Device, Scenario};

/// Registry of file-reader backends.
pub type ReaderRegistry = Registry<Box<dyn Reader>>;

/// Registry of file-writer backends.
pub type WriterRegistry = Registry<Box<dyn Writer>>;

/// Errors crossing the reader/writer boundary.
///
/// The storage backend is the only party that understands the format;
/// anything it reports beyond a raw I/O failure travels as an opaque
/// detail string.
#[derive(Debug)]
pub enum IoError {
    /// An operating-system I/O failure.
    Io(io::Error),
    /// A backend-specific failure (malformed data, missing dataset, …).
    Backend {
        /// Backend-provided description.
        detail: String,
    },
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Backend { detail } => write!(f, "storage backend error: {detail}"),
        }
    }
}

impl Error for IoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Backend { .. } => None,
        }
    }
}

impl From<io::Error> for IoError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// A file-format backend that restores autosaved simulation state.
pub trait Reader {
    /// Backend name, as registered.
    fn name(&self) -> &str;

    /// File extension this backend conventionally uses.
    fn extension(&self) -> &str;

    /// Read the autosaved field vector named `field` (e.g. `"e"`,
    /// `"h"`, `"p"`) from `file`.
    fn read_field(&self, file: &Path, field: &str) -> Result<Vec<f64>, IoError>;

    /// Read the autosaved density matrices from `file`, one per
    /// spatial grid index.
    fn read_density(&self, file: &Path) -> Result<Vec<QmOperator>, IoError>;
}

/// A file-format backend that persists simulation output.
pub trait Writer {
    /// Backend name, as registered.
    fn name(&self) -> &str;

    /// File extension this backend conventionally uses.
    fn extension(&self) -> &str;

    /// Persist result traces plus scenario metadata (name,
    /// timestep_size, gridpoint_size, endtime) and device metadata
    /// (name, length) to `file`.
    fn write(
        &self,
        file: &Path,
        traces: &[Trace],
        device: &Device,
        scenario: &Scenario,
    ) -> Result<(), IoError>;

    /// Persist the raw field and density state to `file` so a later
    /// run can restart from it via the autosave-backed
    /// initial-condition strategies.
    fn autosave(
        &self,
        file: &Path,
        state: &SimState,
        device: &Device,
        scenario: &Scenario,
    ) -> Result<(), IoError>;
}
