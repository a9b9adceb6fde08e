//! Bloch: scenario modelling and extension registries for Maxwell-Bloch
//! simulations.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Bloch sub-crates. For most users, adding `bloch` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use bloch::prelude::*;
//!
//! // Describe the simulated structure and the run.
//! let device = Device::new("ziolkowski", 150e-6);
//! let mut scenario = Scenario::new(
//!     "basic",
//!     32768,
//!     200e-15,
//!     DensityInit::constant(QmOperator::diagonal(vec![1.0, 0.0])),
//! );
//! scenario.add_record(Record::new("e", 2.5e-15));
//! scenario.add_source(Source::sech_pulse(
//!     "sech", 0.0, SourceKind::Hard, 4.2186e9, 2e14, 10.0, 2e14, 0.0,
//! ));
//!
//! // Backends are registered explicitly at startup and looked up by
//! // name when needed.
//! let backends = Backends::with_builtin().unwrap();
//! let writer = backends.writers.create("bin").unwrap();
//! assert_eq!(writer.extension(), "bin");
//! # let _ = (device, scenario);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`core`] | `bloch-core` | Constants, density operator, records, traces, registry |
//! | [`sources`] | `bloch-sources` | Pulse shapes and thermal-noise synthesis |
//! | [`scenario`] | `bloch-scenario` | Device, initial conditions, the scenario aggregate |
//! | [`io`] | `bloch-io` | Reader/writer contracts and registries |
//! | [`solver`] | `bloch-solver` | Solver contract, registry, discretization |
//! | [`store`] | `bloch-store` | Binary storage backend (`"bin"`) |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types and the generic registry (`bloch-core`).
pub use bloch_core as core;

/// Reader/writer contracts and registries (`bloch-io`).
pub use bloch_io as io;

/// Device, initial conditions, and the scenario aggregate
/// (`bloch-scenario`).
pub use bloch_scenario as scenario;

/// Solver contract and discretization helper (`bloch-solver`).
pub use bloch_solver as solver;

/// Pulse shapes and thermal-noise synthesis (`bloch-sources`).
pub use bloch_sources as sources;

/// Binary storage backend (`bloch-store`).
pub use bloch_store as store;

use bloch_core::RegistryError;
use bloch_io::{ReaderRegistry, WriterRegistry};
use bloch_solver::SolverRegistry;

/// The three extension registries, bundled.
///
/// Process-wide state with a defined initialization point: construct
/// the bundle at program start, register every backend explicitly (in
/// a fixed order), then share it read-only. Nothing registers itself
/// as a side effect of being linked in.
pub struct Backends {
    /// Solver backends, by name.
    pub solvers: SolverRegistry,
    /// File-reader backends, by name.
    pub readers: ReaderRegistry,
    /// File-writer backends, by name.
    pub writers: WriterRegistry,
}

impl Backends {
    /// Three empty registries.
    pub fn new() -> Self {
        Self {
            solvers: SolverRegistry::new(),
            readers: ReaderRegistry::new(),
            writers: WriterRegistry::new(),
        }
    }

    /// Empty solver registry plus the built-in storage backend
    /// registered under `"bin"`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::AlreadyRegistered`] only if called on
    /// registries that somehow already hold the name — impossible for
    /// a fresh bundle.
    pub fn with_builtin() -> Result<Self, RegistryError> {
        let mut backends = Self::new();
        bloch_store::register(&mut backends.readers, &mut backends.writers)?;
        Ok(backends)
    }
}

impl Default for Backends {
    fn default() -> Self {
        Self::new()
    }
}

/// The most common imports, re-exported flat.
///
/// ```rust
/// use bloch::prelude::*;
/// ```
pub mod prelude {
    pub use bloch_core::{QmOperator, Record, Registry, RegistryError, SimState, Trace};
    pub use bloch_io::{IoError, Reader, ReaderRegistry, Writer, WriterRegistry};
    pub use bloch_scenario::{DensityInit, Device, FieldInit, Scenario};
    pub use bloch_solver::{discretize, Solver, SolverError, SolverOutput, SolverRegistry};
    pub use bloch_sources::{Source, SourceError, SourceKind, ThermalNoise, Waveform};

    pub use crate::Backends;
}
