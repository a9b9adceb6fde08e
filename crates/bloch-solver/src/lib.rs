//! Solver backend contract for the Bloch simulation framework.
//!
//! A solver backend is the timestepping kernel that advances the
//! coupled field/density-matrix state. Backends implement [`Solver`],
//! register a zero-argument factory into the [`SolverRegistry`], and
//! are looked up by name at run time. The numerical method itself is
//! entirely the backend's business; this crate only fixes the contract
//! and the shared [`discretize`] pre-step every backend performs before
//! stepping.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use std::error::Error;
use std::fmt;

use bloch_core::{Registry, SimState, Trace};
use bloch_scenario::{Device, Scenario};
use bloch_sources::SourceError;

/// Registry of solver backends.
pub type SolverRegistry = Registry<Box<dyn Solver>>;

/// Everything a solver run produces.
#[derive(Debug, Default)]
pub struct SolverOutput {
    /// One trace per requested record.
    pub traces: Vec<Trace>,
    /// Raw end-of-run state for autosave/restart.
    pub state: SimState,
}

/// Errors from a solver run.
#[derive(Debug)]
pub enum SolverError {
    /// Binding the scenario's sources to the derived timestep failed.
    Source(SourceError),
    /// A backend-specific failure during setup or stepping.
    Backend {
        /// Backend-provided description.
        reason: String,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(e) => write!(f, "source configuration failed: {e}"),
            Self::Backend { reason } => write!(f, "solver backend failed: {reason}"),
        }
    }
}

impl Error for SolverError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Source(e) => Some(e),
            Self::Backend { .. } => None,
        }
    }
}

impl From<SourceError> for SolverError {
    fn from(e: SourceError) -> Self {
        Self::Source(e)
    }
}

/// A timestepping backend that runs a scenario against a device.
///
/// The scenario is mutable during the run solely so the backend can
/// inject the derived discretization and the per-source timestep (see
/// [`discretize`]); everything else is consumed read-only.
pub trait Solver {
    /// Backend name, as registered.
    fn name(&self) -> &str;

    /// Run the scenario to completion, producing one trace per
    /// requested record plus the raw end state.
    fn run(&self, device: &Device, scenario: &mut Scenario) -> Result<SolverOutput, SolverError>;
}

/// Derive a coherent discretization and bind every source to it.
///
/// The shared pre-step of every backend: lay `num_gridpoints` over the
/// device length, derive the timestep from the Courant condition at the
/// given propagation `velocity`, round the timestep count up to cover
/// the end time, write the set back into the scenario, and push the
/// timestep into every source — which is where a thermal source
/// synthesizes its spectrum and where its deferred Nyquist check runs.
///
/// This is the supported way to obtain a coherent discretization; the
/// scenario's direct setters intentionally perform no such derivation.
///
/// # Errors
///
/// Returns [`SolverError::Source`] if any source rejects the derived
/// timestep.
pub fn discretize(
    scenario: &mut Scenario,
    device: &Device,
    velocity: f64,
) -> Result<(), SolverError> {
    let gridpoint_size = device.length() / scenario.num_gridpoints().saturating_sub(1).max(1) as f64;
    let timestep_size = scenario.courant_number() * gridpoint_size / velocity;
    let num_timesteps = (scenario.endtime() / timestep_size).ceil() as u32 + 1;

    scenario.set_gridpoint_size(gridpoint_size);
    scenario.set_timestep_size(timestep_size);
    scenario.set_num_timesteps(num_timesteps);

    for source in scenario.sources_mut() {
        source.set_timestep_size(timestep_size)?;
    }
    Ok(())
}
