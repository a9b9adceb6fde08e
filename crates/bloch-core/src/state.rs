//! Raw simulation state for autosave and restart.

use crate::qm::QmOperator;

/// The raw field and density-matrix state at the end of a solver run.
///
/// Persisted via the writer contract's autosave path so a later run can
/// resume from it through the autosave-backed initial-condition
/// strategies. All vectors are indexed by spatial grid point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimState {
    /// Electric field values.
    pub e: Vec<f64>,
    /// Magnetic field values.
    pub h: Vec<f64>,
    /// Polarization values.
    pub p: Vec<f64>,
    /// Density matrix per grid point.
    pub density: Vec<QmOperator>,
}
