//! The [`Scenario`] aggregate.

use bloch_core::Record;
use bloch_sources::Source;

use crate::init::{DensityInit, FieldInit};

/// The full description of a simulation run.
///
/// Couples the grid/time discretization with the sources, the requested
/// output records, and the four initial-condition strategies. A
/// scenario is owned by its creator and handed to a solver backend,
/// which injects the discretization (see the setter contract below) and
/// consumes the rest read-only.
///
/// # Discretization coherence
///
/// `timestep_size`, `gridpoint_size`, `endtime`, and `num_timesteps`
/// are mutually dependent (`timestep_size · num_timesteps ≈ endtime`
/// under the Courant condition) but exposed as independently settable
/// fields. The direct setters bypass any consistency check — keeping
/// the set coherent is the caller's responsibility. Solver backends
/// normally derive a coherent set themselves before stepping.
#[derive(Debug)]
pub struct Scenario {
    name: String,
    num_gridpoints: u32,
    num_timesteps: u32,
    timestep_size: f64,
    gridpoint_size: f64,
    endtime: f64,
    courant_number: f64,
    sources: Vec<Source>,
    records: Vec<Record>,
    density_init: DensityInit,
    electric_init: FieldInit,
    magnetic_init: FieldInit,
    polarization_init: FieldInit,
}

impl Scenario {
    /// Create a scenario over `num_gridpoints` grid points running to
    /// `endtime` seconds.
    ///
    /// The density initial condition has no default and must be
    /// supplied. The field initial conditions default to the original
    /// tooling's choices — random electric field (seed 0), zero
    /// magnetic and polarization fields — and can be replaced through
    /// the setters. `num_timesteps` starts at 2 until a solver derives
    /// the real value.
    pub fn new(name: &str, num_gridpoints: u32, endtime: f64, density_init: DensityInit) -> Self {
        Self {
            name: name.to_string(),
            num_gridpoints,
            num_timesteps: 2,
            timestep_size: 0.0,
            gridpoint_size: 0.0,
            endtime,
            courant_number: 0.5,
            sources: Vec::new(),
            records: Vec::new(),
            density_init,
            electric_init: FieldInit::random(0),
            magnetic_init: FieldInit::constant(0.0),
            polarization_init: FieldInit::constant(0.0),
        }
    }

    /// The scenario name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of spatial grid points.
    pub fn num_gridpoints(&self) -> u32 {
        self.num_gridpoints
    }

    /// Set the number of grid points manually. Use with care: bypasses
    /// any coherence check against the other discretization fields.
    pub fn set_num_gridpoints(&mut self, value: u32) {
        self.num_gridpoints = value;
    }

    /// Number of time steps.
    pub fn num_timesteps(&self) -> u32 {
        self.num_timesteps
    }

    /// Set the number of time steps manually. Use with care.
    pub fn set_num_timesteps(&mut self, value: u32) {
        self.num_timesteps = value;
    }

    /// Time step size (s).
    pub fn timestep_size(&self) -> f64 {
        self.timestep_size
    }

    /// Set the time step size manually. Use with care.
    pub fn set_timestep_size(&mut self, value: f64) {
        self.timestep_size = value;
    }

    /// Grid point size (m).
    pub fn gridpoint_size(&self) -> f64 {
        self.gridpoint_size
    }

    /// Set the grid point size manually. Use with care.
    pub fn set_gridpoint_size(&mut self, value: f64) {
        self.gridpoint_size = value;
    }

    /// Simulation end time (s).
    pub fn endtime(&self) -> f64 {
        self.endtime
    }

    /// Set the simulation end time manually. Use with care.
    pub fn set_endtime(&mut self, value: f64) {
        self.endtime = value;
    }

    /// Courant stability number relating the spatial and temporal steps.
    pub fn courant_number(&self) -> f64 {
        self.courant_number
    }

    /// Set the Courant number (default 0.5).
    pub fn set_courant_number(&mut self, value: f64) {
        self.courant_number = value;
    }

    /// Append a source. Insertion order is preserved but carries no
    /// semantic weight.
    pub fn add_source(&mut self, source: Source) {
        self.sources.push(source);
    }

    /// The sources, in insertion order.
    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    /// Mutable access to the sources, for the solver's timestep
    /// injection and per-step evaluation.
    pub fn sources_mut(&mut self) -> &mut [Source] {
        &mut self.sources
    }

    /// Append an output record request.
    pub fn add_record(&mut self, record: Record) {
        self.records.push(record);
    }

    /// The requested output records, in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The density-matrix initial condition.
    pub fn ic_density(&self) -> &DensityInit {
        &self.density_init
    }

    /// Mutable access for the solver's per-index initialization.
    pub fn ic_density_mut(&mut self) -> &mut DensityInit {
        &mut self.density_init
    }

    /// Replace the density-matrix initial condition.
    pub fn set_ic_density(&mut self, init: DensityInit) {
        self.density_init = init;
    }

    /// The electric-field initial condition.
    pub fn ic_electric(&self) -> &FieldInit {
        &self.electric_init
    }

    /// Mutable access for the solver's per-index initialization.
    pub fn ic_electric_mut(&mut self) -> &mut FieldInit {
        &mut self.electric_init
    }

    /// Replace the electric-field initial condition.
    pub fn set_ic_electric(&mut self, init: FieldInit) {
        self.electric_init = init;
    }

    /// The magnetic-field initial condition.
    pub fn ic_magnetic(&self) -> &FieldInit {
        &self.magnetic_init
    }

    /// Mutable access for the solver's per-index initialization.
    pub fn ic_magnetic_mut(&mut self) -> &mut FieldInit {
        &mut self.magnetic_init
    }

    /// Replace the magnetic-field initial condition.
    pub fn set_ic_magnetic(&mut self, init: FieldInit) {
        self.magnetic_init = init;
    }

    /// The polarization initial condition.
    pub fn ic_polarization(&self) -> &FieldInit {
        &self.polarization_init
    }

    /// Mutable access for the solver's per-index initialization.
    pub fn ic_polarization_mut(&mut self) -> &mut FieldInit {
        &mut self.polarization_init
    }

    /// Replace the polarization initial condition.
    pub fn set_ic_polarization(&mut self, init: FieldInit) {
        self.polarization_init = init;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloch_core::QmOperator;
    use bloch_sources::SourceKind;

    fn ground_state() -> DensityInit {
        DensityInit::constant(QmOperator::diagonal(vec![1.0, 0.0]))
    }

    #[test]
    fn defaults_match_the_original_tooling() {
        let scenario = Scenario::new("basic", 32768, 200e-15, ground_state());
        assert_eq!(scenario.num_timesteps(), 2);
        assert_eq!(scenario.courant_number(), 0.5);
        assert_eq!(scenario.timestep_size(), 0.0);
        assert!(matches!(scenario.ic_electric(), FieldInit::RandomNormal { .. }));
        assert!(matches!(scenario.ic_magnetic(), FieldInit::Constant(v) if *v == 0.0));
        assert!(matches!(scenario.ic_polarization(), FieldInit::Constant(v) if *v == 0.0));
    }

    #[test]
    fn direct_setters_bypass_coherence_checks() {
        let mut scenario = Scenario::new("basic", 8, 1.0, ground_state());
        // Nothing stops an incoherent set; that is the documented
        // contract.
        scenario.set_timestep_size(1.0);
        scenario.set_num_timesteps(100);
        scenario.set_endtime(3.0);
        assert_eq!(scenario.timestep_size(), 1.0);
        assert_eq!(scenario.num_timesteps(), 100);
        assert_eq!(scenario.endtime(), 3.0);
    }

    #[test]
    fn sources_and_records_keep_insertion_order() {
        let mut scenario = Scenario::new("basic", 8, 1.0, ground_state());
        scenario.add_source(Source::sech_pulse(
            "first",
            0.0,
            SourceKind::Hard,
            1.0,
            2e14,
            10.0,
            2e14,
            0.0,
        ));
        scenario.add_source(Source::gaussian_pulse(
            "second",
            1e-6,
            SourceKind::Soft,
            1.0,
            2e14,
            0.0,
            1e-14,
        ));
        scenario.add_record(Record::new("e", 2.5e-15));
        scenario.add_record(Record::new("inv12", 2.5e-15));

        let names: Vec<&str> = scenario.sources().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["first", "second"]);
        let records: Vec<&str> = scenario.records().iter().map(|r| r.name()).collect();
        assert_eq!(records, vec!["e", "inv12"]);
    }

    #[test]
    fn density_initialization_flows_through_the_scenario() {
        let mut scenario = Scenario::new("basic", 4, 1.0, ground_state());
        let rho = scenario.ic_density_mut().initialize(0);
        assert_eq!(rho.main_diagonal(), &[1.0, 0.0]);
    }
}
