//! End-to-end flows through the facade: registry lookup, a full
//! run-persist-restart cycle with a stub solver backend, and the
//! explicit-registration contract.

use bloch::prelude::*;
use bloch::core::constants::c0;

#[test]
fn sources_can_be_registered_and_retrieved_by_name() {
    let mut registry: Registry<Source> = Registry::new();
    registry
        .register("sech_test", || {
            Source::sech_pulse("sech", 0.0, SourceKind::Hard, 4.2186e9, 2e14, 10.0, 2e14, 0.0)
        })
        .unwrap();

    let source = registry.create("sech_test").unwrap();
    assert_eq!(source.position(), 0.0);
    assert_eq!(source.kind(), SourceKind::Hard);

    let mut scenario = Scenario::new(
        "basic",
        10,
        200e-15,
        DensityInit::constant(QmOperator::diagonal(vec![1.0, 0.0])),
    );
    scenario.add_source(source);
    assert_eq!(scenario.sources().len(), 1);
    assert_eq!(registry.names(), vec!["sech_test"]);
}

/// A stub backend: discretizes, initializes state from the scenario's
/// strategies, and records the source waveform at its grid position.
/// Stands in for a real timestepping kernel in these tests.
struct SourceEcho;

impl Solver for SourceEcho {
    fn name(&self) -> &str {
        "source-echo"
    }

    fn run(&self, device: &Device, scenario: &mut Scenario) -> Result<SolverOutput, SolverError> {
        discretize(scenario, device, c0())?;

        let n_x = scenario.num_gridpoints() as usize;
        let n_t = scenario.num_timesteps() as usize;

        let mut state = SimState::default();
        for i in 0..n_x {
            state.e.push(scenario.ic_electric_mut().initialize(i));
            state.h.push(scenario.ic_magnetic_mut().initialize(i));
            state.p.push(scenario.ic_polarization_mut().initialize(i));
            state.density.push(scenario.ic_density_mut().initialize(i));
        }

        let samples: Vec<f64> = {
            let source = &mut scenario.sources_mut()[0];
            (0..n_t as u64).map(|n| source.value_at(n)).collect()
        };
        let traces = vec![Trace::real("e", samples.len(), 1, samples)];
        Ok(SolverOutput { traces, state })
    }
}

#[test]
fn run_persist_restart_cycle() {
    let mut backends = Backends::with_builtin().unwrap();
    backends
        .solvers
        .register("source-echo", || Box::new(SourceEcho) as Box<dyn Solver>)
        .unwrap();

    let device = Device::new("vacuum", 150e-6);
    let mut scenario = Scenario::new(
        "basic",
        16,
        2e-15,
        DensityInit::constant(QmOperator::diagonal(vec![1.0, 0.0])),
    );
    scenario.add_record(Record::new("e", 2.5e-15));
    scenario.add_source(Source::sech_pulse(
        "sech", 0.0, SourceKind::Hard, 4.2186e9, 2e14, 10.0, 2e14, 0.0,
    ));

    let solver = backends.solvers.create("source-echo").unwrap();
    let output = solver.run(&device, &mut scenario).unwrap();
    assert_eq!(output.traces.len(), 1);
    assert_eq!(output.state.e.len(), 16);
    assert_eq!(output.state.density.len(), 16);

    let dir = tempfile::tempdir().unwrap();
    let writer = backends.writers.create("bin").unwrap();
    let results = dir.path().join(format!(
        "{}_{}.{}",
        device.name(),
        scenario.name(),
        writer.extension()
    ));
    let autosave = dir.path().join("basic_autosave.bin");
    writer.write(&results, &output.traces, &device, &scenario).unwrap();
    writer.autosave(&autosave, &output.state, &device, &scenario).unwrap();

    // Restart: load the autosaved state back through a reader.
    let reader = backends.readers.create("bin").unwrap();
    let mut restarted = Scenario::new(
        "restart",
        16,
        2e-15,
        DensityInit::autosave(reader.read_density(&autosave).unwrap()),
    );
    restarted.set_ic_electric(FieldInit::autosave(reader.read_field(&autosave, "e").unwrap()));
    restarted.set_ic_magnetic(FieldInit::autosave(reader.read_field(&autosave, "h").unwrap()));
    restarted.set_ic_polarization(FieldInit::autosave(reader.read_field(&autosave, "p").unwrap()));

    for i in 0..16 {
        assert_eq!(restarted.ic_electric_mut().initialize(i), output.state.e[i]);
        assert_eq!(
            restarted.ic_density_mut().initialize(i),
            output.state.density[i]
        );
    }
}

#[test]
fn unknown_backends_fail_with_not_found() {
    let backends = Backends::with_builtin().unwrap();
    assert!(matches!(
        backends.solvers.create("cpu-fdtd"),
        Err(RegistryError::NotFound { .. })
    ));
    assert!(matches!(
        backends.writers.create("hdf5"),
        Err(RegistryError::NotFound { .. })
    ));
}

#[test]
fn builtin_registration_is_idempotent_only_once() {
    let mut backends = Backends::with_builtin().unwrap();
    // A second explicit registration of the same backend name is a
    // startup ordering bug and is reported as such.
    let err = bloch::store::register(&mut backends.readers, &mut backends.writers).unwrap_err();
    assert!(matches!(err, RegistryError::AlreadyRegistered { .. }));
}
