//! Criterion micro-benchmarks for store encode/decode.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use num_complex::Complex64;

use bloch_core::{QmOperator, SimState};
use bloch_scenario::{DensityInit, Device, Scenario};
use bloch_store::{BinReader, BinWriter};

/// Build an autosave payload for `n` grid points.
fn make_state(n: usize) -> SimState {
    SimState {
        e: (0..n).map(|i| i as f64).collect(),
        h: (0..n).map(|i| -(i as f64)).collect(),
        p: vec![0.0; n],
        density: (0..n)
            .map(|i| {
                QmOperator::new(
                    vec![1.0 - 1e-4 * i as f64, 1e-4 * i as f64],
                    vec![Complex64::new(1e-5 * i as f64, -1e-5)],
                )
            })
            .collect(),
    }
}

fn make_setup() -> (Device, Scenario) {
    let device = Device::new("bench", 150e-6);
    let scenario = Scenario::new(
        "bench",
        4096,
        200e-15,
        DensityInit::constant(QmOperator::diagonal(vec![1.0, 0.0])),
    );
    (device, scenario)
}

/// Benchmark: encode a 4096-gridpoint autosave into memory.
fn bench_encode_autosave(c: &mut Criterion) {
    let state = make_state(4096);
    let (device, scenario) = make_setup();

    c.bench_function("store_encode_autosave", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(1 << 20);
            BinWriter::encode_autosave(&mut buf, &state, &device, &scenario).unwrap();
            black_box(&buf);
        });
    });
}

/// Benchmark: scan an in-memory autosave for one field and the
/// density section.
fn bench_decode_autosave(c: &mut Criterion) {
    let state = make_state(4096);
    let (device, scenario) = make_setup();
    let mut buf = Vec::with_capacity(1 << 20);
    BinWriter::encode_autosave(&mut buf, &state, &device, &scenario).unwrap();

    c.bench_function("store_decode_field_and_density", |b| {
        b.iter(|| {
            let e = BinReader::decode_field(&mut buf.as_slice(), "e").unwrap();
            let density = BinReader::decode_density(&mut buf.as_slice()).unwrap();
            black_box((e, density));
        });
    });
}

criterion_group!(benches, bench_encode_autosave, bench_decode_autosave);
criterion_main!(benches);
