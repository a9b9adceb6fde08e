//! Seeded random sampling shared by the stochastic subsystems.
//!
//! Generators are explicit, injected dependencies: every stochastic
//! source or initial condition takes a `u64` seed and owns its own
//! ChaCha8 stream, so identical seeds reproduce identical simulations.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Generate a standard-normal sample using the Box-Muller transform.
/// Avoids the `rand_distr` dependency.
pub fn standard_normal(rng: &mut ChaCha8Rng) -> f64 {
    let u1: f64 = rng.gen::<f64>().max(1e-300); // avoid ln(0)
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}
