//! Physical constants in SI units.
//!
//! The values match the ones the solver backends discretize against;
//! changing them changes every derived quantity (timestep, thermal
//! amplitude, blackbody weighting), so they live here rather than being
//! scattered over the crates that consume them.

/// Reduced Planck constant (J·s).
pub const HBAR: f64 = 1.054_571_817e-34;

/// Boltzmann constant (J/K).
pub const KB: f64 = 1.380_649e-23;

/// Vacuum permittivity (F/m).
pub const EPS0: f64 = 8.854_187_817e-12;

/// Vacuum permeability (H/m).
pub const MU0: f64 = std::f64::consts::PI * 4e-7;

/// Elementary charge (C).
pub const E0: f64 = 1.602_176_634e-19;

/// Vacuum speed of light (m/s), derived as `1/sqrt(MU0 * EPS0)`.
pub fn c0() -> f64 {
    1.0 / (MU0 * EPS0).sqrt()
}
