//! Initial-condition strategies for density matrices and fields.
//!
//! Strategies are closed sum types over the known variants: constant,
//! loaded from an autosave, or random. Random variants own a seeded
//! ChaCha8 RNG — the seed is an explicit, injected dependency so tests
//! and reruns are deterministic — and every instance draws from its own
//! independent stream. Two calls with the same index may return
//! different values; nothing is cached.

use num_complex::Complex64;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use bloch_core::QmOperator;
use bloch_sources::rng::standard_normal;

/// Initial conditions for the density matrix, per grid index.
#[derive(Clone, Debug)]
pub enum DensityInit {
    /// The same matrix at every grid index.
    Constant(QmOperator),
    /// Per-index matrices loaded from an autosave file.
    Autosave(Vec<QmOperator>),
    /// Random small rotations of the two-level ground state
    /// `[0 0; 0 1]`.
    RandomTwoLevel {
        /// Carrier count per grid cell; scales the rotation angle as
        /// `2/sqrt(carriers)`.
        carriers_per_cell: f64,
        /// Private draw stream.
        rng: ChaCha8Rng,
    },
}

impl DensityInit {
    /// Constant initial conditions from a single matrix.
    pub fn constant(rho: QmOperator) -> Self {
        Self::Constant(rho)
    }

    /// Initial conditions restored from autosaved matrices (one per
    /// grid index).
    pub fn autosave(rho: Vec<QmOperator>) -> Self {
        Self::Autosave(rho)
    }

    /// Random two-level initial conditions for `carriers_per_cell`
    /// carriers, drawing from a stream seeded with `seed`.
    pub fn random_two_level(carriers_per_cell: f64, seed: u64) -> Self {
        Self::RandomTwoLevel {
            carriers_per_cell,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Produce the initial density matrix for grid index `index`.
    ///
    /// The random variant draws a rotation angle
    /// `θ = 2/sqrt(carriers) · N(0,1)` and builds the pure-state
    /// rotation of the two-level ground state: populations
    /// `[sin²(θ/2), cos²(θ/2)]` and one coherence `sin(θ)/2 · exp(iφ)`
    /// with a uniform random phase — populations always sum to 1.
    ///
    /// # Panics
    ///
    /// The autosave variant panics if `index` is outside the loaded
    /// range; passing an index the autosave never covered is a caller
    /// bug, not a recoverable state.
    pub fn initialize(&mut self, index: usize) -> QmOperator {
        match self {
            Self::Constant(rho) => rho.clone(),
            Self::Autosave(rho) => rho[index].clone(),
            Self::RandomTwoLevel {
                carriers_per_cell,
                rng,
            } => {
                let theta = 2.0 / carriers_per_cell.sqrt() * standard_normal(rng);
                let populations = vec![(theta / 2.0).sin().powi(2), (theta / 2.0).cos().powi(2)];
                let phase = rng.gen::<f64>() * 2.0 * std::f64::consts::PI;
                let coherence = theta.sin() / 2.0 * Complex64::new(0.0, phase).exp();
                QmOperator::new(populations, vec![coherence])
            }
        }
    }
}

/// Initial conditions for a scalar field (electric, magnetic, or
/// polarization), per grid index.
#[derive(Clone, Debug)]
pub enum FieldInit {
    /// The same value at every grid index.
    Constant(f64),
    /// Per-index values loaded from an autosave file.
    Autosave(Vec<f64>),
    /// Normally distributed values scaled by a field amplitude.
    RandomNormal {
        /// Mean of the underlying normal distribution.
        mean: f64,
        /// Standard deviation of the underlying normal distribution.
        stddev: f64,
        /// Field amplitude scaling every draw.
        amplitude: f64,
        /// Private draw stream.
        rng: ChaCha8Rng,
    },
}

impl FieldInit {
    /// Constant initial field value.
    pub fn constant(value: f64) -> Self {
        Self::Constant(value)
    }

    /// Initial values restored from an autosaved field vector.
    pub fn autosave(field: Vec<f64>) -> Self {
        Self::Autosave(field)
    }

    /// Random initial values `N(mean, stddev) · amplitude`, drawing
    /// from a stream seeded with `seed`.
    pub fn random_normal(mean: f64, stddev: f64, amplitude: f64, seed: u64) -> Self {
        Self::RandomNormal {
            mean,
            stddev,
            amplitude,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Random initial values with the default parameters of the
    /// original tooling: `N(0, 1) · 1e-15`.
    pub fn random(seed: u64) -> Self {
        Self::random_normal(0.0, 1.0, 1e-15, seed)
    }

    /// Produce the initial field value for grid index `index`.
    ///
    /// # Panics
    ///
    /// The autosave variant panics if `index` is outside the loaded
    /// range (a caller bug, see [`DensityInit::initialize`]).
    pub fn initialize(&mut self, index: usize) -> f64 {
        match self {
            Self::Constant(value) => *value,
            Self::Autosave(field) => field[index],
            Self::RandomNormal {
                mean,
                stddev,
                amplitude,
                rng,
            } => (*mean + *stddev * standard_normal(rng)) * *amplitude,
        }
    }
}
