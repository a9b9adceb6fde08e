//! Thermal-noise source synthesis.
//!
//! Synthesizes a real-valued noise waveform from a two-sided spectrum of
//! complex Gaussian coefficients weighted by the blackbody spectral
//! density at the configured temperature. Hermitian symmetry of the
//! coefficients (`c(−ω) = conj(c(ω))`) makes the inverse sum real by
//! construction; the real projection in `value_at` only strips
//! floating-point residue.

use num_complex::Complex64;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use bloch_core::constants::{c0, EPS0, HBAR, KB};

use crate::error::SourceError;
use crate::rng::standard_normal;

/// Normalized blackbody spectral density at angular frequency `omega`.
///
/// Planck-law shaped: `6ħ²/(π(k_B T)²) · |ω| / (exp(ħ|ω|/(k_B T)) − 1)`,
/// monotonically increasing in `|ω|` at fixed temperature and saturating
/// towards the classical limit.
pub fn blackbody_density(omega: f64, temperature: f64) -> f64 {
    let omega = omega.abs();
    (6.0 * HBAR * HBAR) / (std::f64::consts::PI * (KB * temperature).powi(2)) * omega
        / ((HBAR * omega / (KB * temperature)).exp() - 1.0)
}

/// Re-anchor interval for the incremental phasors; bounds the rotation
/// drift accumulated by repeated complex multiplication.
const REANCHOR_INTERVAL: u64 = 4096;

/// Spectrum synthesized once the timestep is known.
#[derive(Clone, Debug)]
struct Spectrum {
    /// Two-sided angular frequency grid, ascending.
    omega: Vec<f64>,
    /// Per-bin coefficient premultiplied with `sqrt(density(|ω|))`.
    weighted: Vec<Complex64>,
    /// Per-bin phase advance for one step: `exp(i·ω·dt)`.
    rotators: Vec<Complex64>,
    /// `weighted` advanced to the step in `cursor`.
    phasors: Vec<Complex64>,
    cursor: u64,
    timestep_size: f64,
}

impl Spectrum {
    fn rebuild_phasors(&mut self, step: u64) {
        let t = step as f64 * self.timestep_size;
        for (phasor, (&omega, &coeff)) in self
            .phasors
            .iter_mut()
            .zip(self.omega.iter().zip(self.weighted.iter()))
        {
            *phasor = coeff * Complex64::new(0.0, omega * t).exp();
        }
        self.cursor = step;
    }

    fn advance_to(&mut self, step: u64) {
        if step == self.cursor {
            return;
        }
        let sequential = step == self.cursor + 1;
        if sequential && step % REANCHOR_INTERVAL != 0 {
            for (phasor, rotator) in self.phasors.iter_mut().zip(self.rotators.iter()) {
                *phasor *= rotator;
            }
            self.cursor = step;
        } else {
            self.rebuild_phasors(step);
        }
    }

    fn sum(&self) -> Complex64 {
        self.phasors.iter().sum()
    }
}

/// Spectral synthesis state of a thermal-noise source.
///
/// Configuration (temperature, simulated time, frequency grid, seed) is
/// fixed at build time; the spectrum itself is synthesized by
/// [`synthesize`](ThermalNoise::synthesize) once the timestep is known.
///
/// Evaluation is O(number of frequency bins) per step. Sequential steps
/// advance cached per-bin phasors by precomputed rotation factors
/// instead of recomputing `exp(i·ω·t)` per bin; out-of-order access
/// falls back to a full phasor rebuild. Both paths agree with the naive
/// sum to floating-point tolerance.
#[derive(Clone, Debug)]
pub struct ThermalNoise {
    temperature: f64,
    tau_sim: f64,
    delta_freq: f64,
    freq_min: f64,
    /// 0.0 means "default to the Nyquist limit at synthesis time".
    freq_max: f64,
    seed: u64,
    spectrum: Option<Spectrum>,
}

/// Builder for [`ThermalNoise`].
///
/// Required fields: `temperature` and `tau_sim`. The frequency
/// resolution and the lower bound are clamped up to `1/tau_sim` (a run
/// of length `tau_sim` cannot resolve anything finer); the upper bound
/// defaults to the Nyquist limit once the timestep is known.
pub struct ThermalNoiseBuilder {
    temperature: f64,
    tau_sim: f64,
    delta_freq: f64,
    freq_min: f64,
    freq_max: f64,
    seed: u64,
}

impl ThermalNoiseBuilder {
    /// Set the frequency resolution Δf in Hz (default: `1/tau_sim`).
    pub fn delta_freq(mut self, delta_freq: f64) -> Self {
        self.delta_freq = delta_freq;
        self
    }

    /// Set the lower frequency bound in Hz (default: `1/tau_sim`).
    pub fn freq_min(mut self, freq_min: f64) -> Self {
        self.freq_min = freq_min;
        self
    }

    /// Set the upper frequency bound in Hz (default: Nyquist limit).
    ///
    /// Values above the Nyquist limit are rejected with
    /// [`SourceError::AboveNyquist`] — at synthesis time, since the
    /// limit depends on the timestep.
    pub fn freq_max(mut self, freq_max: f64) -> Self {
        self.freq_max = freq_max;
        self
    }

    /// Set the seed for the coefficient draws (default: 0).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Build the thermal-noise state, clamping the frequency grid
    /// parameters against `1/tau_sim`.
    pub fn build(self) -> ThermalNoise {
        let resolution_floor = 1.0 / self.tau_sim;
        ThermalNoise {
            temperature: self.temperature,
            tau_sim: self.tau_sim,
            delta_freq: self.delta_freq.max(resolution_floor),
            freq_min: self.freq_min.max(resolution_floor),
            freq_max: self.freq_max,
            seed: self.seed,
            spectrum: None,
        }
    }
}

impl ThermalNoise {
    /// Create a builder for a blackbody at `temperature` (K) driving a
    /// simulation of `tau_sim` seconds.
    pub fn builder(temperature: f64, tau_sim: f64) -> ThermalNoiseBuilder {
        ThermalNoiseBuilder {
            temperature,
            tau_sim,
            delta_freq: 0.0,
            freq_min: 0.0,
            freq_max: 0.0,
            seed: 0,
        }
    }

    /// The blackbody temperature (K).
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Source amplitude derived from the temperature via detailed
    /// balance: `sqrt(2/(6·ε₀·ħ·c₀)) · k_B·T / sqrt(τ_sim)`.
    pub fn amplitude(&self) -> f64 {
        (2.0 / (6.0 * EPS0 * HBAR * c0())).sqrt() * KB * self.temperature / self.tau_sim.sqrt()
    }

    /// Number of two-sided frequency bins, 0 before synthesis.
    pub fn num_bins(&self) -> usize {
        self.spectrum.as_ref().map_or(0, |s| s.omega.len())
    }

    /// Synthesize the spectrum for the given timestep.
    ///
    /// Builds the symmetric two-sided angular frequency grid, draws one
    /// complex Gaussian coefficient per one-sided bin, mirrors the
    /// draws with complex conjugation onto the negative bins, and
    /// premultiplies every coefficient with the square root of the
    /// blackbody density. Calling this again (e.g. after a timestep
    /// change) resynthesizes from the same seed.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::AboveNyquist`] if a configured upper
    /// frequency bound exceeds `1/(2·timestep_size)`.
    pub fn synthesize(&mut self, timestep_size: f64) -> Result<(), SourceError> {
        let nyquist = 1.0 / (2.0 * timestep_size);
        let freq_max = if self.freq_max == 0.0 {
            nyquist
        } else if self.freq_max > nyquist {
            return Err(SourceError::AboveNyquist {
                requested: self.freq_max,
                limit: nyquist,
            });
        } else {
            self.freq_max
        };

        let two_pi = 2.0 * std::f64::consts::PI;
        let bins = ((freq_max - self.freq_min) / self.delta_freq).floor() as i64 + 1;
        let bins = bins.max(0) as usize;

        // One-sided grid and draws; negative side is the conjugate mirror.
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut one_sided = Vec::with_capacity(bins);
        for i in 0..bins {
            let omega = two_pi * (self.freq_min + i as f64 * self.delta_freq);
            let coeff = Complex64::new(standard_normal(&mut rng), standard_normal(&mut rng));
            one_sided.push((omega, coeff));
        }

        let mut omega = Vec::with_capacity(2 * bins);
        let mut weighted = Vec::with_capacity(2 * bins);
        for &(w, c) in one_sided.iter().rev() {
            omega.push(-w);
            weighted.push(c.conj() * blackbody_density(w, self.temperature).sqrt());
        }
        for &(w, c) in &one_sided {
            omega.push(w);
            weighted.push(c * blackbody_density(w, self.temperature).sqrt());
        }

        let rotators = omega
            .iter()
            .map(|&w| Complex64::new(0.0, w * timestep_size).exp())
            .collect();
        let phasors = weighted.clone();

        self.spectrum = Some(Spectrum {
            omega,
            weighted,
            rotators,
            phasors,
            cursor: 0,
            timestep_size,
        });
        Ok(())
    }

    /// Shape value at `step`: the real part of the spectral sum.
    ///
    /// # Panics
    ///
    /// Panics if [`synthesize`](Self::synthesize) has not run.
    pub fn value_at(&mut self, step: u64) -> f64 {
        self.complex_value_at(step).re
    }

    /// The raw complex spectral sum at `step`, before the real
    /// projection. Its imaginary part is zero up to floating-point
    /// error — useful for verifying the enforced conjugate symmetry.
    ///
    /// # Panics
    ///
    /// Panics if [`synthesize`](Self::synthesize) has not run.
    pub fn complex_value_at(&mut self, step: u64) -> Complex64 {
        let spectrum = self
            .spectrum
            .as_mut()
            .expect("synthesize must be called before evaluating a thermal source");
        spectrum.advance_to(step);
        spectrum.sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn small_noise(seed: u64) -> ThermalNoise {
        // 77 K over 1 ns with 1 GHz bins up to 100 GHz: 100 one-sided bins.
        ThermalNoise::builder(77.0, 1e-9)
            .freq_max(1e11)
            .seed(seed)
            .build()
    }

    #[test]
    fn density_increases_with_frequency() {
        let d1 = blackbody_density(1e12, 300.0);
        let d2 = blackbody_density(5e12, 300.0);
        assert!(d2 > d1);
        assert!(blackbody_density(-1e12, 300.0) == d1);
    }

    #[test]
    fn spectrum_is_conjugate_symmetric() {
        let mut noise = small_noise(3);
        noise.synthesize(1e-13).unwrap();
        for step in [0u64, 1, 2, 17, 500] {
            let raw = noise.complex_value_at(step);
            assert!(
                raw.im.abs() <= 1e-9 * raw.re.abs().max(1.0),
                "imaginary residue {} at step {step}",
                raw.im
            );
        }
    }

    #[test]
    fn freq_max_above_nyquist_is_rejected() {
        let mut noise = small_noise(0);
        // Nyquist for dt = 1e-10 is 5e9 < configured 1e11.
        let err = noise.synthesize(1e-10).unwrap_err();
        assert!(matches!(err, SourceError::AboveNyquist { .. }));
    }

    #[test]
    fn freq_max_defaults_to_nyquist() {
        let mut noise = ThermalNoise::builder(300.0, 1e-9).seed(1).build();
        noise.synthesize(1e-11).unwrap();
        assert!(noise.num_bins() > 0);
    }

    #[test]
    fn incremental_matches_rebuilt_evaluation() {
        let mut sequential = small_noise(11);
        sequential.synthesize(1e-13).unwrap();
        let mut direct = small_noise(11);
        direct.synthesize(1e-13).unwrap();

        let series: Vec<f64> = (0..256).map(|n| sequential.value_at(n)).collect();
        // Out-of-order access forces the rebuild path.
        for &n in &[255u64, 7, 128, 0, 63] {
            let expected = series[n as usize];
            let got = direct.value_at(n);
            let tol = 1e-9 * expected.abs().max(1.0);
            assert!(
                (got - expected).abs() <= tol,
                "step {n}: sequential {expected} vs rebuilt {got}"
            );
        }
    }

    #[test]
    fn same_seed_reproduces_the_series() {
        let mut a = small_noise(99);
        let mut b = small_noise(99);
        a.synthesize(1e-13).unwrap();
        b.synthesize(1e-13).unwrap();
        for n in 0..64 {
            assert_eq!(a.value_at(n), b.value_at(n));
        }
    }

    proptest! {
        #[test]
        fn conjugate_symmetry_holds_for_any_seed(seed in 0u64..1024, step in 0u64..512) {
            let mut noise = ThermalNoise::builder(150.0, 1e-9)
                .freq_max(5e10)
                .seed(seed)
                .build();
            noise.synthesize(1e-13).unwrap();
            let raw = noise.complex_value_at(step);
            prop_assert!(raw.im.abs() <= 1e-9 * raw.re.abs().max(1.0));
        }
    }

    #[test]
    fn amplitude_scales_linearly_with_temperature() {
        let cold = ThermalNoise::builder(100.0, 1e-9).build();
        let hot = ThermalNoise::builder(300.0, 1e-9).build();
        assert!(cold.amplitude() > 0.0);
        assert!((hot.amplitude() / cold.amplitude() - 3.0).abs() < 1e-12);
    }
}
