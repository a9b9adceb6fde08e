//! The [`Source`] type and its closed [`Waveform`] sum type.

use crate::error::SourceError;
use crate::thermal::ThermalNoise;

/// How a source couples into the field at its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    /// Overwrite the field value at the source position.
    Hard,
    /// Superimpose onto the current field value.
    ///
    /// Declared but intentionally unfinished upstream: the
    /// superposition-with-current-value logic never landed, so soft
    /// sources currently evaluate exactly like hard sources. Kept so
    /// scenarios written against the original behave identically.
    Soft,
}

/// The polymorphic part of a source: which shape function it evaluates.
///
/// A closed sum type — the three variants are the known waveforms; new
/// open-ended behavior belongs behind the solver/reader/writer trait
/// seams, not here.
#[derive(Clone, Debug)]
pub enum Waveform {
    /// `shape(t) = sech(β·t − φ)·sin(2π·f·t − φ_sin)`, where `φ` is the
    /// source's common phase parameter.
    Sech {
        /// Envelope shape parameter β (1/s).
        beta: f64,
        /// Secondary phase φ_sin of the carrier.
        phase_sin: f64,
    },
    /// `shape(t) = exp(−(t−φ)²/τ²)·sin(2π·f·t)`, where `φ` is the
    /// source's common phase parameter (the envelope center time).
    Gaussian {
        /// Envelope width τ (s).
        tau: f64,
    },
    /// Spectrally synthesized blackbody noise.
    Thermal(ThermalNoise),
}

/// A time-dependent excitation at a fixed spatial position.
///
/// Evaluation contract: `value_at(step) = amplitude × shape(step)`.
/// [`set_timestep_size`](Source::set_timestep_size) must be called
/// before the first `value_at` — real time is `step × dt`, and the
/// thermal variant can only synthesize its spectrum once `dt` is known.
#[derive(Clone, Debug)]
pub struct Source {
    name: String,
    position: f64,
    kind: SourceKind,
    amplitude: f64,
    frequency: f64,
    phase: f64,
    timestep_size: Option<f64>,
    waveform: Waveform,
}

impl Source {
    /// Construct a sech pulse
    /// `E(t) = A·sin(2π·f·t − φ_sin)·sech(β·t − φ)`.
    pub fn sech_pulse(
        name: &str,
        position: f64,
        kind: SourceKind,
        amplitude: f64,
        frequency: f64,
        phase: f64,
        beta: f64,
        phase_sin: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            position,
            kind,
            amplitude,
            frequency,
            phase,
            timestep_size: None,
            waveform: Waveform::Sech { beta, phase_sin },
        }
    }

    /// Construct a Gaussian pulse
    /// `E(t) = A·sin(2π·f·t)·exp(−(t−φ)²/τ²)`.
    pub fn gaussian_pulse(
        name: &str,
        position: f64,
        kind: SourceKind,
        amplitude: f64,
        frequency: f64,
        phase: f64,
        tau: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            position,
            kind,
            amplitude,
            frequency,
            phase,
            timestep_size: None,
            waveform: Waveform::Gaussian { tau },
        }
    }

    /// Construct a thermal-noise source. The amplitude is derived from
    /// the blackbody temperature via detailed balance, not configured.
    pub fn thermal_noise(name: &str, position: f64, kind: SourceKind, noise: ThermalNoise) -> Self {
        Self {
            name: name.to_string(),
            position,
            kind,
            amplitude: noise.amplitude(),
            frequency: 0.0,
            phase: 0.0,
            timestep_size: None,
            waveform: Waveform::Thermal(noise),
        }
    }

    /// The source name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position along the device (m).
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Hard or soft coupling.
    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    /// Amplitude A.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Carrier frequency f (Hz).
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Common phase parameter φ.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// The waveform variant.
    pub fn waveform(&self) -> &Waveform {
        &self.waveform
    }

    /// The timestep the source is bound to, if already set.
    pub fn timestep_size(&self) -> Option<f64> {
        self.timestep_size
    }

    /// Bind the source to the solver's timestep.
    ///
    /// A distinct configuration step, invoked by whoever runs the
    /// scenario: the thermal variant synthesizes its whole spectral
    /// content here, and its Nyquist bound can only be checked here.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::AboveNyquist`] if a thermal source's
    /// configured maximum frequency exceeds `1/(2·dt)`.
    pub fn set_timestep_size(&mut self, timestep_size: f64) -> Result<(), SourceError> {
        if let Waveform::Thermal(noise) = &mut self.waveform {
            noise.synthesize(timestep_size)?;
        }
        self.timestep_size = Some(timestep_size);
        Ok(())
    }

    /// Source value at timestep `step`: `amplitude × shape(step·dt)`.
    ///
    /// # Panics
    ///
    /// Panics if [`set_timestep_size`](Self::set_timestep_size) has not
    /// been called.
    pub fn value_at(&mut self, step: u64) -> f64 {
        let dt = self
            .timestep_size
            .expect("set_timestep_size must be called before value_at");
        let t = step as f64 * dt;
        let two_pi = 2.0 * std::f64::consts::PI;
        let shape = match &mut self.waveform {
            Waveform::Sech { beta, phase_sin } => {
                1.0 / (*beta * t - self.phase).cosh() * (two_pi * self.frequency * t - *phase_sin).sin()
            }
            Waveform::Gaussian { tau } => {
                (-(t - self.phase) * (t - self.phase) / (*tau * *tau)).exp()
                    * (two_pi * self.frequency * t).sin()
            }
            Waveform::Thermal(noise) => noise.value_at(step),
        };
        self.amplitude * shape
    }
}
