//! Waveform sources for the Bloch simulation framework.
//!
//! A [`Source`] is a time-dependent excitation injected into the
//! simulated field at a fixed spatial position. The closed-form pulse
//! shapes (sech, Gaussian) and the thermal-noise spectral synthesis are
//! variants of one closed [`Waveform`] sum type; solver backends only
//! see `value_at(step)`.
//!
//! Sources are evaluated in discrete solver steps. The step size is not
//! known at construction time — whoever runs the scenario calls
//! [`Source::set_timestep_size`] before the first evaluation, which is
//! also where the thermal variant synthesizes its spectrum and where
//! its Nyquist bound is enforced.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod rng;
pub mod source;
pub mod thermal;

pub use error::SourceError;
pub use source::{Source, SourceKind, Waveform};
pub use thermal::{ThermalNoise, ThermalNoiseBuilder};
