//! Scenario data model for the Bloch simulation framework.
//!
//! A [`Scenario`] is the full description of a simulation run: the
//! grid/time discretization, the sources driving the field, the
//! requested output records, and the initial-condition strategies for
//! the density matrix and the three scalar fields. A [`Device`] names
//! the simulated structure and its length; its internal region and
//! material description belongs to the solver backends.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod device;
pub mod init;
pub mod scenario;

pub use device::Device;
pub use init::{DensityInit, FieldInit};
pub use scenario::Scenario;
