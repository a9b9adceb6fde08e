//! The [`BinReader`] backend.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use bloch_core::QmOperator;
use bloch_io::{IoError, Reader};

use crate::codec::{decode_header, decode_section, Section};
use crate::error::StoreError;
use crate::{BACKEND_NAME, EXTENSION};

/// Reads autosaved state from the binary store format.
///
/// Stateless; each call opens the file and scans its section stream
/// for the requested namespace.
#[derive(Debug, Default)]
pub struct BinReader;

impl BinReader {
    /// Create a reader backend instance.
    pub fn new() -> Self {
        Self
    }

    /// Scan a byte stream for the field section named `field`.
    pub fn decode_field(source: &mut dyn Read, field: &str) -> Result<Vec<f64>, StoreError> {
        decode_header(source)?;
        while let Some(section) = decode_section(source)? {
            if let Section::Field { name, values } = section {
                if name == field {
                    return Ok(values);
                }
            }
        }
        Err(StoreError::MissingSection {
            name: field.to_string(),
        })
    }

    /// Scan a byte stream for the density section.
    pub fn decode_density(source: &mut dyn Read) -> Result<Vec<QmOperator>, StoreError> {
        decode_header(source)?;
        while let Some(section) = decode_section(source)? {
            if let Section::Density(density) = section {
                return Ok(density);
            }
        }
        Err(StoreError::MissingSection {
            name: "density".to_string(),
        })
    }
}

impl Reader for BinReader {
    fn name(&self) -> &str {
        BACKEND_NAME
    }

    fn extension(&self) -> &str {
        EXTENSION
    }

    fn read_field(&self, file: &Path, field: &str) -> Result<Vec<f64>, IoError> {
        let mut source = BufReader::new(File::open(file)?);
        Self::decode_field(&mut source, field).map_err(IoError::from)
    }

    fn read_density(&self, file: &Path) -> Result<Vec<QmOperator>, IoError> {
        let mut source = BufReader::new(File::open(file)?);
        Self::decode_density(&mut source).map_err(IoError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::BinWriter;
    use bloch_core::{QmOperator, SimState};
    use bloch_scenario::{DensityInit, Device, Scenario};
    use num_complex::Complex64;

    fn sample_state() -> SimState {
        SimState {
            e: vec![0.1, 0.2, 0.3],
            h: vec![-0.1, 0.0, 0.1],
            p: vec![0.0; 3],
            density: vec![
                QmOperator::new(vec![1.0, 0.0], vec![Complex64::new(0.0, 0.0)]),
                QmOperator::new(vec![0.9, 0.1], vec![Complex64::new(0.05, -0.02)]),
                QmOperator::new(vec![0.5, 0.5], vec![Complex64::new(-0.25, 0.25)]),
            ],
        }
    }

    fn sample_scenario() -> (Device, Scenario) {
        let device = Device::new("vacuum", 150e-6);
        let scenario = Scenario::new(
            "basic",
            3,
            200e-15,
            DensityInit::constant(QmOperator::diagonal(vec![1.0, 0.0])),
        );
        (device, scenario)
    }

    #[test]
    fn autosave_round_trips_fields_and_density() {
        let (device, scenario) = sample_scenario();
        let state = sample_state();

        let mut buf = Vec::new();
        BinWriter::encode_autosave(&mut buf, &state, &device, &scenario).unwrap();

        assert_eq!(BinReader::decode_field(&mut buf.as_slice(), "e").unwrap(), state.e);
        assert_eq!(BinReader::decode_field(&mut buf.as_slice(), "h").unwrap(), state.h);
        assert_eq!(BinReader::decode_field(&mut buf.as_slice(), "p").unwrap(), state.p);
        assert_eq!(
            BinReader::decode_density(&mut buf.as_slice()).unwrap(),
            state.density
        );
    }

    #[test]
    fn missing_field_is_reported_by_name() {
        let (device, scenario) = sample_scenario();
        let mut buf = Vec::new();
        BinWriter::encode_autosave(&mut buf, &sample_state(), &device, &scenario).unwrap();

        let err = BinReader::decode_field(&mut buf.as_slice(), "df").unwrap_err();
        assert!(matches!(err, StoreError::MissingSection { name } if name == "df"));
    }

    #[test]
    fn results_file_has_no_density_section() {
        let (device, scenario) = sample_scenario();
        let mut buf = Vec::new();
        BinWriter::encode_results(&mut buf, &[], &device, &scenario).unwrap();

        let err = BinReader::decode_density(&mut buf.as_slice()).unwrap_err();
        assert!(matches!(err, StoreError::MissingSection { .. }));
    }
}
