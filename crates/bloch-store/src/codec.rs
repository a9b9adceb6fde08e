//! Binary encode/decode for the store format.
//!
//! All integers are little-endian. Strings are length-prefixed with a
//! `u32`, arrays with a `u64`. The format is intentionally simple — no
//! compression, no alignment padding, no self-describing schema beyond
//! the section tags.

use std::io::{ErrorKind, Read, Write};

use num_complex::Complex64;

use bloch_core::{QmOperator, Trace};
use bloch_scenario::{Device, Scenario};

use crate::error::StoreError;
use crate::{FORMAT_VERSION, MAGIC};

/// Section tag: scenario/device scalars.
pub const TAG_SETUP: u8 = 1;
/// Section tag: one result trace.
pub const TAG_TRACE: u8 = 2;
/// Section tag: one autosaved field vector.
pub const TAG_FIELD: u8 = 3;
/// Section tag: autosaved per-gridpoint density matrices.
pub const TAG_DENSITY: u8 = 4;

// ── Primitive writers ───────────────────────────────────────────

/// Write a single byte.
pub fn write_u8(w: &mut dyn Write, v: u8) -> Result<(), StoreError> {
    w.write_all(&[v])?;
    Ok(())
}

/// Write a little-endian u32.
pub fn write_u32_le(w: &mut dyn Write, v: u32) -> Result<(), StoreError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian u64.
pub fn write_u64_le(w: &mut dyn Write, v: u64) -> Result<(), StoreError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian f64.
pub fn write_f64_le(w: &mut dyn Write, v: f64) -> Result<(), StoreError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a length-prefixed UTF-8 string (u32 length + bytes).
pub fn write_str(w: &mut dyn Write, s: &str) -> Result<(), StoreError> {
    write_u32_le(w, s.len() as u32)?;
    w.write_all(s.as_bytes())?;
    Ok(())
}

/// Write a count-prefixed f64 array (u64 count + values).
pub fn write_f64_array(w: &mut dyn Write, values: &[f64]) -> Result<(), StoreError> {
    write_u64_le(w, values.len() as u64)?;
    for &v in values {
        write_f64_le(w, v)?;
    }
    Ok(())
}

/// Write a count-prefixed complex array (u64 count + re/im pairs).
pub fn write_complex_array(w: &mut dyn Write, values: &[Complex64]) -> Result<(), StoreError> {
    write_u64_le(w, values.len() as u64)?;
    for v in values {
        write_f64_le(w, v.re)?;
        write_f64_le(w, v.im)?;
    }
    Ok(())
}

// ── Primitive readers ───────────────────────────────────────────

/// Read a single byte.
pub fn read_u8(r: &mut dyn Read) -> Result<u8, StoreError> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf)?;
    Ok(buf[0])
}

/// Read a little-endian u32.
pub fn read_u32_le(r: &mut dyn Read) -> Result<u32, StoreError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// Read a little-endian u64.
pub fn read_u64_le(r: &mut dyn Read) -> Result<u64, StoreError> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

/// Read a little-endian f64.
pub fn read_f64_le(r: &mut dyn Read) -> Result<f64, StoreError> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(f64::from_le_bytes(buf))
}

/// Read a length-prefixed UTF-8 string.
pub fn read_str(r: &mut dyn Read) -> Result<String, StoreError> {
    let len = read_u32_le(r)? as usize;
    let mut buf = vec![0u8; len];
    r.read_exact(&mut buf)?;
    String::from_utf8(buf).map_err(|e| StoreError::MalformedSection {
        detail: format!("invalid UTF-8 string: {e}"),
    })
}

/// Read a count-prefixed f64 array.
pub fn read_f64_array(r: &mut dyn Read) -> Result<Vec<f64>, StoreError> {
    let count = read_u64_le(r)? as usize;
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        values.push(read_f64_le(r)?);
    }
    Ok(values)
}

/// Read a count-prefixed complex array.
pub fn read_complex_array(r: &mut dyn Read) -> Result<Vec<Complex64>, StoreError> {
    let count = read_u64_le(r)? as usize;
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        let re = read_f64_le(r)?;
        let im = read_f64_le(r)?;
        values.push(Complex64::new(re, im));
    }
    Ok(values)
}

// ── Header encode/decode ────────────────────────────────────────

/// Encode the store file header (magic + version).
pub fn encode_header(w: &mut dyn Write) -> Result<(), StoreError> {
    w.write_all(&MAGIC)?;
    write_u8(w, FORMAT_VERSION)?;
    Ok(())
}

/// Decode and validate the store file header.
pub fn decode_header(r: &mut dyn Read) -> Result<(), StoreError> {
    let mut magic = [0u8; 4];
    r.read_exact(&mut magic)?;
    if magic != MAGIC {
        return Err(StoreError::InvalidMagic);
    }
    let version = read_u8(r)?;
    if version != FORMAT_VERSION {
        return Err(StoreError::UnsupportedVersion { found: version });
    }
    Ok(())
}

// ── Sections ────────────────────────────────────────────────────

/// Scenario and device scalars persisted in the setup section.
#[derive(Clone, Debug, PartialEq)]
pub struct SetupInfo {
    /// Scenario name.
    pub scenario_name: String,
    /// Time step size (s).
    pub timestep_size: f64,
    /// Grid point size (m).
    pub gridpoint_size: f64,
    /// Simulation end time (s).
    pub endtime: f64,
    /// Device name.
    pub device_name: String,
    /// Device length (m).
    pub device_length: f64,
}

/// One decoded section of a store file.
#[derive(Clone, Debug, PartialEq)]
pub enum Section {
    /// Scenario/device scalars.
    Setup(SetupInfo),
    /// One result trace.
    Trace(Trace),
    /// One autosaved field vector.
    Field {
        /// Field name (`"e"`, `"h"`, `"p"`).
        name: String,
        /// Field values, one per grid index.
        values: Vec<f64>,
    },
    /// Autosaved density matrices, one per grid index.
    Density(Vec<QmOperator>),
}

/// Encode the setup section from live scenario/device metadata.
pub fn encode_setup(
    w: &mut dyn Write,
    device: &Device,
    scenario: &Scenario,
) -> Result<(), StoreError> {
    write_u8(w, TAG_SETUP)?;
    write_str(w, scenario.name())?;
    write_f64_le(w, scenario.timestep_size())?;
    write_f64_le(w, scenario.gridpoint_size())?;
    write_f64_le(w, scenario.endtime())?;
    write_str(w, device.name())?;
    write_f64_le(w, device.length())?;
    Ok(())
}

/// Encode one result trace.
pub fn encode_trace(w: &mut dyn Write, trace: &Trace) -> Result<(), StoreError> {
    write_u8(w, TAG_TRACE)?;
    write_str(w, trace.name())?;
    write_u8(w, trace.is_complex() as u8)?;
    write_u64_le(w, trace.rows() as u64)?;
    write_u64_le(w, trace.cols() as u64)?;
    write_f64_array(w, trace.data_real())?;
    if let Some(imag) = trace.data_imag() {
        write_f64_array(w, imag)?;
    }
    Ok(())
}

/// Encode one autosaved field vector.
pub fn encode_field(w: &mut dyn Write, name: &str, values: &[f64]) -> Result<(), StoreError> {
    write_u8(w, TAG_FIELD)?;
    write_str(w, name)?;
    write_f64_array(w, values)?;
    Ok(())
}

/// Encode the autosaved density matrices.
pub fn encode_density(w: &mut dyn Write, density: &[QmOperator]) -> Result<(), StoreError> {
    write_u8(w, TAG_DENSITY)?;
    write_u64_le(w, density.len() as u64)?;
    for rho in density {
        write_f64_array(w, rho.main_diagonal())?;
        write_complex_array(w, rho.off_diagonal())?;
    }
    Ok(())
}

/// Decode the next section, or `None` at a clean end of file.
pub fn decode_section(r: &mut dyn Read) -> Result<Option<Section>, StoreError> {
    // EOF before a tag byte is the regular end of the section stream;
    // EOF anywhere later is truncation.
    let mut tag = [0u8; 1];
    match r.read_exact(&mut tag) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(e.into()),
    }

    match tag[0] {
        TAG_SETUP => {
            let scenario_name = read_str(r)?;
            let timestep_size = read_f64_le(r)?;
            let gridpoint_size = read_f64_le(r)?;
            let endtime = read_f64_le(r)?;
            let device_name = read_str(r)?;
            let device_length = read_f64_le(r)?;
            Ok(Some(Section::Setup(SetupInfo {
                scenario_name,
                timestep_size,
                gridpoint_size,
                endtime,
                device_name,
                device_length,
            })))
        }
        TAG_TRACE => {
            let name = read_str(r)?;
            let is_complex = read_u8(r)? != 0;
            let rows = read_u64_le(r)? as usize;
            let cols = read_u64_le(r)? as usize;
            let real = read_f64_array(r)?;
            if real.len() != rows * cols {
                return Err(StoreError::MalformedSection {
                    detail: format!(
                        "trace '{name}': {} real values for {rows}x{cols}",
                        real.len()
                    ),
                });
            }
            if is_complex {
                let imag = read_f64_array(r)?;
                if imag.len() != rows * cols {
                    return Err(StoreError::MalformedSection {
                        detail: format!(
                            "trace '{name}': {} imag values for {rows}x{cols}",
                            imag.len()
                        ),
                    });
                }
                Ok(Some(Section::Trace(Trace::complex(
                    &name, rows, cols, real, imag,
                ))))
            } else {
                Ok(Some(Section::Trace(Trace::real(&name, rows, cols, real))))
            }
        }
        TAG_FIELD => {
            let name = read_str(r)?;
            let values = read_f64_array(r)?;
            Ok(Some(Section::Field { name, values }))
        }
        TAG_DENSITY => {
            let count = read_u64_le(r)? as usize;
            let mut density = Vec::with_capacity(count);
            for _ in 0..count {
                let main_diag = read_f64_array(r)?;
                let off_diag = read_complex_array(r)?;
                density.push(QmOperator::new(main_diag, off_diag));
            }
            Ok(Some(Section::Density(density)))
        }
        unknown => Err(StoreError::MalformedSection {
            detail: format!("unknown section tag {unknown}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_round_trips() {
        let mut buf = Vec::new();
        encode_header(&mut buf).unwrap();
        decode_header(&mut buf.as_slice()).unwrap();
    }

    #[test]
    fn wrong_magic_is_rejected() {
        let buf = b"HDF5\x01".to_vec();
        let err = decode_header(&mut buf.as_slice()).unwrap_err();
        assert!(matches!(err, StoreError::InvalidMagic));
    }

    #[test]
    fn future_version_is_rejected() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&MAGIC);
        buf.push(FORMAT_VERSION + 1);
        let err = decode_header(&mut buf.as_slice()).unwrap_err();
        assert!(matches!(
            err,
            StoreError::UnsupportedVersion { found } if found == FORMAT_VERSION + 1
        ));
    }

    #[test]
    fn field_section_round_trips() {
        let mut buf = Vec::new();
        encode_field(&mut buf, "e", &[1.0, -2.5, 0.0]).unwrap();
        let section = decode_section(&mut buf.as_slice()).unwrap().unwrap();
        assert_eq!(
            section,
            Section::Field {
                name: "e".to_string(),
                values: vec![1.0, -2.5, 0.0],
            }
        );
        // The stream ends cleanly after one section.
        let mut cursor = buf.as_slice();
        decode_section(&mut cursor).unwrap();
        assert!(decode_section(&mut cursor).unwrap().is_none());
    }

    #[test]
    fn complex_trace_round_trips() {
        let trace = Trace::complex("rho12", 2, 2, vec![1.0; 4], vec![-1.0; 4]);
        let mut buf = Vec::new();
        encode_trace(&mut buf, &trace).unwrap();
        match decode_section(&mut buf.as_slice()).unwrap().unwrap() {
            Section::Trace(decoded) => assert_eq!(decoded, trace),
            other => panic!("expected trace section, got {other:?}"),
        }
    }

    #[test]
    fn density_section_round_trips() {
        use num_complex::Complex64;
        let density = vec![
            QmOperator::new(vec![1.0, 0.0], vec![Complex64::new(0.1, 0.2)]),
            QmOperator::new(vec![0.5, 0.5], vec![Complex64::new(-0.3, 0.0)]),
        ];
        let mut buf = Vec::new();
        encode_density(&mut buf, &density).unwrap();
        match decode_section(&mut buf.as_slice()).unwrap().unwrap() {
            Section::Density(decoded) => assert_eq!(decoded, density),
            other => panic!("expected density section, got {other:?}"),
        }
    }

    #[test]
    fn truncated_section_is_an_error() {
        let mut buf = Vec::new();
        encode_field(&mut buf, "e", &[1.0, 2.0, 3.0]).unwrap();
        buf.truncate(buf.len() - 4);
        let err = decode_section(&mut buf.as_slice()).unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }

    #[test]
    fn unknown_tag_is_malformed() {
        let buf = vec![250u8];
        let err = decode_section(&mut buf.as_slice()).unwrap_err();
        assert!(matches!(err, StoreError::MalformedSection { .. }));
    }
}
