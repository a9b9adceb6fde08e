//! The [`BinWriter`] backend.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use bloch_core::{SimState, Trace};
use bloch_io::{IoError, Writer};
use bloch_scenario::{Device, Scenario};

use crate::codec::{encode_density, encode_field, encode_header, encode_setup, encode_trace};
use crate::error::StoreError;
use crate::{BACKEND_NAME, EXTENSION};

/// Writes results and autosave state in the binary store format.
///
/// Stateless; one instance can serve any number of files.
#[derive(Debug, Default)]
pub struct BinWriter;

impl BinWriter {
    /// Create a writer backend instance.
    pub fn new() -> Self {
        Self
    }

    /// Encode a results file into any byte sink.
    pub fn encode_results(
        sink: &mut dyn Write,
        traces: &[Trace],
        device: &Device,
        scenario: &Scenario,
    ) -> Result<(), StoreError> {
        encode_header(sink)?;
        encode_setup(sink, device, scenario)?;
        for trace in traces {
            encode_trace(sink, trace)?;
        }
        Ok(())
    }

    /// Encode an autosave file into any byte sink.
    pub fn encode_autosave(
        sink: &mut dyn Write,
        state: &SimState,
        device: &Device,
        scenario: &Scenario,
    ) -> Result<(), StoreError> {
        encode_header(sink)?;
        encode_setup(sink, device, scenario)?;
        encode_field(sink, "e", &state.e)?;
        encode_field(sink, "h", &state.h)?;
        encode_field(sink, "p", &state.p)?;
        encode_density(sink, &state.density)?;
        Ok(())
    }
}

impl Writer for BinWriter {
    fn name(&self) -> &str {
        BACKEND_NAME
    }

    fn extension(&self) -> &str {
        EXTENSION
    }

    fn write(
        &self,
        file: &Path,
        traces: &[Trace],
        device: &Device,
        scenario: &Scenario,
    ) -> Result<(), IoError> {
        let mut sink = BufWriter::new(File::create(file)?);
        Self::encode_results(&mut sink, traces, device, scenario).map_err(IoError::from)?;
        sink.flush()?;
        Ok(())
    }

    fn autosave(
        &self,
        file: &Path,
        state: &SimState,
        device: &Device,
        scenario: &Scenario,
    ) -> Result<(), IoError> {
        let mut sink = BufWriter::new(File::create(file)?);
        Self::encode_autosave(&mut sink, state, device, scenario).map_err(IoError::from)?;
        sink.flush()?;
        Ok(())
    }
}
