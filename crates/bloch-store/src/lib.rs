//! Binary storage backend for the Bloch simulation framework.
//!
//! Implements the [`Reader`](bloch_io::Reader) and
//! [`Writer`](bloch_io::Writer) contracts with a simple little-endian
//! section format — no external storage library. Registered under the
//! name `"bin"` via [`register`].
//!
//! # Format
//!
//! ```text
//! [MAGIC "BLCH"] [VERSION u8] then tagged sections until EOF:
//!   SETUP:   scenario name/timestep/gridpoint/endtime, device name/length
//!   TRACE:   name, is_complex, rows, cols, real values, [imag values]
//!   FIELD:   name, values                  (autosaved e/h/p vectors)
//!   DENSITY: per gridpoint: main diagonal, off diagonal
//! ```
//!
//! Strings are u32-length-prefixed UTF-8; arrays are u64-count-prefixed.
//! The layout mirrors the format-agnostic setup/result/density
//! namespaces of the writer contract, one section per namespace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod reader;
pub mod writer;

pub use error::StoreError;
pub use reader::BinReader;
pub use writer::BinWriter;

use bloch_core::RegistryError;
use bloch_io::{Reader, ReaderRegistry, Writer, WriterRegistry};

/// Magic bytes at the start of every store file.
pub const MAGIC: [u8; 4] = *b"BLCH";

/// Current binary format version.
pub const FORMAT_VERSION: u8 = 1;

/// Name this backend registers under.
pub const BACKEND_NAME: &str = "bin";

/// File extension this backend conventionally uses.
pub const EXTENSION: &str = "bin";

/// Register the binary backend into the reader and writer registries.
///
/// Call once at program start, alongside every other backend
/// registration — registration is explicit and ordered, never a side
/// effect of loading a module.
///
/// # Errors
///
/// Returns [`RegistryError::AlreadyRegistered`] if `"bin"` is already
/// bound in either registry.
pub fn register(
    readers: &mut ReaderRegistry,
    writers: &mut WriterRegistry,
) -> Result<(), RegistryError> {
    readers.register(BACKEND_NAME, || Box::new(BinReader::new()) as Box<dyn Reader>)?;
    writers.register(BACKEND_NAME, || Box::new(BinWriter::new()) as Box<dyn Writer>)?;
    Ok(())
}
