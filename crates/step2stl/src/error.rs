//! Error types for STEP to STL conversion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by the conversion pipeline.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The resolved input file does not exist.
    #[error("input file not found at {}", .0.display())]
    MissingInput(PathBuf),

    /// The kernel failed while importing, meshing, or writing.
    #[error("conversion failed: {0}")]
    Conversion(#[from] KernelError),
}

/// Errors raised by a [`crate::kernel::GeometryKernel`] backend.
#[derive(Error, Debug)]
pub enum KernelError {
    /// I/O failure reading the input or writing the output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The STEP data could not be parsed into a model.
    #[error("STEP import failed: {0}")]
    Import(String),

    /// Tessellation or STL serialization failed.
    #[error("STL export failed: {0}")]
    Export(String),

    /// The file parsed but contains no shell geometry.
    #[error("no shells found in STEP file")]
    NoShells,
}

impl KernelError {
    /// Create an import error.
    pub fn import(message: impl Into<String>) -> Self {
        Self::Import(message.into())
    }

    /// Create an export error.
    pub fn export(message: impl Into<String>) -> Self {
        Self::Export(message.into())
    }
}

// Directory creation failures belong to the conversion phase, same as any
// other I/O the kernel performs.
impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        Self::Conversion(KernelError::Io(err))
    }
}
