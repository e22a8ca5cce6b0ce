//! Geometry kernel abstraction.
//!
//! The pipeline never touches B-rep data itself. Import and export are
//! delegated to a [`GeometryKernel`], so the surrounding logic can be
//! exercised against a stub and the real backend can be swapped without
//! touching the rest of the crate.

use std::path::Path;

use crate::error::KernelError;

#[cfg(feature = "truck")]
mod truck;

#[cfg(feature = "truck")]
pub use truck::{StepModel, TruckKernel};

/// Default maximum chordal deviation between surface and mesh, in model units.
pub const DEFAULT_LINEAR_TOLERANCE: f64 = 0.001;

/// Default maximum angular deviation between adjacent facets, in radians.
pub const DEFAULT_ANGULAR_TOLERANCE: f64 = 0.1;

/// Mesh quality bounds handed to the kernel during export.
///
/// Values are forwarded to the backend as given; no validation or
/// clamping happens on this side of the boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshTolerances {
    /// Maximum chordal deviation between the B-rep surface and the mesh.
    pub linear: f64,
    /// Maximum angular deviation between adjacent facets, in radians.
    pub angular: f64,
}

impl MeshTolerances {
    /// Create tolerances from explicit bounds.
    pub fn new(linear: f64, angular: f64) -> Self {
        Self { linear, angular }
    }
}

impl Default for MeshTolerances {
    fn default() -> Self {
        Self {
            linear: DEFAULT_LINEAR_TOLERANCE,
            angular: DEFAULT_ANGULAR_TOLERANCE,
        }
    }
}

/// A geometry backend that reads STEP data and meshes it to STL.
pub trait GeometryKernel {
    /// Parsed in-memory model produced by [`GeometryKernel::import_step`].
    type Document;

    /// Read and parse the STEP file at `path`.
    fn import_step(&self, path: &Path) -> Result<Self::Document, KernelError>;

    /// Tessellate `document` within `tolerances` and write binary STL to `path`.
    fn export_stl(
        &self,
        document: &Self::Document,
        path: &Path,
        tolerances: MeshTolerances,
    ) -> Result<(), KernelError>;
}
