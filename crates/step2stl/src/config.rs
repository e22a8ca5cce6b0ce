//! Conversion request configuration.

use std::path::PathBuf;

use crate::kernel::MeshTolerances;

/// Default input path, relative to the tool's directory.
pub const DEFAULT_INPUT_PATH: &str = "../OpenSCAD/step/XIAO-ESP32S3 v2.step";

/// Default output path, relative to the tool's directory.
pub const DEFAULT_OUTPUT_PATH: &str = "../OpenSCAD/stl/XIAO-ESP32S3 v2.stl";

/// A single STEP to STL conversion request.
///
/// Relative paths are resolved against the tool's own directory (see
/// [`crate::paths::tool_dir`]), not the process working directory, so the
/// tool behaves the same no matter where it is invoked from. Absolute
/// paths are used as given.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertConfig {
    /// STEP file to read.
    pub input: PathBuf,
    /// STL file to write. Its parent directory is created if missing.
    pub output: PathBuf,
    /// Mesh quality bounds forwarded to the kernel untouched.
    pub tolerances: MeshTolerances,
}

impl ConvertConfig {
    /// Create a config for the given input and output with default tolerances.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            tolerances: MeshTolerances::default(),
        }
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH)
    }
}
