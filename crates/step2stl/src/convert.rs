//! The conversion pipeline.
//!
//! Steps, in order: resolve both paths, check the input exists, import,
//! create the output directory if missing, export. A failed import
//! therefore leaves the filesystem untouched, and the output directory
//! is guaranteed to exist before the kernel writes into it.

use std::path::{Path, PathBuf};

use crate::config::ConvertConfig;
use crate::error::ConvertError;
use crate::kernel::GeometryKernel;
use crate::paths;

/// Progress notifications emitted while a conversion runs.
///
/// Consumers decide how to surface these; the pipeline itself never
/// prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertEvent {
    /// The input file is about to be parsed.
    ReadingInput(PathBuf),
    /// A missing output directory was just created.
    CreatedDir(PathBuf),
    /// The mesh is about to be written.
    WritingOutput(PathBuf),
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertReport {
    /// Resolved path that was read.
    pub input: PathBuf,
    /// Resolved path that was written.
    pub output: PathBuf,
    /// Output directory created during this run, if any.
    pub created_dir: Option<PathBuf>,
}

/// Convert with paths resolved against the tool's directory.
///
/// See [`convert_from`] for the variant with an explicit base directory.
pub fn convert<K: GeometryKernel>(
    kernel: &K,
    config: &ConvertConfig,
    progress: impl FnMut(ConvertEvent),
) -> Result<ConvertReport, ConvertError> {
    convert_from(kernel, config, &paths::tool_dir(), progress)
}

/// Convert `config.input` to `config.output`, resolving relative paths
/// against `base_dir`.
///
/// # Errors
///
/// Returns [`ConvertError::MissingInput`] when the resolved input does not
/// exist (checked before the kernel is invoked), and
/// [`ConvertError::Conversion`] for any kernel or directory-creation
/// failure. A failed export may leave a partial output file behind; it is
/// not removed.
pub fn convert_from<K: GeometryKernel>(
    kernel: &K,
    config: &ConvertConfig,
    base_dir: &Path,
    mut progress: impl FnMut(ConvertEvent),
) -> Result<ConvertReport, ConvertError> {
    let input = paths::resolve_from(base_dir, &config.input);
    let output = paths::resolve_from(base_dir, &config.output);

    if !input.exists() {
        return Err(ConvertError::MissingInput(input));
    }

    log::info!("converting {} to {}", input.display(), output.display());

    progress(ConvertEvent::ReadingInput(input.clone()));
    let document = kernel.import_step(&input)?;

    let created_dir = paths::ensure_parent_dir(&output)?;
    if let Some(dir) = &created_dir {
        progress(ConvertEvent::CreatedDir(dir.clone()));
    }

    progress(ConvertEvent::WritingOutput(output.clone()));
    kernel.export_stl(&document, &output, config.tolerances)?;

    Ok(ConvertReport {
        input,
        output,
        created_dir,
    })
}
