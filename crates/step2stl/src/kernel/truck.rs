//! Kernel backed by the pure-Rust truck geometry crates.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use truck_meshalgo::prelude::*;
use truck_polymesh::{stl, PolygonMesh};
use truck_stepio::r#in::{ruststep, Table};

use crate::error::KernelError;
use crate::kernel::{GeometryKernel, MeshTolerances};

/// A STEP model parsed into truck's entity table.
///
/// Opaque to the pipeline; the only query it exposes is the shell count.
pub struct StepModel {
    table: Table,
}

impl StepModel {
    /// Number of shells found in the source file.
    pub fn shell_count(&self) -> usize {
        self.table.shell.len()
    }
}

/// Geometry kernel using truck for STEP parsing and tessellation.
#[derive(Debug, Default, Clone, Copy)]
pub struct TruckKernel;

impl TruckKernel {
    /// Create a new kernel.
    pub fn new() -> Self {
        Self
    }
}

impl GeometryKernel for TruckKernel {
    type Document = StepModel;

    fn import_step(&self, path: &Path) -> Result<StepModel, KernelError> {
        let text = std::fs::read_to_string(path)?;
        let exchange = ruststep::parser::parse(&text)
            .map_err(|e| KernelError::import(e.to_string()))?;
        let section = exchange
            .data
            .first()
            .ok_or_else(|| KernelError::import("no data section in STEP file"))?;
        let table = Table::from_data_section(section);
        if table.shell.is_empty() {
            return Err(KernelError::NoShells);
        }
        log::debug!(
            "parsed {} shell(s) from {}",
            table.shell.len(),
            path.display()
        );
        Ok(StepModel { table })
    }

    fn export_stl(
        &self,
        document: &StepModel,
        path: &Path,
        tolerances: MeshTolerances,
    ) -> Result<(), KernelError> {
        // truck subdivides by chordal deviation only; there is no angular knob.
        let _ = tolerances.angular; // acknowledged but unused

        let table = &document.table;
        let mut mesh = PolygonMesh::default();
        for shell in table.shell.values() {
            let compressed = table
                .to_compressed_shell(shell)
                .map_err(|e| KernelError::export(format!("{e:?}")))?;
            mesh.merge(compressed.triangulation(tolerances.linear).to_polygon());
        }
        log::debug!(
            "tessellated {} vertices at tolerance {}",
            mesh.positions().len(),
            tolerances.linear
        );

        let mut writer = BufWriter::new(File::create(path)?);
        stl::write(&mesh, &mut writer, stl::StlType::Binary)
            .map_err(|e| KernelError::export(format!("{e:?}")))?;
        // Dropping the writer would discard flush errors.
        writer.into_inner().map_err(|e| e.into_error())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const CUBE_STEP: &str = include_str!("../../tests/fixtures/cube.step");

    fn write_fixture(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_import_cube() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(dir.path(), "cube.step", CUBE_STEP);

        let model = TruckKernel::new().import_step(&path).unwrap();
        assert_eq!(model.shell_count(), 1);
    }

    #[test]
    fn test_import_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(dir.path(), "bad.step", "this is not a STEP file");

        let result = TruckKernel::new().import_step(&path);
        assert!(matches!(result, Err(KernelError::Import(_))));
    }

    #[test]
    fn test_import_no_shells() {
        let step_content = r#"ISO-10303-21;
HEADER;
FILE_DESCRIPTION((''), '2;1');
FILE_NAME('empty.step', '2024-06-01', (''), (''), '', '', '');
FILE_SCHEMA(('AUTOMOTIVE_DESIGN'));
ENDSEC;
DATA;
#1 = CARTESIAN_POINT('', (0.0, 0.0, 0.0));
ENDSEC;
END-ISO-10303-21;
"#;
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(dir.path(), "empty.step", step_content);

        let result = TruckKernel::new().import_step(&path);
        assert!(matches!(result, Err(KernelError::NoShells)));
    }

    #[test]
    fn test_export_writes_binary_stl() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_fixture(dir.path(), "cube.step", CUBE_STEP);
        let output = dir.path().join("cube.stl");

        let kernel = TruckKernel::new();
        let model = kernel.import_step(&input).unwrap();
        kernel
            .export_stl(&model, &output, MeshTolerances::default())
            .unwrap();

        // Binary STL: 80-byte header, u32 triangle count, 50 bytes per triangle.
        let bytes = fs::read(&output).unwrap();
        assert!(bytes.len() >= 84, "too short: {} bytes", bytes.len());
        let count = u32::from_le_bytes(bytes[80..84].try_into().unwrap()) as usize;
        assert_eq!(bytes.len(), 84 + 50 * count);
        assert!(count >= 12, "cube should mesh to at least 12 triangles");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_export_fails_on_full_device() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_fixture(dir.path(), "cube.step", CUBE_STEP);

        let kernel = TruckKernel::new();
        let model = kernel.import_step(&input).unwrap();
        // The cube mesh fits in the write buffer, so the ENOSPC from
        // /dev/full only shows up when the buffer is flushed.
        let err = kernel
            .export_stl(&model, Path::new("/dev/full"), MeshTolerances::default())
            .unwrap_err();

        assert!(matches!(err, KernelError::Io(_)));
    }
}
