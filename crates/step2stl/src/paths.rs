//! Path resolution relative to the tool's own directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directory containing the running executable.
///
/// Falls back to the current directory when the executable path cannot
/// be determined.
pub fn tool_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Resolve `path` against `base`.
///
/// Absolute paths are returned unchanged. The result is a lexical join;
/// nothing is canonicalized, so the output side may name a file that does
/// not exist yet.
pub fn resolve_from(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Create the parent directory of `path` if it is missing.
///
/// Returns the directory that was created, or `None` when nothing needed
/// creating (existing directory, or a bare file name with no parent).
pub fn ensure_parent_dir(path: &Path) -> io::Result<Option<PathBuf>> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => return Ok(None),
    };
    if parent.exists() {
        return Ok(None);
    }
    fs::create_dir_all(parent)?;
    Ok(Some(parent.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative() {
        let base = Path::new("/opt/tool");
        let resolved = resolve_from(base, Path::new("../data/model.step"));
        assert_eq!(resolved, PathBuf::from("/opt/tool/../data/model.step"));
    }

    #[test]
    fn test_resolve_absolute_passthrough() {
        let base = Path::new("/opt/tool");
        let resolved = resolve_from(base, Path::new("/tmp/model.step"));
        assert_eq!(resolved, PathBuf::from("/tmp/model.step"));
    }

    #[test]
    fn test_ensure_parent_dir_creates_nested() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a/b/out.stl");
        let created = ensure_parent_dir(&target).unwrap();
        assert_eq!(created, Some(dir.path().join("a/b")));
        assert!(dir.path().join("a/b").is_dir());
    }

    #[test]
    fn test_ensure_parent_dir_existing() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.stl");
        assert_eq!(ensure_parent_dir(&target).unwrap(), None);
    }

    #[test]
    fn test_ensure_parent_dir_bare_name() {
        assert_eq!(ensure_parent_dir(Path::new("out.stl")).unwrap(), None);
    }
}
