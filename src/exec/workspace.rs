// Scratch directories for gist clones

use anyhow::{Context, Result};
use std::path::Path;
use tempfile::TempDir;

/// Temporary directory a gist is cloned into before its entry script
/// runs. The directory and everything in it are removed on drop.
pub struct ScratchDir {
    dir: TempDir,
}

impl ScratchDir {
    pub fn new() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("kiss-")
            .tempdir()
            .context("Failed to create scratch directory")?;
        tracing::debug!("Created scratch directory {}", dir.path().display());
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Give the entry script its execute bit. No-op on non-Unix targets.
pub fn mark_executable(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let metadata = std::fs::metadata(path)
            .with_context(|| format!("Entry script {} not found", path.display()))?;
        let mut permissions = metadata.permissions();
        permissions.set_mode(permissions.mode() | 0o755);
        std::fs::set_permissions(path, permissions)
            .with_context(|| format!("Failed to mark {} executable", path.display()))?;
    }
    #[cfg(not(unix))]
    {
        let _ = path;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scratch_dir_removed_on_drop() {
        let scratch = ScratchDir::new().unwrap();
        let path = scratch.path().to_path_buf();
        assert!(path.is_dir());
        drop(scratch);
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_mark_executable_sets_mode() {
        use std::os::unix::fs::PermissionsExt;

        let scratch = ScratchDir::new().unwrap();
        let script = scratch.path().join("run");
        std::fs::write(&script, "#!/bin/sh\necho ok\n").unwrap();

        mark_executable(&script).unwrap();
        let mode = std::fs::metadata(&script).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }

    #[test]
    fn test_mark_executable_missing_file_is_an_error() {
        let scratch = ScratchDir::new().unwrap();
        assert!(mark_executable(&scratch.path().join("run")).is_err());
    }
}
