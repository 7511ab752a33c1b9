use super::FileSystem;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Disk-backed file system.
///
/// Writes go to a temporary file next to the target which is then renamed
/// over it, so a crash never leaves a half-written game screen behind. The
/// replacement keeps the original file's permissions, and a symlinked name
/// has its target rewritten while the link stays in place.
pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RealFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for RealFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).context(format!("Failed to read file {:?}", path))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        // Replace the file a symlink points at, not the link itself.
        let (target, permissions) = match fs::canonicalize(path) {
            Ok(resolved) => {
                let permissions = fs::metadata(&resolved)
                    .context(format!("Failed to get metadata for {:?}", resolved))?
                    .permissions();
                (resolved, Some(permissions))
            }
            Err(_) => (path.to_path_buf(), None),
        };

        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)
            .context(format!("Failed to create temporary file in {:?}", dir))?;
        tmp.write_all(contents.as_bytes())
            .context(format!("Failed to write temporary file for {:?}", target))?;
        if let Some(permissions) = permissions {
            tmp.as_file()
                .set_permissions(permissions)
                .context(format!("Failed to copy permissions of {:?}", target))?;
        }
        tmp.persist(&target)
            .map_err(|e| e.error)
            .context(format!("Failed to replace file {:?}", target))?;

        Ok(())
    }
}
