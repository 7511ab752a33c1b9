//! FileSystem trait definition

use anyhow::Result;
use std::path::Path;

/// The file operations a retrofit run needs, abstracted for testability
pub trait FileSystem: Send + Sync {
    /// Check if path is an existing regular file
    fn is_file(&self, path: &Path) -> bool;

    /// Read file contents as UTF-8
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Replace the file's contents
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
}
