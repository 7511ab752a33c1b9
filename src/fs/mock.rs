use super::FileSystem;
use anyhow::{anyhow, Result};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// In-memory file system with fault injection and write recording.
pub struct MockFileSystem {
    files: RwLock<HashMap<PathBuf, String>>,
    unreadable: RwLock<HashSet<PathBuf>>,
    read_only: RwLock<HashSet<PathBuf>>,
    writes: RwLock<Vec<PathBuf>>,
    root: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::with_root(PathBuf::from("/mock"))
    }

    pub fn with_root(root: PathBuf) -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
            unreadable: RwLock::new(HashSet::new()),
            read_only: RwLock::new(HashSet::new()),
            writes: RwLock::new(Vec::new()),
            root,
        }
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = self.normalize_path(path.as_ref());
        self.files.write().unwrap().insert(path, content.to_string());
    }

    /// Registers a file whose reads fail, as a bad encoding or permission would.
    pub fn add_unreadable_file(&self, path: impl AsRef<Path>) {
        let path = self.normalize_path(path.as_ref());
        self.files.write().unwrap().insert(path.clone(), String::new());
        self.unreadable.write().unwrap().insert(path);
    }

    /// Makes writes to an existing file fail.
    pub fn make_read_only(&self, path: impl AsRef<Path>) {
        let path = self.normalize_path(path.as_ref());
        self.read_only.write().unwrap().insert(path);
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        let path = self.normalize_path(path.as_ref());
        self.files.read().unwrap().get(&path).cloned()
    }

    /// Paths written so far, in order.
    pub fn writes(&self) -> Vec<PathBuf> {
        self.writes.read().unwrap().clone()
    }

    fn normalize_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        let path = self.normalize_path(path);
        self.files.read().unwrap().contains_key(&path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let path = self.normalize_path(path);
        if self.unreadable.read().unwrap().contains(&path) {
            return Err(anyhow!("stream did not contain valid UTF-8: {:?}", path));
        }

        self.files
            .read()
            .unwrap()
            .get(&path)
            .cloned()
            .ok_or_else(|| anyhow!("File not found: {:?}", path))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        let path = self.normalize_path(path);
        if self.read_only.read().unwrap().contains(&path) {
            return Err(anyhow!("Permission denied: {:?}", path));
        }

        self.writes.write().unwrap().push(path.clone());
        self.files
            .write()
            .unwrap()
            .insert(path, contents.to_string());
        Ok(())
    }
}
