//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use ncomp_core::{
    application::{ApplicationError, ports::Filesystem},
    error::NcompResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to the service and
/// inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    failing_writes: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a directory and all its ancestors.
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            let mut current = PathBuf::new();
            for component in path.as_ref().components() {
                current.push(component);
                inner.directories.insert(current.clone());
            }
        }
        self
    }

    /// Make every write to `path` fail.
    pub fn fail_writes_to(self, path: impl Into<PathBuf>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing_writes.insert(path.into());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// List all directories.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }
}

fn fs_error(path: &Path, reason: &str) -> ncomp_core::error::NcompError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}

fn has_parent(inner: &MemoryFilesystemInner, path: &Path) -> bool {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => inner.directories.contains(parent),
        _ => true,
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn create_dir(&self, path: &Path) -> NcompResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| fs_error(path, "lock poisoned"))?;

        if inner.directories.contains(path) || inner.files.contains_key(path) {
            return Err(fs_error(path, "already exists"));
        }
        if !has_parent(&inner, path) {
            return Err(fs_error(path, "parent directory does not exist"));
        }

        inner.directories.insert(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> NcompResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| fs_error(path, "lock poisoned"))?;

        if inner.failing_writes.contains(path) {
            return Err(fs_error(path, "simulated write failure"));
        }
        if !has_parent(&inner, path) {
            return Err(fs_error(path, "parent directory does not exist"));
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> NcompResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| fs_error(path, "lock poisoned"))?;

        if !inner.directories.contains(path) {
            return Err(fs_error(path, "no such directory"));
        }

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }
}
