//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use fsgo_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{FsgoError, FsgoResult},
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep one handle and give the other to
/// the orchestrator.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug)]
struct MemoryFilesystemInner {
    cwd: PathBuf,
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    read_only: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// An empty filesystem whose current directory is `/work`.
    pub fn new() -> Self {
        Self::with_current_dir("/work")
    }

    pub fn with_current_dir(cwd: impl Into<PathBuf>) -> Self {
        let cwd = cwd.into();
        let fs = Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner {
                cwd: cwd.clone(),
                files: BTreeMap::new(),
                directories: BTreeSet::new(),
                read_only: BTreeSet::new(),
            })),
        };
        // The starting directory always exists.
        let _ = fs.create_dir_all(&cwd);
        fs
    }

    /// Make every write at or below `path` fail (testing helper).
    pub fn deny_writes(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.read_only.insert(path.into());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFilesystemInner {
    fn check_writable(&self, path: &Path) -> FsgoResult<()> {
        if self.read_only.iter().any(|ro| path.starts_with(ro)) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Permission denied".into(),
            }
            .into());
        }
        Ok(())
    }

    fn add_dirs(&mut self, path: &Path) -> FsgoResult<()> {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if self.files.contains_key(&current) {
                return Err(ApplicationError::FilesystemError {
                    path: current,
                    reason: "Not a directory".into(),
                }
                .into());
            }
            if !self.directories.contains(&current) {
                self.check_writable(&current)?;
                self.directories.insert(current.clone());
            }
        }
        Ok(())
    }
}

fn poisoned() -> FsgoError {
    FsgoError::internal("memory filesystem lock poisoned")
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> FsgoResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        inner.add_dirs(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> FsgoResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        if let Some(parent) = path.parent() {
            inner.add_dirs(parent)?;
        }
        inner.check_writable(path)?;
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn current_dir(&self) -> FsgoResult<PathBuf> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        Ok(inner.cwd.clone())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_creates_parent_directories() {
        let fs = MemoryFilesystem::new();
        fs.write_file(Path::new("/work/a/b/c.txt"), "x").unwrap();
        assert!(fs.is_dir(Path::new("/work/a/b")));
        assert_eq!(fs.read_file(Path::new("/work/a/b/c.txt")).as_deref(), Some("x"));
    }

    #[test]
    fn denied_prefix_fails_writes_below_it() {
        let fs = MemoryFilesystem::new();
        fs.deny_writes("/work/locked");
        assert!(fs.create_dir_all(Path::new("/work/locked/server")).is_err());
        assert!(fs.write_file(Path::new("/work/open/ok"), "").is_ok());
    }

    #[test]
    fn file_blocks_directory_creation() {
        let fs = MemoryFilesystem::new();
        fs.write_file(Path::new("/work/server"), "").unwrap();
        assert!(fs.create_dir_all(Path::new("/work/server/api")).is_err());
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::with_current_dir("/tmp/here");
        let other = fs.clone();
        other.create_dir_all(Path::new("/tmp/here/x")).unwrap();
        assert!(fs.exists(Path::new("/tmp/here/x")));
        assert_eq!(fs.current_dir().unwrap(), PathBuf::from("/tmp/here"));
    }
}
