//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use fsgo_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{FsgoError, FsgoResult},
};

/// Permission bits for every directory fsgo creates.
#[cfg(unix)]
const DIR_MODE: u32 = 0o755;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> FsgoResult<()> {
        let mut builder = std::fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(DIR_MODE);
        }
        builder
            .create(path)
            .map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> FsgoResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn current_dir(&self) -> FsgoResult<PathBuf> {
        std::env::current_dir().map_err(|e| map_io_error(Path::new("."), e, "read current directory"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> FsgoError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn create_dir_all_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("server/cmd/server/tmp");
        let fs = LocalFilesystem::new();

        fs.create_dir_all(&dir).unwrap();
        fs.create_dir_all(&dir).unwrap();

        assert!(dir.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn directories_get_0755() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("pkg");
        LocalFilesystem.create_dir_all(&dir).unwrap();

        let mode = std::fs::metadata(&dir).unwrap().permissions().mode() & 0o777;
        // umask may clear bits but never adds any
        assert_eq!(mode & !DIR_MODE, 0);
    }

    #[test]
    fn write_file_creates_parents_and_overwrites() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("client/.env");
        let fs = LocalFilesystem::new();

        fs.write_file(&file, "A=1\n").unwrap();
        fs.write_file(&file, "A=2\n").unwrap();

        assert_eq!(std::fs::read_to_string(&file).unwrap(), "A=2\n");
    }

    #[test]
    fn write_into_a_file_path_reports_the_path() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("server");
        std::fs::write(&blocker, "").unwrap();

        let err = LocalFilesystem
            .write_file(&blocker.join("Dockerfile"), "FROM scratch")
            .unwrap_err();
        assert!(err.to_string().contains("server"));
    }
}
