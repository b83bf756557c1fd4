//! Template overrides read from a local directory.
//!
//! A file at `<root>/backend/fiber/main.go` replaces the built-in template
//! with logical path `backend/fiber/main.go`. Keys the directory does not
//! provide fall through to the next catalog.

use std::{
    collections::BTreeMap,
    fs,
    path::Path,
};

use fsgo_core::{
    application::{ApplicationError, ports::TemplateCatalog},
    error::FsgoResult,
};
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct DirectoryCatalog {
    entries: BTreeMap<String, String>,
}

impl DirectoryCatalog {
    /// Read every regular file below `root`. Files that are not UTF-8 are
    /// skipped with a warning.
    #[instrument(skip_all, fields(root = %root.as_ref().display()))]
    pub fn load(root: impl AsRef<Path>) -> FsgoResult<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(ApplicationError::FilesystemError {
                path: root.to_path_buf(),
                reason: "Template directory does not exist".into(),
            }
            .into());
        }

        let mut entries = BTreeMap::new();
        for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| ApplicationError::FilesystemError {
                path: e.path().unwrap_or(root).to_path_buf(),
                reason: e.to_string(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(key) = logical_key(root, entry.path()) else {
                continue;
            };
            match fs::read_to_string(entry.path()) {
                Ok(content) => {
                    debug!(%key, "template override loaded");
                    entries.insert(key, content);
                }
                Err(e) => warn!(path = %entry.path().display(), error = %e, "skipping template"),
            }
        }

        Ok(Self {
            entries,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// `root/a/b.go` → `a/b.go`, always with forward slashes.
fn logical_key(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Option<Vec<&str>> = rel.components().map(|c| c.as_os_str().to_str()).collect();
    Some(parts?.join("/"))
}

impl TemplateCatalog for DirectoryCatalog {
    fn render(&self, key: &str) -> FsgoResult<&str> {
        self.entries.get(key).map(String::as_str).ok_or_else(|| {
            ApplicationError::TemplateMissing {
                key: key.to_string(),
            }
            .into()
        })
    }

    fn keys(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }
}
