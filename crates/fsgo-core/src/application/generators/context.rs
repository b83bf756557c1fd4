//! The explicit project root and the ports a generator may use.
//!
//! Generators never consult the process working directory. Every path they
//! produce is `root.join(...)`, and every command they spawn carries its own
//! `cwd`. The process directory is therefore the same before and after a run
//! no matter how the run ends.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::application::generators::TemplateFile;
use crate::application::ports::{CommandRunner, CommandSpec, Filesystem, TemplateCatalog};
use crate::error::FsgoResult;

pub struct GenerationContext<'a> {
    root: PathBuf,
    filesystem: &'a dyn Filesystem,
    runner: &'a dyn CommandRunner,
    catalog: &'a dyn TemplateCatalog,
}

impl<'a> GenerationContext<'a> {
    pub fn new(
        root: impl Into<PathBuf>,
        filesystem: &'a dyn Filesystem,
        runner: &'a dyn CommandRunner,
        catalog: &'a dyn TemplateCatalog,
    ) -> Self {
        Self {
            root: root.into(),
            filesystem,
            runner,
            catalog,
        }
    }

    /// The project root every generated path is resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn filesystem(&self) -> &dyn Filesystem {
        self.filesystem
    }

    /// Create `base/dir` for each entry, in order. Fatal.
    pub fn create_dirs(&self, base: &Path, dirs: &[&str]) -> FsgoResult<()> {
        for dir in dirs {
            let path = base.join(dir);
            debug!(path = %path.display(), "creating directory");
            self.filesystem.create_dir_all(&path)?;
        }
        Ok(())
    }

    /// Write each template to `base/file.path`, in order. Fatal; files
    /// already written stay on disk.
    pub fn write_templates(&self, base: &Path, files: &[TemplateFile]) -> FsgoResult<()> {
        for file in files {
            let content = self.catalog.render(file.key)?;
            let path = base.join(file.path);
            debug!(path = %path.display(), key = file.key, "writing file");
            self.filesystem.write_file(&path, content)?;
        }
        Ok(())
    }

    /// Run a command whose failure ends the run.
    pub fn run_required(&self, command: &CommandSpec) -> FsgoResult<()> {
        debug!(command = %command, cwd = %command.cwd.display(), "running command");
        self.runner.run(command)
    }

    /// Run a command whose failure is only logged. Returns whether it succeeded.
    pub fn run_advisory(&self, command: &CommandSpec) -> bool {
        debug!(command = %command, cwd = %command.cwd.display(), "running command");
        match self.runner.run(command) {
            Ok(()) => true,
            Err(e) => {
                warn!(command = %command, error = %e, "command failed, continuing");
                false
            }
        }
    }
}
