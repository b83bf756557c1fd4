//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `fsgo-adapters` crate provides implementations; the CLI provides the
//! configuration collector.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::ProjectConfig;
use crate::error::FsgoResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `fsgo_adapters::filesystem::LocalFilesystem` (production)
/// - `fsgo_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Succeeds if it exists.
    fn create_dir_all(&self, path: &Path) -> FsgoResult<()>;

    /// Write content to a file, creating parent directories and replacing
    /// any existing file.
    fn write_file(&self, path: &Path, content: &str) -> FsgoResult<()>;

    /// The directory the process was started in.
    fn current_dir(&self) -> FsgoResult<PathBuf>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// A program invocation with an explicit working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run `line` through `sh -c`, for commands that need pipes.
    pub fn shell(line: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self::new("sh", cwd).arg("-c").arg(line)
    }

    /// The command as a user would type it.
    pub fn command_line(&self) -> String {
        match self.args.as_slice() {
            [flag, line] if self.program == "sh" && flag == "-c" => line.clone(),
            _ => std::iter::once(self.program.as_str())
                .chain(self.args.iter().map(String::as_str))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Port for running external toolchains (`go`, `bun`, `npx`, `npm`).
///
/// Output is inherited by the child; the runner blocks until it exits.
/// A non-zero exit status is an error.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    fn run(&self, command: &CommandSpec) -> FsgoResult<()>;
}

/// Port for the static template bodies, addressed by logical path
/// (e.g. `backend/common/config.go`).
pub trait TemplateCatalog: Send + Sync {
    /// Look up a template. Unknown keys are `ApplicationError::TemplateMissing`.
    fn render(&self, key: &str) -> FsgoResult<&str>;

    /// Every logical path the catalog can render.
    fn keys(&self) -> Vec<&str>;
}

/// Port for obtaining the project configuration, usually by asking the user.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigCollector {
    /// Produce a configuration. Cancellation is `ApplicationError::Cancelled`.
    fn collect(&self) -> FsgoResult<ProjectConfig>;

    /// Present the configuration before anything is written. May ask for
    /// confirmation and return `ApplicationError::Cancelled`.
    fn summarize(&self, config: &ProjectConfig) -> FsgoResult<()>;
}
