//! Generator contract and the built-in generators.
//!
//! A generator produces one side of a project (backend under `server/`,
//! frontend under `client/`) for exactly one framework. Generators are
//! stateless; everything they touch comes in through a
//! [`GenerationContext`], so the same instance can serve any number of runs.
//!
//! Each generator describes its **layout** (directories to create and
//! `(output path, catalog key)` pairs to write) and inherits `generate`,
//! which walks that layout in order through the shared pipeline of its side.

pub mod backend;
pub mod context;
pub mod frontend;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::{ChiGenerator, EchoGenerator, FiberGenerator, GinGenerator};
pub use context::GenerationContext;
pub use frontend::{NextJsGenerator, ReactGenerator, SvelteGenerator};

use crate::domain::{BackendFramework, FrontendConfig, FrontendFramework, ProjectConfig};
use crate::error::FsgoResult;

/// One file of a generator's layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateFile {
    /// Output path, relative to the generator's base directory.
    pub path: &'static str,
    /// Logical path in the template catalog.
    pub key: &'static str,
}

impl TemplateFile {
    pub const fn new(path: &'static str, key: &'static str) -> Self {
        Self { path, key }
    }
}

/// Generates the Go backend under `server/`.
pub trait BackendGenerator: Send + Sync {
    /// Registry key.
    fn framework(&self) -> BackendFramework;

    /// Go module paths fetched with `go get`, in order.
    fn dependencies(&self) -> &'static [&'static str];

    /// Files whose body differs per framework (entry point, router, ...).
    fn framework_files(&self) -> &'static [TemplateFile];

    /// Directories on top of the shared backend tree.
    fn extra_directories(&self) -> &'static [&'static str] {
        &[]
    }

    /// Every directory created under `server/`, in creation order.
    fn directories(&self) -> Vec<&'static str> {
        backend::COMMON_DIRECTORIES
            .iter()
            .chain(self.extra_directories())
            .copied()
            .collect()
    }

    /// Every file written under `server/`, in write order.
    fn files(&self) -> Vec<TemplateFile> {
        backend::COMMON_FILES
            .iter()
            .chain(self.framework_files())
            .copied()
            .collect()
    }

    /// Produce the backend skeleton. Call at most once per run.
    fn generate(&self, config: &ProjectConfig, ctx: &GenerationContext<'_>) -> FsgoResult<()> {
        backend::run_pipeline(self, config, ctx)
    }
}

/// Generates the JS frontend under `client/`.
pub trait FrontendGenerator: Send + Sync {
    /// Registry key.
    fn framework(&self) -> FrontendFramework;

    /// Commands the user runs to build and serve the frontend. Informational.
    fn build_commands(&self) -> &'static [&'static str];

    /// Shell line that creates the `client/` project from the toggles.
    fn create_command(&self, frontend: &FrontendConfig) -> String;

    /// Directories created under `client/` after the project exists.
    fn directories(&self) -> &'static [&'static str] {
        &[]
    }

    /// Source files written under `client/`.
    fn files(&self) -> &'static [TemplateFile] {
        &[]
    }

    /// `.env` and `.env.example`.
    fn env_files(&self) -> &'static [TemplateFile];

    /// Produce the frontend. Call at most once per run.
    fn generate(&self, config: &ProjectConfig, ctx: &GenerationContext<'_>) -> FsgoResult<()> {
        frontend::run_pipeline(self, config, ctx)
    }
}
