//! Project generator - main application orchestrator.
//!
//! This service sequences one generation run:
//! 1. Collect, validate and summarise the configuration
//! 2. Resolve the project root (creating it unless the path is `.`)
//! 3. Generate the backend
//! 4. Generate the frontend (Web projects only)
//! 5. Write the root files
//!
//! The first fatal error aborts the run and is returned tagged with its step.
//! Nothing is rolled back. The process working directory is never changed.

use std::path::PathBuf;
use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError, GenerationStep,
        generators::{GenerationContext, TemplateFile},
        ports::{CommandRunner, ConfigCollector, Filesystem, TemplateCatalog},
        registry::GeneratorRegistry,
    },
    domain::{BackendFramework, FrontendConfig, FrontendFramework, ProjectConfig, ProjectType},
    error::{FsgoError, FsgoResult},
};

/// Files written at the project root once both sides exist.
pub const ROOT_FILES: &[TemplateFile] = &[
    TemplateFile::new(".gitignore", "root/gitignore"),
    TemplateFile::new("Makefile", "root/Makefile"),
    TemplateFile::new("README.md", "root/README.md"),
];

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub name: String,
    /// Path as the user gave it (`.` for the current directory).
    pub path: String,
    /// Resolved project root.
    pub root: PathBuf,
    pub project_type: ProjectType,
    pub backend: BackendFramework,
    pub frontend: Option<FrontendFramework>,
    /// Frontend build commands, empty for API projects.
    pub build_commands: Vec<String>,
}

impl GenerationReport {
    /// The Makefile target that starts the development servers.
    pub fn dev_command(&self) -> &'static str {
        match self.project_type {
            ProjectType::Web => "make run",
            ProjectType::Api => "make b",
        }
    }

    /// Shell steps to start working on the project, in order.
    pub fn next_steps(&self) -> Vec<String> {
        let mut steps = Vec::new();
        if self.path != crate::domain::CURRENT_DIR {
            steps.push(format!("cd {}", self.path));
        }
        steps.push(self.dev_command().to_string());
        steps
    }
}

/// Main generation service.
pub struct ProjectGenerator {
    registry: GeneratorRegistry,
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
    catalog: Box<dyn TemplateCatalog>,
}

impl ProjectGenerator {
    pub fn new(
        registry: GeneratorRegistry,
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn CommandRunner>,
        catalog: Box<dyn TemplateCatalog>,
    ) -> Self {
        Self {
            registry,
            filesystem,
            runner,
            catalog,
        }
    }

    /// Run the full sequence, starting with the collector.
    pub fn generate(&self, collector: &dyn ConfigCollector) -> FsgoResult<GenerationReport> {
        let config = collector
            .collect()
            .map_err(|e| step_error(GenerationStep::CollectConfiguration, "prompt", e))?;
        self.run(&config, Some(collector))
    }

    /// Run from an already collected configuration. It is still validated.
    pub fn generate_config(&self, config: &ProjectConfig) -> FsgoResult<GenerationReport> {
        self.run(config, None)
    }

    #[instrument(
        skip_all,
        fields(
            project = %config.name(),
            path = %config.path(),
            project_type = %config.project_type(),
            backend = %config.backend_framework()
        )
    )]
    fn run(
        &self,
        config: &ProjectConfig,
        collector: Option<&dyn ConfigCollector>,
    ) -> FsgoResult<GenerationReport> {
        config.validate().map_err(|e| {
            step_error(GenerationStep::CollectConfiguration, config.name(), e.into())
        })?;
        if let Some(collector) = collector {
            collector
                .summarize(config)
                .map_err(|e| step_error(GenerationStep::CollectConfiguration, config.name(), e))?;
        }

        let root = self.prepare_root(config)?;
        info!(root = %root.display(), "Generating {}", config);

        let ctx = GenerationContext::new(
            root.clone(),
            self.filesystem.as_ref(),
            self.runner.as_ref(),
            self.catalog.as_ref(),
        );

        // Backend
        let backend = config.backend_framework();
        self.registry
            .require_backend(backend)
            .and_then(|generator| generator.generate(config, &ctx))
            .map_err(|e| step_error(GenerationStep::GenerateBackend, backend.as_str(), e))?;

        // Frontend
        let mut build_commands = Vec::new();
        let frontend = if config.project_type().has_frontend() {
            let frontend = required_frontend(config)?;
            let framework = frontend.framework;
            let generator = self
                .registry
                .require_frontend(framework)
                .map_err(|e| step_error(GenerationStep::GenerateFrontend, framework.as_str(), e))?;
            generator
                .generate(config, &ctx)
                .map_err(|e| step_error(GenerationStep::GenerateFrontend, framework.as_str(), e))?;
            build_commands = generator
                .build_commands()
                .iter()
                .map(|c| c.to_string())
                .collect();
            Some(framework)
        } else {
            None
        };

        // Root files
        ctx.write_templates(&root, ROOT_FILES).map_err(|e| {
            step_error(
                GenerationStep::CreateRootFiles,
                root.display().to_string(),
                e,
            )
        })?;

        info!("Project {} created", config.name());

        Ok(GenerationReport {
            name: config.name().to_string(),
            path: config.path().to_string(),
            root,
            project_type: config.project_type(),
            backend,
            frontend,
            build_commands,
        })
    }

    /// `<cwd>` for `.`, otherwise `<cwd>/<path>`, created if missing.
    fn prepare_root(&self, config: &ProjectConfig) -> FsgoResult<PathBuf> {
        let subject = config.path();
        let wrap = |e: FsgoError| step_error(GenerationStep::PrepareProjectDirectory, subject, e);

        let cwd = self.filesystem.current_dir().map_err(wrap)?;
        if config.is_current_dir() {
            return Ok(cwd);
        }
        let root = cwd.join(config.path());
        self.filesystem.create_dir_all(&root).map_err(wrap)?;
        Ok(root)
    }
}

/// The frontend of a Web config. Its absence means validation was bypassed.
fn required_frontend(config: &ProjectConfig) -> FsgoResult<&FrontendConfig> {
    config.frontend().ok_or_else(|| {
        step_error(
            GenerationStep::GenerateFrontend,
            config.name(),
            FsgoError::internal("Web project reached frontend generation without a frontend"),
        )
    })
}

fn step_error(step: GenerationStep, subject: impl Into<String>, source: FsgoError) -> FsgoError {
    ApplicationError::step(step, subject, source).into()
}
