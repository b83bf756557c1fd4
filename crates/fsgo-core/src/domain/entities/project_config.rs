//! The `ProjectConfig` aggregate root and its builder.
//!
//! A `ProjectConfig` is the fully-resolved description of the project the
//! user wants to generate. It is produced once per run by a configuration
//! collector and never mutated afterwards.
//!
//! # Invariants
//!
//! - `name` and `path` are non-empty
//! - `frontend.is_some()` if and only if `project_type == ProjectType::Web`
//!
//! The builder enforces them at `build()`. Values obtained any other way
//! (deserialisation, struct update in tests) are re-checked by `validate`,
//! which the orchestrator calls before touching the filesystem.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    value_objects::{BackendFramework, FrontendFramework, ProjectType},
};

/// The location value meaning "generate into the current directory".
pub const CURRENT_DIR: &str = ".";

// ── FrontendConfig ───────────────────────────────────────────────────────────

/// Frontend choices; only present inside a `Web` project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrontendConfig {
    pub framework: FrontendFramework,
    pub typescript: bool,
    pub tailwind_css: bool,
    pub eslint: bool,
}

impl FrontendConfig {
    /// A frontend with every toggle switched on (the prompt defaults).
    pub const fn new(framework: FrontendFramework) -> Self {
        Self {
            framework,
            typescript: true,
            tailwind_css: true,
            eslint: true,
        }
    }

    pub const fn with_typescript(mut self, on: bool) -> Self {
        self.typescript = on;
        self
    }

    pub const fn with_tailwind_css(mut self, on: bool) -> Self {
        self.tailwind_css = on;
        self
    }

    pub const fn with_eslint(mut self, on: bool) -> Self {
        self.eslint = on;
        self
    }
}

// ── Aggregate root ────────────────────────────────────────────────────────────

/// A validated project generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    name: String,
    path: String,
    #[serde(rename = "type")]
    project_type: ProjectType,
    backend_framework: BackendFramework,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    frontend: Option<FrontendConfig>,
}

impl ProjectConfig {
    /// Start building a new `ProjectConfig`.
    pub fn builder() -> ProjectConfigBuilder {
        ProjectConfigBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn path(&self) -> &str {
        &self.path
    }
    pub const fn project_type(&self) -> ProjectType {
        self.project_type
    }
    pub const fn backend_framework(&self) -> BackendFramework {
        self.backend_framework
    }
    pub const fn frontend(&self) -> Option<&FrontendConfig> {
        self.frontend.as_ref()
    }

    /// Whether the project is generated straight into the current directory.
    pub fn is_current_dir(&self) -> bool {
        self.path == CURRENT_DIR
    }

    /// Validate this configuration's internal consistency.
    ///
    /// Called automatically by the builder. Available for re-validation after
    /// deserialization or external construction.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidConfig("project name is empty".into()));
        }
        if self.path.trim().is_empty() {
            return Err(DomainError::InvalidConfig("project path is empty".into()));
        }

        match (self.project_type.has_frontend(), self.frontend.is_some()) {
            (true, false) => Err(DomainError::FrontendMismatch {
                project_type: self.project_type.to_string(),
                reason: "requires a frontend configuration",
            }),
            (false, true) => Err(DomainError::FrontendMismatch {
                project_type: self.project_type.to_string(),
                reason: "must not carry a frontend configuration",
            }),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for ProjectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} + {})",
            self.name, self.project_type, self.backend_framework
        )?;
        if let Some(frontend) = &self.frontend {
            write!(f, " + {}", frontend.framework)?;
        }
        Ok(())
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Fluent builder for [`ProjectConfig`].
#[derive(Debug, Clone, Default)]
pub struct ProjectConfigBuilder {
    name: Option<String>,
    path: Option<String>,
    project_type: Option<ProjectType>,
    backend_framework: Option<BackendFramework>,
    frontend: Option<FrontendConfig>,
}

impl ProjectConfigBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set name and path from a single location answer.
    ///
    /// `"."` keeps the current directory and names the project after it
    /// (`cwd_name`); anything else is used as both name and path.
    pub fn location(self, answer: &str, cwd: &Path) -> Self {
        let answer = answer.trim();
        if answer == CURRENT_DIR {
            let name = cwd
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("project")
                .to_string();
            self.name(name).path(CURRENT_DIR)
        } else {
            self.name(answer).path(answer)
        }
    }

    pub fn project_type(mut self, project_type: ProjectType) -> Self {
        self.project_type = Some(project_type);
        self
    }

    pub fn backend(mut self, framework: BackendFramework) -> Self {
        self.backend_framework = Some(framework);
        self
    }

    pub fn frontend(mut self, frontend: FrontendConfig) -> Self {
        self.frontend = Some(frontend);
        self
    }

    pub fn build(self) -> Result<ProjectConfig, DomainError> {
        let config = ProjectConfig {
            name: self
                .name
                .ok_or(DomainError::MissingRequiredField { field: "name" })?,
            path: self
                .path
                .ok_or(DomainError::MissingRequiredField { field: "path" })?,
            project_type: self
                .project_type
                .ok_or(DomainError::MissingRequiredField { field: "type" })?,
            backend_framework: self
                .backend_framework
                .ok_or(DomainError::MissingRequiredField { field: "backend" })?,
            frontend: self.frontend,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> ProjectConfigBuilder {
        ProjectConfig::builder()
            .name("demo")
            .path("demo")
            .project_type(ProjectType::Api)
            .backend(BackendFramework::Fiber)
    }

    #[test]
    fn api_without_frontend_builds() {
        let config = api().build().unwrap();
        assert_eq!(config.project_type(), ProjectType::Api);
        assert!(config.frontend().is_none());
    }

    #[test]
    fn api_with_frontend_is_rejected() {
        let err = api()
            .frontend(FrontendConfig::new(FrontendFramework::React))
            .build()
            .unwrap_err();
        assert!(matches!(err, DomainError::FrontendMismatch { .. }));
    }

    #[test]
    fn web_without_frontend_is_rejected() {
        let err = api().project_type(ProjectType::Web).build().unwrap_err();
        assert!(matches!(err, DomainError::FrontendMismatch { .. }));
    }

    #[test]
    fn web_with_frontend_builds() {
        let config = api()
            .project_type(ProjectType::Web)
            .frontend(FrontendConfig::new(FrontendFramework::NextJs).with_tailwind_css(false))
            .build()
            .unwrap();
        let frontend = config.frontend().unwrap();
        assert!(frontend.typescript);
        assert!(!frontend.tailwind_css);
    }

    #[test]
    fn missing_backend_is_reported_by_name() {
        let err = ProjectConfig::builder()
            .name("x")
            .path("x")
            .project_type(ProjectType::Api)
            .build()
            .unwrap_err();
        assert_eq!(err, DomainError::MissingRequiredField { field: "backend" });
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(api().name("  ").build().is_err());
    }

    #[test]
    fn dot_location_takes_name_from_cwd() {
        let config = api()
            .location(".", Path::new("/home/dev/shop"))
            .build()
            .unwrap();
        assert_eq!(config.name(), "shop");
        assert_eq!(config.path(), ".");
        assert!(config.is_current_dir());
    }

    #[test]
    fn other_location_is_name_and_path() {
        let config = api().location("newapp", Path::new("/tmp")).build().unwrap();
        assert_eq!(config.name(), "newapp");
        assert_eq!(config.path(), "newapp");
    }

    #[test]
    fn deserialized_config_can_violate_invariant_until_validated() {
        let json = r#"{"name":"a","path":"a","type":"web","backend_framework":"gin"}"#;
        let config: ProjectConfig = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_err());
    }
}
