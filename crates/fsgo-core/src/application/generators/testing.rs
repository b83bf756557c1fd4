//! Shared fixtures for generator and orchestrator unit tests.

use crate::application::ApplicationError;
use crate::application::ports::TemplateCatalog;
use crate::domain::{BackendFramework, FrontendConfig, ProjectConfig, ProjectType};
use crate::error::FsgoResult;

const BODY: &str = "// generated\n";

/// Answers every key with the same body.
pub(crate) struct StubCatalog;

impl TemplateCatalog for StubCatalog {
    fn render(&self, _key: &str) -> FsgoResult<&str> {
        Ok(BODY)
    }

    fn keys(&self) -> Vec<&str> {
        Vec::new()
    }
}

/// Like [`StubCatalog`] but without one key.
pub(crate) struct MissingKeyCatalog(pub &'static str);

impl TemplateCatalog for MissingKeyCatalog {
    fn render(&self, key: &str) -> FsgoResult<&str> {
        if key == self.0 {
            return Err(ApplicationError::TemplateMissing {
                key: key.to_string(),
            }
            .into());
        }
        Ok(BODY)
    }

    fn keys(&self) -> Vec<&str> {
        Vec::new()
    }
}

pub(crate) fn api_config(backend: BackendFramework) -> ProjectConfig {
    ProjectConfig::builder()
        .name("demo")
        .path("demo")
        .project_type(ProjectType::Api)
        .backend(backend)
        .build()
        .unwrap()
}

pub(crate) fn web_config(backend: BackendFramework, frontend: FrontendConfig) -> ProjectConfig {
    ProjectConfig::builder()
        .name("demo")
        .path("demo")
        .project_type(ProjectType::Web)
        .backend(backend)
        .frontend(frontend)
        .build()
        .unwrap()
}
