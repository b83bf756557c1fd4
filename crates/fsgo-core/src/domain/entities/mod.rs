pub mod project_config;

pub use crate::domain::DomainError;
pub use project_config::{FrontendConfig, ProjectConfig, ProjectConfigBuilder};
