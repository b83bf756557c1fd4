//! Application services - orchestrate use cases.

pub mod project_generator;

pub use project_generator::{GenerationReport, ProjectGenerator, ROOT_FILES};
