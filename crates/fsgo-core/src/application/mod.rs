//! Application layer for fsgo.
//!
//! This layer contains:
//! - **Services**: The generation orchestrator (`ProjectGenerator`)
//! - **Generators**: The generator contract and one generator per framework
//! - **Registry**: Framework → generator lookup
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types

pub mod error;
pub mod generators;
pub mod ports;
pub mod registry;
pub mod services;

pub use services::{GenerationReport, ProjectGenerator};

pub use generators::{BackendGenerator, FrontendGenerator, GenerationContext, TemplateFile};
pub use registry::GeneratorRegistry;

// Re-export port traits (for adapter implementation)
pub use ports::{CommandRunner, CommandSpec, ConfigCollector, Filesystem, TemplateCatalog};

pub use error::{ApplicationError, GenerationStep};
