//! fsgo Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the fsgo
//! full-stack scaffolder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             fsgo-cli (CLI)              │
//! │   (prompts, flags, ConfigCollector)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          ProjectGenerator               │
//! │  collect → backend → frontend → root    │
//! └──────────────────┬──────────────────────┘
//!                    │ looks up
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │  GeneratorRegistry → Backend/Frontend   │
//! │             Generators                  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses ports
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     fsgo-adapters (Infrastructure)      │
//! │ Filesystem, CommandRunner, Catalog      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fsgo_core::prelude::*;
//!
//! let config = ProjectConfig::builder()
//!     .name("shop")
//!     .path("shop")
//!     .project_type(ProjectType::Api)
//!     .backend(BackendFramework::Fiber)
//!     .build()?;
//!
//! // Adapters come from fsgo-adapters
//! let generator = ProjectGenerator::new(
//!     GeneratorRegistry::with_builtin(),
//!     filesystem,
//!     runner,
//!     catalog,
//! );
//! let report = generator.generate_config(&config)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

pub mod prelude {
    pub use crate::application::{
        BackendGenerator, FrontendGenerator, GenerationContext, GenerationReport,
        GeneratorRegistry, ProjectGenerator,
        ports::{CommandRunner, CommandSpec, ConfigCollector, Filesystem, TemplateCatalog},
    };
    pub use crate::domain::{
        BackendFramework, FrontendConfig, FrontendFramework, ProjectConfig, ProjectType,
    };
    pub use crate::error::{FsgoError, FsgoResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
