// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for fsgo.
//!
//! The configuration model for a generation run: what kind of project, which
//! backend, which frontend and with which toggles. Pure data and validation;
//! everything that touches disk or spawns processes sits behind ports in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: No filesystem, network, or external calls
//! - **No logging**: Only std library + thiserror + serde
//! - **Immutable entities**: `ProjectConfig` is built once and then read
pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{
    FrontendConfig, ProjectConfig, ProjectConfigBuilder, project_config::CURRENT_DIR,
};
pub use error::{DomainError, ErrorCategory};
pub use value_objects::{BackendFramework, FrontendFramework, ProjectType};
