//! Infrastructure adapters for fsgo.
//!
//! This crate implements the driven ports defined in
//! `fsgo-core::application::ports`. It contains all external dependencies and
//! I/O operations: the filesystem, process spawning and template bodies.

pub mod catalog;
pub mod command;
pub mod filesystem;

// Re-export commonly used adapters
pub use catalog::{BuiltinCatalog, DirectoryCatalog, LayeredCatalog, resolve_catalog};
pub use command::{ScriptedCommandRunner, SystemCommandRunner};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
