//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `fsgo-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Directory and file primitives
//!   - `CommandRunner`: External toolchain invocation
//!   - `TemplateCatalog`: Static template bodies
//!   - `ConfigCollector`: Prompt flow (implemented in the CLI)

pub mod output;

pub use output::{CommandRunner, CommandSpec, ConfigCollector, Filesystem, TemplateCatalog};

#[cfg(test)]
pub use output::{MockCommandRunner, MockConfigCollector, MockFilesystem};
