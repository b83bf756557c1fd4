//! Framework → generator lookup tables.
//!
//! Built once at startup and handed to the orchestrator; never mutated while
//! a run is in progress. Registering a second generator for a framework
//! replaces the first.

use std::collections::HashMap;
use tracing::{debug, warn};

use crate::application::ApplicationError;
use crate::application::generators::{
    BackendGenerator, ChiGenerator, EchoGenerator, FiberGenerator, FrontendGenerator,
    GinGenerator, NextJsGenerator, ReactGenerator, SvelteGenerator,
};
use crate::domain::{BackendFramework, FrontendFramework};
use crate::error::FsgoResult;

#[derive(Default)]
pub struct GeneratorRegistry {
    backends: HashMap<BackendFramework, Box<dyn BackendGenerator>>,
    frontends: HashMap<FrontendFramework, Box<dyn FrontendGenerator>>,
}

impl GeneratorRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every generator that ships with fsgo.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register_backend(Box::new(FiberGenerator));
        registry.register_backend(Box::new(GinGenerator));
        registry.register_backend(Box::new(EchoGenerator));
        registry.register_backend(Box::new(ChiGenerator));
        registry.register_frontend(Box::new(NextJsGenerator));
        registry.register_frontend(Box::new(ReactGenerator));
        registry.register_frontend(Box::new(SvelteGenerator));
        registry
    }

    /// Insert under `generator.framework()`. Returns the generator it replaced.
    pub fn register_backend(
        &mut self,
        generator: Box<dyn BackendGenerator>,
    ) -> Option<Box<dyn BackendGenerator>> {
        let framework = generator.framework();
        let previous = self.backends.insert(framework, generator);
        if previous.is_some() {
            warn!(%framework, "backend generator replaced");
        } else {
            debug!(%framework, "backend generator registered");
        }
        previous
    }

    /// Insert under `generator.framework()`. Returns the generator it replaced.
    pub fn register_frontend(
        &mut self,
        generator: Box<dyn FrontendGenerator>,
    ) -> Option<Box<dyn FrontendGenerator>> {
        let framework = generator.framework();
        let previous = self.frontends.insert(framework, generator);
        if previous.is_some() {
            warn!(%framework, "frontend generator replaced");
        } else {
            debug!(%framework, "frontend generator registered");
        }
        previous
    }

    pub fn backend(&self, framework: BackendFramework) -> Option<&dyn BackendGenerator> {
        self.backends.get(&framework).map(|g| g.as_ref())
    }

    pub fn frontend(&self, framework: FrontendFramework) -> Option<&dyn FrontendGenerator> {
        self.frontends.get(&framework).map(|g| g.as_ref())
    }

    pub fn require_backend(&self, framework: BackendFramework) -> FsgoResult<&dyn BackendGenerator> {
        self.backend(framework).ok_or_else(|| {
            ApplicationError::GeneratorNotFound {
                side: "backend",
                framework: framework.to_string(),
            }
            .into()
        })
    }

    pub fn require_frontend(
        &self,
        framework: FrontendFramework,
    ) -> FsgoResult<&dyn FrontendGenerator> {
        self.frontend(framework).ok_or_else(|| {
            ApplicationError::GeneratorNotFound {
                side: "frontend",
                framework: framework.to_string(),
            }
            .into()
        })
    }

    /// Registered backend keys, in `BackendFramework::ALL` order.
    pub fn backend_frameworks(&self) -> Vec<BackendFramework> {
        BackendFramework::ALL
            .into_iter()
            .filter(|f| self.backends.contains_key(f))
            .collect()
    }

    /// Registered frontend keys, in `FrontendFramework::ALL` order.
    pub fn frontend_frameworks(&self) -> Vec<FrontendFramework> {
        FrontendFramework::ALL
            .into_iter()
            .filter(|f| self.frontends.contains_key(f))
            .collect()
    }
}

impl std::fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("backends", &self.backend_frameworks())
            .field("frontends", &self.frontend_frameworks())
            .finish()
    }
}
