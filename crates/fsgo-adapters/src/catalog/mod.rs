//! Template catalog adapters.
//!
//! # Resolution order
//!
//! 1. **`$FSGO_TEMPLATES_DIR`** - environment override
//! 2. **`templates.local_path`** - from the configuration file
//! 3. the built-in templates
//!
//! The first existing directory of (1) and (2) is layered over the built-in
//! catalog; keys it does not provide still come from the built-ins. A
//! configured directory that does not exist is logged and ignored.

mod builtin;
mod directory;

pub use builtin::BuiltinCatalog;
pub use directory::DirectoryCatalog;

use std::path::{Path, PathBuf};

use fsgo_core::{
    application::{ApplicationError, ports::TemplateCatalog},
    error::FsgoResult,
};
use tracing::{info, instrument, warn};

/// Environment variable naming a template overlay directory.
pub const TEMPLATES_DIR_ENV: &str = "FSGO_TEMPLATES_DIR";

/// Catalogs consulted in order; the first one that has a key wins.
pub struct LayeredCatalog {
    layers: Vec<Box<dyn TemplateCatalog>>,
}

impl LayeredCatalog {
    pub fn new(layers: Vec<Box<dyn TemplateCatalog>>) -> Self {
        Self { layers }
    }
}

impl TemplateCatalog for LayeredCatalog {
    fn render(&self, key: &str) -> FsgoResult<&str> {
        self.layers
            .iter()
            .find_map(|layer| layer.render(key).ok())
            .ok_or_else(|| {
                ApplicationError::TemplateMissing {
                    key: key.to_string(),
                }
                .into()
            })
    }

    fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.layers.iter().flat_map(|l| l.keys()).collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }
}

/// Build the catalog for a run from the overlay candidates.
#[instrument(skip_all)]
pub fn resolve_catalog(configured: Option<&Path>) -> FsgoResult<Box<dyn TemplateCatalog>> {
    let from_env = std::env::var_os(TEMPLATES_DIR_ENV).map(PathBuf::from);
    let candidates = from_env.iter().map(PathBuf::as_path).chain(configured);

    for dir in candidates {
        if !dir.is_dir() {
            warn!(path = %dir.display(), "template directory not found, ignoring");
            continue;
        }
        let overlay = DirectoryCatalog::load(dir)?;
        info!(path = %dir.display(), templates = overlay.len(), "using template overrides");
        return Ok(Box::new(LayeredCatalog::new(vec![
            Box::new(overlay),
            Box::new(BuiltinCatalog),
        ])));
    }

    Ok(Box::new(BuiltinCatalog))
}
