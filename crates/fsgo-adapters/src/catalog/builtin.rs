//! Template bodies compiled into the binary.

use fsgo_core::{
    application::{ApplicationError, ports::TemplateCatalog},
    error::FsgoResult,
};

macro_rules! builtin_templates {
    ($($key:literal),* $(,)?) => {
        &[$(($key, include_str!(concat!("../../templates/", $key)))),*]
    };
}

/// `(logical path, body)`, sorted by logical path.
const TEMPLATES: &[(&str, &str)] = builtin_templates![
    "backend/chi/api.go",
    "backend/chi/main.go",
    "backend/chi/response.go",
    "backend/chi/routes.go",
    "backend/chi/user-api-key.go",
    "backend/common/Dockerfile",
    "backend/common/air.toml",
    "backend/common/config.go",
    "backend/common/connect.go",
    "backend/common/env",
    "backend/common/env.example",
    "backend/common/env.go",
    "backend/common/httpStatusCode.go",
    "backend/common/migrate.go",
    "backend/common/schema.sql",
    "backend/common/test-db.go",
    "backend/common/zap.go",
    "backend/echo/api.go",
    "backend/echo/main.go",
    "backend/echo/response.go",
    "backend/echo/routes.go",
    "backend/echo/user-api-key.go",
    "backend/fiber/api.go",
    "backend/fiber/main.go",
    "backend/fiber/rate-limit.go",
    "backend/fiber/response.go",
    "backend/fiber/routes.go",
    "backend/fiber/user-api-key.go",
    "backend/gin/api.go",
    "backend/gin/main.go",
    "backend/gin/response.go",
    "backend/gin/routes.go",
    "backend/gin/user-api-key.go",
    "frontend/next/Hero.tsx",
    "frontend/next/Navbar.tsx",
    "frontend/next/Typography.tsx",
    "frontend/next/callback-page.tsx",
    "frontend/next/env",
    "frontend/next/env.example",
    "frontend/next/signin-page.tsx",
    "frontend/react/env",
    "frontend/react/env.example",
    "frontend/svelte/env",
    "frontend/svelte/env.example",
    "root/Makefile",
    "root/README.md",
    "root/gitignore",
];

/// The catalog shipped with fsgo. Covers every key the built-in generators
/// and the root files use.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self
    }

    pub fn get(&self, key: &str) -> Option<&'static str> {
        TEMPLATES
            .binary_search_by(|(k, _)| k.cmp(&key))
            .ok()
            .map(|i| TEMPLATES[i].1)
    }
}

impl TemplateCatalog for BuiltinCatalog {
    fn render(&self, key: &str) -> FsgoResult<&str> {
        self.get(key).ok_or_else(|| {
            ApplicationError::TemplateMissing {
                key: key.to_string(),
            }
            .into()
        })
    }

    fn keys(&self) -> Vec<&str> {
        TEMPLATES.iter().map(|(k, _)| *k).collect()
    }
}
