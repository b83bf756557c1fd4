use crate::application::generators::{BackendGenerator, TemplateFile};
use crate::domain::BackendFramework;

/// Fiber v3 backend: layered `controller`/`service`/`repo`/`model` tree plus
/// a rate limiter.
#[derive(Debug, Default, Clone, Copy)]
pub struct FiberGenerator;

const DEPENDENCIES: &[&str] = &[
    "github.com/gofiber/fiber/v3",
    "github.com/joho/godotenv",
    "go.uber.org/zap",
    "github.com/gofiber/helmet/v2",
    "github.com/gofiber/cors",
];

const DIRECTORIES: &[&str] = &[
    "internal/controller",
    "internal/model",
    "internal/repo",
    "internal/service",
];

const FILES: &[TemplateFile] = &[
    TemplateFile::new("cmd/server/main.go", "backend/fiber/main.go"),
    TemplateFile::new("api/api.go", "backend/fiber/api.go"),
    TemplateFile::new("internal/routes/routes.go", "backend/fiber/routes.go"),
    TemplateFile::new("pkg/response/response.go", "backend/fiber/response.go"),
    TemplateFile::new(
        "internal/middleware/user-api-key.go",
        "backend/fiber/user-api-key.go",
    ),
    TemplateFile::new(
        "internal/middleware/rate-limit.go",
        "backend/fiber/rate-limit.go",
    ),
];

impl BackendGenerator for FiberGenerator {
    fn framework(&self) -> BackendFramework {
        BackendFramework::Fiber
    }

    fn dependencies(&self) -> &'static [&'static str] {
        DEPENDENCIES
    }

    fn framework_files(&self) -> &'static [TemplateFile] {
        FILES
    }

    fn extra_directories(&self) -> &'static [&'static str] {
        DIRECTORIES
    }
}
