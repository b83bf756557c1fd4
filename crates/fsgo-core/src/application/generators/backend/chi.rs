use crate::application::generators::{BackendGenerator, TemplateFile};
use crate::domain::BackendFramework;

/// Chi v5 backend on top of `net/http`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChiGenerator;

const DEPENDENCIES: &[&str] = &[
    "github.com/go-chi/chi/v5",
    "github.com/go-chi/cors",
    "github.com/joho/godotenv",
    "go.uber.org/zap",
];

const FILES: &[TemplateFile] = &[
    TemplateFile::new("cmd/server/main.go", "backend/chi/main.go"),
    TemplateFile::new("api/api.go", "backend/chi/api.go"),
    TemplateFile::new("internal/routes/routes.go", "backend/chi/routes.go"),
    TemplateFile::new("pkg/response/response.go", "backend/chi/response.go"),
    TemplateFile::new(
        "internal/middleware/user-api-key.go",
        "backend/chi/user-api-key.go",
    ),
];

impl BackendGenerator for ChiGenerator {
    fn framework(&self) -> BackendFramework {
        BackendFramework::Chi
    }

    fn dependencies(&self) -> &'static [&'static str] {
        DEPENDENCIES
    }

    fn framework_files(&self) -> &'static [TemplateFile] {
        FILES
    }
}
