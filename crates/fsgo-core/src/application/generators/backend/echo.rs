use crate::application::generators::{BackendGenerator, TemplateFile};
use crate::domain::BackendFramework;

/// Echo v4 backend. CORS comes from Echo's own middleware package, so no
/// separate module is fetched for it.
#[derive(Debug, Default, Clone, Copy)]
pub struct EchoGenerator;

const DEPENDENCIES: &[&str] = &[
    "github.com/labstack/echo/v4",
    "github.com/joho/godotenv",
    "go.uber.org/zap",
];

const FILES: &[TemplateFile] = &[
    TemplateFile::new("cmd/server/main.go", "backend/echo/main.go"),
    TemplateFile::new("api/api.go", "backend/echo/api.go"),
    TemplateFile::new("internal/routes/routes.go", "backend/echo/routes.go"),
    TemplateFile::new("pkg/response/response.go", "backend/echo/response.go"),
    TemplateFile::new(
        "internal/middleware/user-api-key.go",
        "backend/echo/user-api-key.go",
    ),
];

impl BackendGenerator for EchoGenerator {
    fn framework(&self) -> BackendFramework {
        BackendFramework::Echo
    }

    fn dependencies(&self) -> &'static [&'static str] {
        DEPENDENCIES
    }

    fn framework_files(&self) -> &'static [TemplateFile] {
        FILES
    }
}
