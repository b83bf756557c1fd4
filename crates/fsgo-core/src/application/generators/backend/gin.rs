use crate::application::generators::{BackendGenerator, TemplateFile};
use crate::domain::BackendFramework;

#[derive(Debug, Default, Clone, Copy)]
pub struct GinGenerator;

const DEPENDENCIES: &[&str] = &[
    "github.com/gin-gonic/gin",
    "github.com/joho/godotenv",
    "go.uber.org/zap",
    "github.com/gin-contrib/cors",
];

const FILES: &[TemplateFile] = &[
    TemplateFile::new("cmd/server/main.go", "backend/gin/main.go"),
    TemplateFile::new("api/api.go", "backend/gin/api.go"),
    TemplateFile::new("internal/routes/routes.go", "backend/gin/routes.go"),
    TemplateFile::new("pkg/response/response.go", "backend/gin/response.go"),
    TemplateFile::new(
        "internal/middleware/user-api-key.go",
        "backend/gin/user-api-key.go",
    ),
];

impl BackendGenerator for GinGenerator {
    fn framework(&self) -> BackendFramework {
        BackendFramework::Gin
    }

    fn dependencies(&self) -> &'static [&'static str] {
        DEPENDENCIES
    }

    fn framework_files(&self) -> &'static [TemplateFile] {
        FILES
    }
}
