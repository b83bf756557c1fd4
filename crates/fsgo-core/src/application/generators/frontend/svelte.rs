use crate::application::generators::{FrontendGenerator, TemplateFile};
use crate::domain::{FrontendConfig, FrontendFramework};

/// Svelte via `npm create svelte`. The creator asks its own questions, so
/// none of the toggles are forwarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct SvelteGenerator;

const ENV_FILES: &[TemplateFile] = &[
    TemplateFile::new(".env", "frontend/svelte/env"),
    TemplateFile::new(".env.example", "frontend/svelte/env.example"),
];

impl FrontendGenerator for SvelteGenerator {
    fn framework(&self) -> FrontendFramework {
        FrontendFramework::Svelte
    }

    fn build_commands(&self) -> &'static [&'static str] {
        &["npm run build", "npm run dev"]
    }

    fn create_command(&self, _frontend: &FrontendConfig) -> String {
        "npm create svelte@latest client".to_string()
    }

    fn env_files(&self) -> &'static [TemplateFile] {
        ENV_FILES
    }
}
